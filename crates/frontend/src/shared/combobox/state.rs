//! Состояние комбобокса без привязки к DOM: запрос, открыт/закрыт,
//! список кандидатов.

use std::sync::Arc;

use crate::shared::data_table::TableRecord;

type FieldFn<U> = Arc<dyn Fn(&U) -> String + Send + Sync>;

/// Which field of an item is its label and which is its identifier
pub struct ComboboxFields<U> {
    display: FieldFn<U>,
    value: FieldFn<U>,
}

impl<U> Clone for ComboboxFields<U> {
    fn clone(&self) -> Self {
        Self {
            display: self.display.clone(),
            value: self.value.clone(),
        }
    }
}

impl<U> ComboboxFields<U> {
    pub fn new(
        display: impl Fn(&U) -> String + Send + Sync + 'static,
        value: impl Fn(&U) -> String + Send + Sync + 'static,
    ) -> Self {
        Self {
            display: Arc::new(display),
            value: Arc::new(value),
        }
    }

    pub fn display(&self, item: &U) -> String {
        (self.display)(item)
    }

    pub fn value(&self, item: &U) -> String {
        (self.value)(item)
    }
}

impl<U: TableRecord> ComboboxFields<U> {
    /// Reads both fields by key; a missing field reads as ""
    pub fn by_key(display_key: &'static str, value_key: &'static str) -> Self {
        Self::new(
            move |item: &U| {
                item.field(display_key)
                    .map(|v| v.display_text())
                    .unwrap_or_default()
            },
            move |item: &U| {
                item.field(value_key)
                    .map(|v| v.filter_text())
                    .unwrap_or_default()
            },
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Dropdown {
    /// Closed or disabled: nothing is rendered
    Hidden,
    /// No items and no query; the caller shows loading/empty outside
    Empty,
    NothingFound,
    /// Indices into `items`, in their original order
    Options(Vec<usize>),
}

/// Indices of items whose label contains `query` (case-insensitive)
pub fn candidates<U>(items: &[U], fields: &ComboboxFields<U>, query: &str) -> Vec<usize> {
    let needle = query.to_lowercase();
    items
        .iter()
        .enumerate()
        .filter(|(_, item)| needle.is_empty() || fields.display(item).to_lowercase().contains(&needle))
        .map(|(idx, _)| idx)
        .collect()
}

/// Label shown for the current selection ("" for none)
pub fn display_text<U>(selected: Option<&U>, fields: &ComboboxFields<U>) -> String {
    selected.map(|item| fields.display(item)).unwrap_or_default()
}

pub fn position_of<U>(items: &[U], fields: &ComboboxFields<U>, value: &str) -> Option<usize> {
    items.iter().position(|item| fields.value(item) == value)
}

/// Item whose value field equals `value`, for parents that keep only an id
pub fn find_by_value<U: Clone>(items: &[U], fields: &ComboboxFields<U>, value: Option<&str>) -> Option<U> {
    value
        .and_then(|v| position_of(items, fields, v))
        .and_then(|idx| items.get(idx).cloned())
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ComboboxState {
    pub query: String,
    pub open: bool,
    /// The input holds what the user typed, even when that is ""
    pub typing: bool,
}

impl ComboboxState {
    /// Typing opens the list. Ignored entirely when disabled.
    pub fn set_query(&mut self, text: impl Into<String>, disabled: bool) -> bool {
        if disabled {
            return false;
        }
        self.query = text.into();
        self.open = true;
        self.typing = true;
        true
    }

    pub fn open(&mut self, disabled: bool) {
        if !disabled {
            self.open = true;
        }
    }

    /// Closing drops whatever was typed
    pub fn close(&mut self) {
        self.open = false;
        self.typing = false;
        self.query.clear();
    }

    pub fn toggle(&mut self, disabled: bool) {
        if self.open {
            self.close();
        } else {
            self.open(disabled);
        }
    }

    /// Returns the item to report upward
    pub fn select<U: Clone>(&mut self, item: &U) -> Option<U> {
        self.close();
        Some(item.clone())
    }

    pub fn clear<U>(&mut self) -> Option<U> {
        self.close();
        None
    }

    pub fn dropdown<U>(&self, items: &[U], fields: &ComboboxFields<U>, disabled: bool) -> Dropdown {
        if disabled || !self.open {
            return Dropdown::Hidden;
        }
        let found = candidates(items, fields, &self.query);
        match (found.is_empty(), self.query.is_empty()) {
            (false, _) => Dropdown::Options(found),
            (true, true) => Dropdown::Empty,
            (true, false) => Dropdown::NothingFound,
        }
    }

    /// While the user types the input shows the query, otherwise the selection
    pub fn input_text<U>(&self, selected: Option<&U>, fields: &ComboboxFields<U>) -> String {
        if self.typing {
            self.query.clone()
        } else {
            display_text(selected, fields)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data_table::CellValue;

    #[derive(Clone, Debug, PartialEq)]
    struct Class {
        id: String,
        name: String,
    }

    impl TableRecord for Class {
        fn field(&self, key: &str) -> Option<CellValue> {
            match key {
                "_id" => Some(self.id.clone().into()),
                "name" => Some(self.name.clone().into()),
                _ => None,
            }
        }
    }

    fn classes() -> Vec<Class> {
        ["Grade 7 A", "Grade 7 B", "Grade 8 A"]
            .iter()
            .enumerate()
            .map(|(i, name)| Class {
                id: format!("c{}", i + 1),
                name: name.to_string(),
            })
            .collect()
    }

    fn fields() -> ComboboxFields<Class> {
        ComboboxFields::by_key("name", "_id")
    }

    #[test]
    fn test_candidates_substring_case_insensitive() {
        let items = classes();
        assert_eq!(candidates(&items, &fields(), ""), vec![0, 1, 2]);
        assert_eq!(candidates(&items, &fields(), "7"), vec![0, 1]);
        assert_eq!(candidates(&items, &fields(), "GRADE 8"), vec![2]);
        // not fuzzy
        assert!(candidates(&items, &fields(), "g7").is_empty());
    }

    #[test]
    fn test_select_round_trip() {
        let items = classes();
        let fields = fields();
        let mut state = ComboboxState::default();
        state.set_query("7 b", false);

        let Dropdown::Options(found) = state.dropdown(&items, &fields, false) else {
            panic!("expected options");
        };
        assert_eq!(found, vec![1]);

        let selected = state.select(&items[found[0]]);
        assert_eq!(state, ComboboxState::default());
        assert_eq!(selected.as_ref().map(|c| c.id.as_str()), Some("c2"));
        assert_eq!(state.input_text(selected.as_ref(), &fields), "Grade 7 B");
        assert_eq!(state.dropdown(&items, &fields, false), Dropdown::Hidden);

        let cleared: Option<Class> = state.clear();
        assert_eq!(cleared, None);
        assert_eq!(display_text(cleared.as_ref(), &fields), "");
    }

    #[test]
    fn test_erased_query_stays_empty() {
        let items = classes();
        let fields = fields();
        let mut state = ComboboxState::default();
        let selected = state.select(&items[1]);
        assert_eq!(state.input_text(selected.as_ref(), &fields), "Grade 7 B");

        state.set_query("G", false);
        assert_eq!(state.input_text(selected.as_ref(), &fields), "G");
        state.set_query("", false);
        assert_eq!(state.input_text(selected.as_ref(), &fields), "");
        assert!(matches!(state.dropdown(&items, &fields, false), Dropdown::Options(_)));

        // leaving the field brings the selection label back
        state.close();
        assert_eq!(state.input_text(selected.as_ref(), &fields), "Grade 7 B");
    }

    #[test]
    fn test_disabled_is_inert() {
        let items = classes();
        let mut state = ComboboxState::default();
        assert!(!state.set_query("grade", true));
        assert_eq!(state.query, "");
        state.open(true);
        assert!(!state.open);

        // even an open state renders nothing once disabled
        state.set_query("grade", false);
        assert_eq!(state.dropdown(&items, &fields(), true), Dropdown::Hidden);
    }

    #[test]
    fn test_nothing_found_vs_empty() {
        let none: Vec<Class> = Vec::new();
        let mut state = ComboboxState::default();
        state.open(false);
        assert_eq!(state.dropdown(&none, &fields(), false), Dropdown::Empty);
        state.set_query("x", false);
        assert_eq!(state.dropdown(&none, &fields(), false), Dropdown::NothingFound);
        assert_eq!(state.dropdown(&classes(), &fields(), false), Dropdown::NothingFound);
    }

    #[test]
    fn test_position_of_value() {
        let items = classes();
        assert_eq!(position_of(&items, &fields(), "c3"), Some(2));
        assert_eq!(position_of(&items, &fields(), "zz"), None);
    }

    #[test]
    fn test_find_by_value() {
        let items = classes();
        let found = find_by_value(&items, &fields(), Some("c3"));
        assert_eq!(found.map(|c| c.id), Some("c3".to_string()));
        assert!(find_by_value(&items, &fields(), None).is_none());
        assert!(find_by_value(&items, &fields(), Some("missing")).is_none());
    }
}
