//! Non-reactive table model.
//!
//! Holds `(data, columns, meta, state)` and recomputes the view on every
//! call. The Leptos component derives the same view through a `Memo`; this
//! type is what the tests drive directly.

use super::column::{sanitize_columns, Accessor, ColumnDef, ColumnKind, TableRecord};
use super::meta::TableMeta;
use super::pipeline::{compute_view, TableView};
use super::state::TableState;

pub struct TableModel<T> {
    data: Vec<T>,
    columns: Vec<ColumnDef<T>>,
    meta: TableMeta<T>,
    state: TableState,
    id_field: Option<&'static str>,
}

impl<T: TableRecord> TableModel<T> {
    pub fn new(data: Vec<T>, columns: Vec<ColumnDef<T>>, page_size: usize) -> Self {
        Self {
            data,
            columns: sanitize_columns(columns),
            meta: TableMeta::default(),
            state: TableState::new(page_size),
            id_field: None,
        }
    }

    pub fn with_id_field(mut self, id_field: &'static str) -> Self {
        self.id_field = Some(id_field);
        self
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn columns(&self) -> &[ColumnDef<T>] {
        &self.columns
    }

    pub fn state(&self) -> &TableState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut TableState {
        &mut self.state
    }

    pub fn set_data(&mut self, data: Vec<T>) {
        self.data = data;
    }

    pub fn set_columns(&mut self, columns: Vec<ColumnDef<T>>) {
        self.columns = sanitize_columns(columns);
    }

    /// Replaces the callbacks; actions fired afterwards see only the new ones
    pub fn set_meta(&mut self, meta: TableMeta<T>) {
        self.meta = meta;
    }

    /// Recomputes the visible page and writes the clamped index back
    pub fn view(&mut self) -> TableView {
        let view = compute_view(&self.data, &self.columns, &self.state);
        self.state.clamp(view.page_count);
        view
    }

    pub fn visible_rows(&mut self) -> Vec<&T> {
        let view = self.view();
        view.rows.iter().map(|&idx| &self.data[idx]).collect()
    }

    /// Fires `action_key` of the actions column for the row at `data_index`.
    /// Returns false when there is no such row, column or action, or when the
    /// current meta does not provide what the action needs.
    pub fn invoke_action(&self, data_index: usize, action_key: &str) -> bool {
        let Some(row) = self.data.get(data_index) else {
            return false;
        };
        for column in &self.columns {
            if let ColumnKind::Actions { id_accessor, actions } = &column.kind {
                if let Some(action) = actions.iter().find(|a| a.key == action_key) {
                    if !action.is_available(row, &self.meta) {
                        return false;
                    }
                    let id = resolve_row_id(row, Some(id_accessor), self.id_field, data_index);
                    action.invoke(row, &id, &self.meta);
                    return true;
                }
            }
        }
        false
    }
}

/// Row id passed to actions: the explicit id field, then the column's id
/// accessor, then `"id"`, then `"_id"`, and finally the row position.
pub fn resolve_row_id<T: TableRecord>(
    row: &T,
    id_accessor: Option<&Accessor<T>>,
    id_field: Option<&str>,
    position: usize,
) -> String {
    let explicit = id_field.and_then(|key| row.field(key));
    let from_accessor = || id_accessor.map(|a| a.read(row));
    let inferred = || row.field("id").or_else(|| row.field("_id"));

    [explicit, from_accessor(), inferred()]
        .into_iter()
        .flatten()
        .find(|value| !value.is_empty())
        .map(|value| value.filter_text())
        .unwrap_or_else(|| position.to_string())
}

impl<T> std::fmt::Debug for TableModel<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TableModel")
            .field("rows", &self.data.len())
            .field("columns", &self.columns.len())
            .field("state", &self.state)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data_table::actions::ActionDescriptor;
    use crate::shared::data_table::helpers::{actions_column, derived_column, text_column};
    use crate::shared::data_table::value::CellValue;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Debug, PartialEq)]
    struct Pupil {
        id: String,
        name: String,
    }

    impl TableRecord for Pupil {
        fn field(&self, key: &str) -> Option<CellValue> {
            match key {
                "id" => Some(self.id.clone().into()),
                "name" => Some(self.name.clone().into()),
                _ => None,
            }
        }
    }

    fn pupils() -> Vec<Pupil> {
        vec![
            Pupil { id: "1".into(), name: "Amina".into() },
            Pupil { id: "2".into(), name: "Bilal".into() },
        ]
    }

    fn columns() -> Vec<ColumnDef<Pupil>> {
        vec![
            text_column("name", "Name"),
            actions_column(vec![ActionDescriptor::edit(), ActionDescriptor::delete()]),
        ]
    }

    #[test]
    fn test_delete_uses_live_callback() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let mut model = TableModel::new(pupils(), columns(), 10);

        let sink = calls.clone();
        model.set_meta(TableMeta::new().on_delete(move |id| {
            sink.lock().unwrap().push(format!("f1:{}", id));
        }));
        let sink = calls.clone();
        model.set_meta(TableMeta::new().on_delete(move |id| {
            sink.lock().unwrap().push(format!("f2:{}", id));
        }));

        assert!(model.invoke_action(0, "delete"));
        assert!(model.invoke_action(1, "delete"));
        assert_eq!(*calls.lock().unwrap(), vec!["f2:1", "f2:2"]);
    }

    #[test]
    fn test_id_field_takes_precedence_over_id_column() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let mut model = TableModel::new(pupils(), columns(), 10).with_id_field("name");
        model.set_meta(TableMeta::new().on_delete(move |id| {
            sink.lock().unwrap().push(id.to_string());
        }));

        assert!(model.invoke_action(1, "delete"));
        assert_eq!(*seen.lock().unwrap(), vec!["Bilal".to_string()]);
    }

    #[test]
    fn test_action_without_callback_is_not_fired() {
        let model = TableModel::new(pupils(), columns(), 10);
        assert!(!model.invoke_action(0, "edit"));
        assert!(!model.invoke_action(0, "delete"));
        assert!(!model.invoke_action(9, "delete"));
        assert!(!model.invoke_action(0, "unknown"));
    }

    #[test]
    fn test_edit_receives_row() {
        let seen = Arc::new(Mutex::new(None));
        let sink = seen.clone();
        let mut model = TableModel::new(pupils(), columns(), 10);
        model.set_meta(TableMeta::new().on_edit(move |row: &Pupil| {
            *sink.lock().unwrap() = Some(row.name.clone());
        }));
        assert!(model.invoke_action(1, "edit"));
        assert_eq!(seen.lock().unwrap().as_deref(), Some("Bilal"));
    }

    #[test]
    fn test_view_recomputed_on_data_change() {
        let mut model = TableModel::new(pupils(), columns(), 1);
        model.state_mut().go_to_page(1);
        assert_eq!(model.view().rows, vec![1]);

        // delete of the last row: page 1 no longer exists
        model.set_data(vec![pupils().remove(0)]);
        let view = model.view();
        assert_eq!(view.page_index, 0);
        assert_eq!(view.rows, vec![0]);
        assert_eq!(model.state().pagination.page_index, 0);

        model.set_data(Vec::new());
        let view = model.view();
        assert!(view.is_empty());
        assert_eq!(view.page_count, 0);
    }

    #[test]
    fn test_view_recomputed_on_column_change() {
        let mut model = TableModel::new(pupils(), columns(), 10);
        model.state_mut().set_global_filter("2");
        assert!(model.view().is_empty());

        let mut cols = columns();
        cols.push(text_column("id", "Id"));
        model.set_columns(cols);
        assert_eq!(model.view().rows, vec![1]);

        model.set_columns(vec![derived_column("initial", "Initial", |p: &Pupil| {
            p.name.chars().next().map(String::from).into()
        })]);
        model.state_mut().set_global_filter("b");
        let names: Vec<_> = model.visible_rows().iter().map(|p| p.name.clone()).collect();
        assert_eq!(names, vec!["Bilal"]);
    }

    #[test]
    fn test_resolve_row_id_fallbacks() {
        let pupil = pupils().remove(0);
        assert_eq!(resolve_row_id(&pupil, None, None, 7), "1");
        assert_eq!(resolve_row_id(&pupil, None, Some("name"), 7), "Amina");
        assert_eq!(resolve_row_id(&pupil, None, Some("missing"), 7), "1");

        struct Anonymous;
        impl TableRecord for Anonymous {
            fn field(&self, _key: &str) -> Option<CellValue> {
                None
            }
        }
        assert_eq!(resolve_row_id(&Anonymous, None, None, 7), "7");
    }
}
