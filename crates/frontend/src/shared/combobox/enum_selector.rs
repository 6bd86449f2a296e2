//! Выбор значения перечисления: подпись показывается, ключ сравнивается.

use contracts::enums::{AttendanceStatus, BillType, Gender, Role};
use leptos::prelude::*;

use super::component::Combobox;
use super::state::ComboboxFields;

/// Closed set of values with a wire key and a display label
pub trait EnumChoice: Copy + PartialEq + Send + Sync + 'static {
    fn choices() -> Vec<Self>;
    fn key(&self) -> &'static str;
    fn label(&self) -> &'static str;
}

/// Options show the label, identity is the key
pub fn enum_fields<E: EnumChoice>() -> ComboboxFields<E> {
    ComboboxFields::new(|e: &E| e.label().to_string(), |e: &E| e.key().to_string())
}

#[component]
pub fn EnumSelector<E: EnumChoice>(
    #[prop(into)] value: Signal<Option<E>>,
    on_change: Callback<Option<E>>,
    #[prop(into, optional)] placeholder: Option<String>,
    #[prop(into, optional)] disabled: MaybeProp<bool>,
    /// Offer a clear button; off for required fields
    #[prop(optional, default = true)]
    clearable: bool,
    /// Subset to offer instead of every value
    #[prop(optional)]
    choices: Option<Vec<E>>,
) -> impl IntoView {
    view! {
        <Combobox
            items={Signal::stored(choices.unwrap_or_else(E::choices))}
            value=value
            on_change=on_change
            fields={enum_fields::<E>()}
            placeholder={placeholder.unwrap_or_else(|| "Select...".to_string())}
            disabled=disabled
            clearable=clearable
        />
    }
}

impl EnumChoice for BillType {
    fn choices() -> Vec<Self> {
        BillType::all()
    }
    fn key(&self) -> &'static str {
        BillType::key(self)
    }
    fn label(&self) -> &'static str {
        BillType::label(self)
    }
}

impl EnumChoice for Role {
    fn choices() -> Vec<Self> {
        Role::all()
    }
    fn key(&self) -> &'static str {
        Role::key(self)
    }
    fn label(&self) -> &'static str {
        Role::label(self)
    }
}

impl EnumChoice for Gender {
    fn choices() -> Vec<Self> {
        vec![Gender::Male, Gender::Female]
    }
    fn key(&self) -> &'static str {
        Gender::key(self)
    }
    fn label(&self) -> &'static str {
        Gender::label(self)
    }
}

impl EnumChoice for AttendanceStatus {
    fn choices() -> Vec<Self> {
        vec![
            AttendanceStatus::Present,
            AttendanceStatus::Absent,
            AttendanceStatus::Late,
            AttendanceStatus::Excused,
        ]
    }
    fn key(&self) -> &'static str {
        AttendanceStatus::key(self)
    }
    fn label(&self) -> &'static str {
        AttendanceStatus::label(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::combobox::{candidates, find_by_value};

    #[test]
    fn test_bill_type_searches_labels_and_matches_keys() {
        let items = BillType::choices();
        let fields = enum_fields::<BillType>();
        // typing the label finds it
        let found = candidates(&items, &fields, "transport fee");
        assert_eq!(found.len(), 1);
        assert_eq!(items[found[0]], BillType::Transport);
        // the wire key identifies the selection, the label does not
        assert_eq!(find_by_value(&items, &fields, Some("exam")), Some(BillType::Exam));
        assert_eq!(find_by_value(&items, &fields, Some("Exam fee")), None);
    }

    #[test]
    fn test_role_choices_cover_all_roles() {
        assert_eq!(Role::choices().len(), Role::all().len());
        assert_eq!(enum_fields::<Role>().display(&Role::Admin), "Administrator");
    }
}
