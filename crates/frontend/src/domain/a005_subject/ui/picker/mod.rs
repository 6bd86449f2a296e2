use contracts::domain::a005_subject::aggregate::Subject;
use leptos::prelude::*;

use crate::domain::a005_subject::api::fetch_subjects;
use crate::shared::combobox::{find_by_value, Combobox, ComboboxFields};
use crate::shared::list_resource::ListResource;

/// Subjects taught in the class, plus the ones not bound to any class
pub fn subjects_for_class(subjects: &[Subject], class_id: Option<&str>) -> Vec<Subject> {
    subjects
        .iter()
        .filter(|s| match (class_id, s.school_class.as_ref()) {
            (Some(wanted), Some(class)) => class.id() == wanted,
            _ => true,
        })
        .cloned()
        .collect()
}

#[component]
pub fn SubjectSelector(
    #[prop(into)] value: Signal<Option<String>>,
    on_change: Callback<Option<Subject>>,
    /// Restricts the list to one class
    #[prop(into, optional)]
    class_id: Signal<Option<String>>,
    #[prop(into, optional)] disabled: MaybeProp<bool>,
) -> impl IntoView {
    let subjects = ListResource::new("subject selector", fetch_subjects);
    let items = Signal::derive(move || {
        subjects
            .items
            .with(|list| class_id.with(|class| subjects_for_class(list, class.as_deref())))
    });
    let fields = ComboboxFields::new(
        |s: &Subject| format!("{} ({})", s.name, s.code),
        |s: &Subject| s.id.clone(),
    );
    let selected = Signal::derive({
        let fields = fields.clone();
        move || items.with(|list| value.with(|id| find_by_value(list, &fields, id.as_deref())))
    });

    view! {
        <Combobox
            items=items
            value=selected
            on_change=on_change
            fields=fields
            placeholder="Select subject"
            disabled=disabled
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::Ref;

    fn subject(id: &str, class: Option<&str>) -> Subject {
        Subject {
            id: id.into(),
            code: id.to_uppercase(),
            name: id.into(),
            school_class: class.map(|c| Ref::Unresolved(c.to_string())),
            is_elective: false,
        }
    }

    #[test]
    fn test_subjects_for_class_keeps_unbound_subjects() {
        let all = vec![subject("a", Some("c1")), subject("b", Some("c2")), subject("c", None)];
        let ids = |list: Vec<Subject>| list.into_iter().map(|s| s.id).collect::<Vec<_>>();
        assert_eq!(ids(subjects_for_class(&all, Some("c1"))), vec!["a", "c"]);
        assert_eq!(ids(subjects_for_class(&all, None)), vec!["a", "b", "c"]);
    }
}
