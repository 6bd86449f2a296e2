use contracts::domain::a001_student::aggregate::Student;
use leptos::prelude::*;

use crate::domain::a001_student::api::fetch_students;
use crate::shared::combobox::{find_by_value, Combobox, ComboboxFields};
use crate::shared::list_resource::ListResource;

/// Active students of one class; with no class, all active students
pub fn students_in_class(students: &[Student], class_id: Option<&str>) -> Vec<Student> {
    students
        .iter()
        .filter(|s| s.is_active)
        .filter(|s| class_id.map_or(true, |wanted| s.class_id() == Some(wanted)))
        .cloned()
        .collect()
}

pub fn student_fields() -> ComboboxFields<Student> {
    ComboboxFields::new(
        |s: &Student| format!("{} ({})", s.full_name(), s.admission_no),
        |s: &Student| s.id.clone(),
    )
}

/// Student picker, optionally restricted to a class. The parent decides
/// what happens to the selection when the class changes.
#[component]
pub fn StudentSelector(
    #[prop(into)] value: Signal<Option<String>>,
    on_change: Callback<Option<Student>>,
    #[prop(into, optional)] class_id: Signal<Option<String>>,
    #[prop(into, optional)] disabled: MaybeProp<bool>,
) -> impl IntoView {
    let students = ListResource::new("student selector", fetch_students);
    let items = Signal::derive(move || {
        students
            .items
            .with(|list| class_id.with(|class| students_in_class(list, class.as_deref())))
    });
    let fields = student_fields();
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
            placeholder="Select student"
            disabled=disabled
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::Ref;

    fn student(id: &str, class: Option<&str>, active: bool) -> Student {
        Student {
            id: id.into(),
            admission_no: format!("A-{}", id),
            first_name: id.into(),
            last_name: String::new(),
            gender: None,
            date_of_birth: None,
            school_class: class.map(|c| Ref::Unresolved(c.to_string())),
            guardian_name: None,
            guardian_phone: None,
            is_active: active,
        }
    }

    fn ids(list: Vec<Student>) -> Vec<String> {
        list.into_iter().map(|s| s.id).collect()
    }

    #[test]
    fn test_students_in_class() {
        let all = vec![
            student("s1", Some("c1"), true),
            student("s2", Some("c2"), true),
            student("s3", Some("c1"), false),
            student("s4", None, true),
        ];
        assert_eq!(ids(students_in_class(&all, Some("c1"))), vec!["s1"]);
        assert_eq!(ids(students_in_class(&all, None)), vec!["s1", "s2", "s4"]);
        assert!(students_in_class(&all, Some("c9")).is_empty());
    }

    #[test]
    fn test_selected_student_outside_class_is_not_found() {
        let all = vec![student("s1", Some("c1"), true), student("s2", Some("c2"), true)];
        let in_c1 = students_in_class(&all, Some("c1"));
        assert!(find_by_value(&in_c1, &student_fields(), Some("s2")).is_none());
    }
}
