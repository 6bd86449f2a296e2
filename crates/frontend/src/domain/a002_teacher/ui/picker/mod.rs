use contracts::domain::a002_teacher::aggregate::Teacher;
use leptos::prelude::*;

use crate::domain::a002_teacher::api::fetch_teachers;
use crate::shared::combobox::{find_by_value, Combobox, ComboboxFields};
use crate::shared::list_resource::ListResource;

#[component]
pub fn TeacherSelector(
    /// Id of the selected teacher
    #[prop(into)]
    value: Signal<Option<String>>,
    on_change: Callback<Option<Teacher>>,
    #[prop(into, optional)] disabled: MaybeProp<bool>,
) -> impl IntoView {
    let teachers = ListResource::new("teacher selector", fetch_teachers);
    // inactive teachers cannot be assigned
    let items = Signal::derive(move || {
        teachers
            .items
            .with(|list| list.iter().filter(|t| t.is_active).cloned().collect::<Vec<_>>())
    });
    let fields = ComboboxFields::new(Teacher::full_name, |t: &Teacher| t.id.clone());
    let selected = Signal::derive({
        let fields = fields.clone();
        move || teachers.items.with(|list| value.with(|id| find_by_value(list, &fields, id.as_deref())))
    });

    view! {
        <Combobox
            items=items
            value=selected
            on_change=on_change
            fields=fields
            placeholder="Select teacher"
            disabled=disabled
        />
    }
}
