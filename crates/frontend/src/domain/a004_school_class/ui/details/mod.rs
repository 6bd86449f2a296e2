use contracts::domain::a002_teacher::aggregate::Teacher;
use contracts::domain::a004_school_class::aggregate::{SchoolClass, SchoolClassDto};
use leptos::prelude::*;
use thaw::*;

use crate::domain::a002_teacher::ui::picker::TeacherSelector;
use crate::domain::a004_school_class::api::save_class;
use crate::shared::form::{non_empty, parse_count, submit_form, FormActions, FormError, FormField};
use crate::shared::notify::use_notify;

/// Create/edit form for a class. `initial = None` creates a new class.
#[component]
pub fn SchoolClassForm(
    initial: Option<SchoolClass>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let notify = use_notify();
    let dto = initial.as_ref().map(SchoolClassDto::from).unwrap_or_default();
    let id = StoredValue::new(dto.id);
    let name = RwSignal::new(dto.name);
    let section = RwSignal::new(dto.section.unwrap_or_default());
    let teacher_id = RwSignal::new(dto.class_teacher_id);
    let capacity = RwSignal::new(dto.capacity.map(|c| c.to_string()).unwrap_or_default());
    let error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);

    let on_save = Callback::new(move |_| {
        let capacity = match parse_count(&capacity.get_untracked(), "Capacity") {
            Ok(value) => value,
            Err(msg) => {
                error.set(Some(msg));
                return;
            }
        };
        let dto = SchoolClassDto {
            id: id.get_value(),
            name: name.get_untracked().trim().to_string(),
            section: non_empty(&section.get_untracked()),
            class_teacher_id: teacher_id.get_untracked(),
            capacity,
        };
        if let Err(msg) = dto.validate() {
            error.set(Some(msg));
            return;
        }
        submit_form(saving, error, notify, "Class saved", save_class(dto), on_saved);
    });

    view! {
        <div class="form">
            <FormError error=error />
            <FormField label="Name">
                <Input value=name placeholder="e.g. Grade 5" />
            </FormField>
            <FormField label="Section">
                <Input value=section placeholder="e.g. A" />
            </FormField>
            <FormField label="Class teacher">
                <TeacherSelector
                    value=teacher_id
                    on_change=Callback::new(move |teacher: Option<Teacher>| {
                        teacher_id.set(teacher.map(|t| t.id))
                    })
                />
            </FormField>
            <FormField label="Capacity">
                <Input value=capacity placeholder="Seats" />
            </FormField>
            <FormActions saving=saving on_save=on_save on_cancel=on_cancel />
        </div>
    }
}
