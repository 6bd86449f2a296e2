use contracts::domain::a004_school_class::aggregate::SchoolClass;
use contracts::domain::a005_subject::aggregate::{Subject, SubjectDto};
use leptos::prelude::*;
use thaw::*;

use crate::domain::a004_school_class::ui::picker::ClassSelector;
use crate::domain::a005_subject::api::save_subject;
use crate::shared::form::{submit_form, FormActions, FormError, FormField};
use crate::shared::notify::use_notify;

#[component]
pub fn SubjectForm(
    initial: Option<Subject>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let notify = use_notify();
    let dto = initial.as_ref().map(SubjectDto::from).unwrap_or_default();
    let id = StoredValue::new(dto.id);
    let code = RwSignal::new(dto.code);
    let name = RwSignal::new(dto.name);
    let class_id = RwSignal::new(dto.class_id);
    let elective = RwSignal::new(dto.is_elective);
    let error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);

    let on_save = Callback::new(move |_| {
        let dto = SubjectDto {
            id: id.get_value(),
            code: code.get_untracked().trim().to_uppercase(),
            name: name.get_untracked().trim().to_string(),
            class_id: class_id.get_untracked(),
            is_elective: elective.get_untracked(),
        };
        if let Err(msg) = dto.validate() {
            error.set(Some(msg));
            return;
        }
        submit_form(saving, error, notify, "Subject saved", save_subject(dto), on_saved);
    });

    view! {
        <div class="form">
            <FormError error=error />
            <FormField label="Code">
                <Input value=code placeholder="e.g. MTH" />
            </FormField>
            <FormField label="Name">
                <Input value=name placeholder="e.g. Mathematics" />
            </FormField>
            <FormField label="Class">
                <ClassSelector
                    value=class_id
                    on_change=Callback::new(move |class: Option<SchoolClass>| {
                        class_id.set(class.map(|c| c.id))
                    })
                    placeholder="All classes"
                />
            </FormField>
            <label class="form-check">
                <input
                    type="checkbox"
                    prop:checked=move || elective.get()
                    on:change=move |ev| elective.set(event_target_checked(&ev))
                />
                " Elective"
            </label>
            <FormActions saving=saving on_save=on_save on_cancel=on_cancel />
        </div>
    }
}
