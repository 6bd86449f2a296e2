use contracts::domain::a001_student::aggregate::{Student, StudentDto};
use contracts::domain::a004_school_class::aggregate::SchoolClass;
use contracts::enums::Gender;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a001_student::api::save_student;
use crate::domain::a004_school_class::ui::picker::ClassSelector;
use crate::shared::combobox::EnumSelector;
use crate::shared::date_utils::parse_input_date;
use crate::shared::form::{non_empty, submit_form, FormActions, FormError, FormField};
use crate::shared::notify::use_notify;

/// Student form with a class picker. `initial = None` admits a new student.
#[component]
pub fn StudentForm(
    initial: Option<Student>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let notify = use_notify();
    let dto = initial.as_ref().map(StudentDto::from).unwrap_or_default();
    let id = StoredValue::new(dto.id);
    let admission_no = RwSignal::new(dto.admission_no);
    let first_name = RwSignal::new(dto.first_name);
    let last_name = RwSignal::new(dto.last_name);
    let gender = RwSignal::new(dto.gender);
    let born = RwSignal::new(
        dto.date_of_birth
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default(),
    );
    let class_id = RwSignal::new(dto.class_id);
    let guardian_name = RwSignal::new(dto.guardian_name.unwrap_or_default());
    let guardian_phone = RwSignal::new(dto.guardian_phone.unwrap_or_default());
    let error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);

    let on_save = Callback::new(move |_| {
        let born_text = born.get_untracked();
        let date_of_birth = match born_text.trim() {
            "" => None,
            text => match parse_input_date(text) {
                Some(date) => Some(date),
                None => {
                    error.set(Some("Date of birth must look like 2014-09-01".to_string()));
                    return;
                }
            },
        };
        let dto = StudentDto {
            id: id.get_value(),
            admission_no: admission_no.get_untracked().trim().to_string(),
            first_name: first_name.get_untracked().trim().to_string(),
            last_name: last_name.get_untracked().trim().to_string(),
            gender: gender.get_untracked(),
            date_of_birth,
            class_id: class_id.get_untracked(),
            guardian_name: non_empty(&guardian_name.get_untracked()),
            guardian_phone: non_empty(&guardian_phone.get_untracked()),
        };
        if let Err(msg) = dto.validate() {
            error.set(Some(msg));
            return;
        }
        submit_form(saving, error, notify, "Student saved", save_student(dto), on_saved);
    });

    view! {
        <div class="form">
            <FormError error=error />
            <FormField label="Admission no.">
                <Input value=admission_no />
            </FormField>
            <FormField label="First name">
                <Input value=first_name />
            </FormField>
            <FormField label="Last name">
                <Input value=last_name />
            </FormField>
            <FormField label="Gender">
                <EnumSelector
                    value=gender
                    on_change=Callback::new(move |g: Option<Gender>| gender.set(g))
                    placeholder="Not specified"
                />
            </FormField>
            <FormField label="Date of birth">
                <input
                    type="date"
                    class="form-input"
                    prop:value=move || born.get()
                    on:input=move |ev| born.set(event_target_value(&ev))
                />
            </FormField>
            <FormField label="Class">
                <ClassSelector
                    value=class_id
                    on_change=Callback::new(move |class: Option<SchoolClass>| {
                        class_id.set(class.map(|c| c.id))
                    })
                />
            </FormField>
            <FormField label="Guardian">
                <Input value=guardian_name placeholder="Name" />
            </FormField>
            <FormField label="Guardian phone">
                <Input value=guardian_phone />
            </FormField>
            <FormActions saving=saving on_save=on_save on_cancel=on_cancel />
        </div>
    }
}
