use contracts::domain::a001_student::aggregate::Student;
use contracts::domain::a004_school_class::aggregate::SchoolClass;
use contracts::domain::a006_attendance::aggregate::MarkAttendanceDto;
use contracts::enums::AttendanceStatus;
use leptos::prelude::*;

use crate::domain::a001_student::ui::picker::StudentSelector;
use crate::domain::a004_school_class::ui::picker::ClassSelector;
use crate::domain::a006_attendance::api::mark_attendance;
use crate::shared::combobox::EnumSelector;
use crate::shared::date_utils::{parse_input_date, today};
use crate::shared::form::{non_empty, submit_form, FormActions, FormError, FormField};
use crate::shared::notify::use_notify;

/// One attendance mark. Starts from the class/student chosen in the list.
#[component]
pub fn MarkAttendanceForm(
    class_id: Option<String>,
    student_id: Option<String>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let notify = use_notify();
    let class_id = RwSignal::new(class_id);
    let student_id = RwSignal::new(student_id);
    let date = RwSignal::new(today().format("%Y-%m-%d").to_string());
    let status = RwSignal::new(Some(AttendanceStatus::Present));
    let remark = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);

    let on_class_change = Callback::new(move |class: Option<SchoolClass>| {
        let next = class.map(|c| c.id);
        if class_id.get_untracked() != next {
            student_id.set(None);
        }
        class_id.set(next);
    });

    let on_save = Callback::new(move |_| {
        let Some(student) = student_id.get_untracked() else {
            error.set(Some("Choose a student".to_string()));
            return;
        };
        let Some(day) = parse_input_date(&date.get_untracked()) else {
            error.set(Some("Choose a date".to_string()));
            return;
        };
        let Some(mark) = status.get_untracked() else {
            error.set(Some("Choose a status".to_string()));
            return;
        };
        let dto = MarkAttendanceDto {
            student_id: student,
            class_id: class_id.get_untracked(),
            date: day,
            status: mark,
            remark: non_empty(&remark.get_untracked()),
        };
        submit_form(saving, error, notify, "Attendance saved", mark_attendance(dto), on_saved);
    });

    view! {
        <div class="form">
            <FormError error=error />
            <FormField label="Class">
                <ClassSelector value=class_id on_change=on_class_change placeholder="Any class" />
            </FormField>
            <FormField label="Student">
                <StudentSelector
                    value=student_id
                    class_id=class_id
                    on_change=Callback::new(move |student: Option<Student>| {
                        student_id.set(student.map(|s| s.id))
                    })
                />
            </FormField>
            <FormField label="Date">
                <input
                    type="date"
                    class="form-input"
                    prop:value=move || date.get()
                    on:input=move |ev| date.set(event_target_value(&ev))
                />
            </FormField>
            <FormField label="Status">
                <EnumSelector
                    value=status
                    on_change=Callback::new(move |s: Option<AttendanceStatus>| status.set(s))
                    clearable=false
                />
            </FormField>
            <FormField label="Remark">
                <input
                    type="text"
                    class="form-input"
                    prop:value=move || remark.get()
                    on:input=move |ev| remark.set(event_target_value(&ev))
                />
            </FormField>
            <FormActions saving=saving on_save=on_save on_cancel=on_cancel />
        </div>
    }
}
