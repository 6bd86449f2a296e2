mod columns;

pub use columns::columns;

use contracts::domain::a001_student::aggregate::Student;
use contracts::domain::a004_school_class::aggregate::SchoolClass;
use contracts::domain::a006_attendance::aggregate::{AttendanceRecord, AttendanceSummary};
use contracts::system::auth::Permission;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a001_student::ui::picker::StudentSelector;
use crate::domain::a004_school_class::ui::picker::ClassSelector;
use crate::domain::a006_attendance::api::{delete_attendance, fetch_attendance};
use crate::domain::a006_attendance::ui::details::MarkAttendanceForm;
use crate::shared::data_table::{DataTable, TableMeta};
use crate::shared::format::format_percent;
use crate::shared::icons::icon;
use crate::shared::list_resource::ListResource;
use crate::shared::modal_stack::use_modals;
use crate::shared::notify::use_notify;
use crate::shared::section::{confirm_delete, open_details, SectionFrame};
use crate::system::auth::CurrentActor;

/// Records of the chosen class and student; `None` means "any"
pub fn filter_records(
    records: &[AttendanceRecord],
    class_id: Option<&str>,
    student_id: Option<&str>,
) -> Vec<AttendanceRecord> {
    records
        .iter()
        .filter(|r| {
            class_id.map_or(true, |wanted| {
                r.school_class.as_ref().map(|c| c.id()) == Some(wanted)
            })
        })
        .filter(|r| student_id.map_or(true, |wanted| r.student.id() == wanted))
        .cloned()
        .collect()
}

#[component]
pub fn AttendanceList(#[prop(into)] actor: Signal<CurrentActor>) -> impl IntoView {
    let modals = use_modals();
    let notify = use_notify();
    let records = ListResource::new("attendance", fetch_attendance);
    let table_columns = Signal::derive(move || actor.with(columns));
    let can_mark = Signal::derive(move || actor.with(|a| a.can(Permission::MarkAttendance)));

    let class_id = RwSignal::new(None::<String>);
    let student_id = RwSignal::new(None::<String>);

    let on_class_change = Callback::new(move |class: Option<SchoolClass>| {
        let next = class.map(|c| c.id);
        if class_id.get_untracked() != next {
            // the chosen student may not belong to the new class
            student_id.set(None);
        }
        class_id.set(next);
    });

    let rows = Signal::derive(move || {
        records.items.with(|list| {
            filter_records(list, class_id.get().as_deref(), student_id.get().as_deref())
        })
    });

    let summary = Signal::derive(move || {
        student_id
            .get()
            .map(|_| rows.with(|list| AttendanceSummary::from_records(list.iter())))
    });

    let open_mark = move || {
        let class = class_id.get_untracked();
        let student = student_id.get_untracked();
        modals.open("Mark attendance", move |handle| {
            view! {
                <MarkAttendanceForm
                    class_id=class.clone()
                    student_id=student.clone()
                    on_saved=Callback::new(move |_| {
                        handle.close();
                        records.reload();
                    })
                    on_cancel=Callback::new(move |_| handle.close())
                />
            }
            .into_any()
        });
    };

    let meta = Signal::derive(move || {
        TableMeta::new()
            .on_edit(move |record: &AttendanceRecord| {
                let title = format!("{} on {}", record.student.label(), record.date.format("%d.%m.%Y"));
                open_details(modals, title, record.clone(), table_columns.get_untracked(), None)
            })
            .on_delete(move |id| {
                confirm_delete(modals, notify, "attendance mark", id.to_string(), delete_attendance, move || {
                    records.reload()
                })
            })
    });

    view! {
        <SectionFrame
            title="Attendance"
            count=Signal::derive(move || rows.with(Vec::len))
            loading=records.loading
            error=records.error
            on_refresh=Callback::new(move |_| records.reload())
            actions=move || {
                view! {
                    <Show when=move || can_mark.get()>
                        <Button appearance=ButtonAppearance::Primary on_click=move |_| open_mark()>
                            {icon("check")}
                            " Mark attendance"
                        </Button>
                    </Show>
                }
            }
        >
            <div class="section-filters">
                <label class="section-filters__label">"Class"</label>
                <ClassSelector value=class_id on_change=on_class_change placeholder="All classes" />
                <label class="section-filters__label">"Student"</label>
                <StudentSelector
                    value=student_id
                    class_id=class_id
                    on_change=Callback::new(move |student: Option<Student>| {
                        student_id.set(student.map(|s| s.id))
                    })
                />
            </div>

            {move || {
                summary
                    .get()
                    .map(|s| {
                        view! {
                            <div class="attendance-summary">
                                <span class="badge badge--success">{format!("Present {}", s.present)}</span>
                                <span class="badge badge--warning">{format!("Late {}", s.late)}</span>
                                <span class="badge badge--danger">{format!("Absent {}", s.absent)}</span>
                                <span class="badge badge--neutral">{format!("Excused {}", s.excused)}</span>
                                <strong class="attendance-summary__rate">
                                    {format!(
                                        "Attendance {} ({} of {} days)",
                                        format_percent(s.percentage()),
                                        s.attended(),
                                        s.total(),
                                    )}
                                </strong>
                            </div>
                        }
                    })
            }}

            <DataTable data=rows columns=table_columns meta=meta />
        </SectionFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use contracts::enums::AttendanceStatus;
    use contracts::shared::Ref;

    fn record(id: &str, student: &str, class: Option<&str>) -> AttendanceRecord {
        AttendanceRecord {
            id: id.into(),
            student: Ref::Unresolved(student.into()),
            school_class: class.map(|c| Ref::Unresolved(c.to_string())),
            date: NaiveDate::from_ymd_opt(2024, 9, 2).unwrap(),
            status: AttendanceStatus::Present,
            remark: None,
        }
    }

    fn ids(list: Vec<AttendanceRecord>) -> Vec<String> {
        list.into_iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_filter_by_class_and_student() {
        let all = vec![
            record("a1", "s1", Some("c1")),
            record("a2", "s2", Some("c1")),
            record("a3", "s1", Some("c2")),
            record("a4", "s3", None),
        ];
        assert_eq!(ids(filter_records(&all, None, None)), vec!["a1", "a2", "a3", "a4"]);
        assert_eq!(ids(filter_records(&all, Some("c1"), None)), vec!["a1", "a2"]);
        assert_eq!(ids(filter_records(&all, None, Some("s1"))), vec!["a1", "a3"]);
        assert_eq!(ids(filter_records(&all, Some("c1"), Some("s1"))), vec!["a1"]);
    }
}
