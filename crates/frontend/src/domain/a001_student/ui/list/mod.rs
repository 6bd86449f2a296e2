mod columns;

pub use columns::columns;

use contracts::domain::a001_student::aggregate::Student;
use contracts::domain::a004_school_class::aggregate::SchoolClass;
use contracts::system::auth::Permission;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a001_student::api::{delete_student, fetch_students};
use crate::domain::a001_student::ui::details::StudentForm;
use crate::domain::a004_school_class::ui::picker::ClassSelector;
use crate::shared::data_table::{DataTable, TableMeta};
use crate::shared::icons::icon;
use crate::shared::list_resource::ListResource;
use crate::shared::modal_stack::use_modals;
use crate::shared::notify::use_notify;
use crate::shared::section::{confirm_delete, open_details, SectionFrame};
use crate::system::auth::CurrentActor;

#[component]
pub fn StudentList(#[prop(into)] actor: Signal<CurrentActor>) -> impl IntoView {
    let modals = use_modals();
    let notify = use_notify();
    let students = ListResource::new("students", fetch_students);
    let table_columns = Signal::derive(move || actor.with(columns));
    let can_manage = Signal::derive(move || actor.with(|a| a.can(Permission::ManageRecords)));

    // Unlike the selector, the list keeps students who have left
    let class_filter = RwSignal::new(None::<String>);
    let rows = Signal::derive(move || {
        students.items.with(|list| match class_filter.get() {
            Some(class_id) => list
                .iter()
                .filter(|s| s.class_id() == Some(class_id.as_str()))
                .cloned()
                .collect(),
            None => list.clone(),
        })
    });

    let open_form = move |initial: Option<Student>| {
        let title = if initial.is_some() { "Edit student" } else { "Admit student" };
        modals.open_wide(title, move |handle| {
            view! {
                <StudentForm
                    initial=initial.clone()
                    on_saved=Callback::new(move |_| {
                        handle.close();
                        students.reload();
                    })
                    on_cancel=Callback::new(move |_| handle.close())
                />
            }
            .into_any()
        });
    };
    let modify = Callback::new(move |student: Student| open_form(Some(student)));

    let meta = Signal::derive(move || {
        TableMeta::new()
            .on_edit(move |student: &Student| {
                open_details(
                    modals,
                    student.full_name(),
                    student.clone(),
                    table_columns.get_untracked(),
                    can_manage.get_untracked().then_some(modify),
                )
            })
            .on_delete(move |id| {
                confirm_delete(modals, notify, "student", id.to_string(), delete_student, move || {
                    students.reload()
                })
            })
    });

    view! {
        <SectionFrame
            title="Students"
            count=Signal::derive(move || rows.with(Vec::len))
            loading=students.loading
            error=students.error
            on_refresh=Callback::new(move |_| students.reload())
            actions=move || {
                view! {
                    <Show when=move || can_manage.get()>
                        <Button appearance=ButtonAppearance::Primary on_click=move |_| open_form(None)>
                            {icon("plus")}
                            " Admit student"
                        </Button>
                    </Show>
                }
            }
        >
            <div class="section-filters">
                <label class="section-filters__label">"Class"</label>
                <ClassSelector
                    value=class_filter
                    on_change=Callback::new(move |class: Option<SchoolClass>| {
                        class_filter.set(class.map(|c| c.id))
                    })
                    placeholder="All classes"
                />
            </div>
            <DataTable data=rows columns=table_columns meta=meta search_placeholder="Search students..." />
        </SectionFrame>
    }
}
