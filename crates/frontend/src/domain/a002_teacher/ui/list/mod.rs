mod columns;

pub use columns::columns;

use contracts::domain::a002_teacher::aggregate::Teacher;
use contracts::domain::a005_subject::aggregate::Subject;
use leptos::prelude::*;

use crate::domain::a002_teacher::api::{delete_teacher, fetch_teachers};
use crate::domain::a005_subject::ui::picker::SubjectSelector;
use crate::shared::data_table::{DataTable, TableMeta};
use crate::shared::list_resource::ListResource;
use crate::shared::modal_stack::use_modals;
use crate::shared::notify::use_notify;
use crate::shared::section::{confirm_delete, open_details, SectionFrame};
use crate::system::auth::CurrentActor;

#[component]
pub fn TeacherList(#[prop(into)] actor: Signal<CurrentActor>) -> impl IntoView {
    let modals = use_modals();
    let notify = use_notify();
    let teachers = ListResource::new("teachers", fetch_teachers);
    let table_columns = Signal::derive(move || actor.with(columns));

    let subject_filter = RwSignal::new(None::<String>);
    let rows = Signal::derive(move || {
        teachers.items.with(|list| match subject_filter.get() {
            Some(subject_id) => list
                .iter()
                .filter(|t| t.subjects.iter().any(|s| s.id() == subject_id))
                .cloned()
                .collect(),
            None => list.clone(),
        })
    });

    let meta = Signal::derive(move || {
        TableMeta::new()
            .on_edit(move |teacher: &Teacher| {
                open_details(modals, teacher.full_name(), teacher.clone(), table_columns.get_untracked(), None)
            })
            .on_delete(move |id| {
                confirm_delete(modals, notify, "teacher", id.to_string(), delete_teacher, move || {
                    teachers.reload()
                })
            })
    });

    view! {
        <SectionFrame
            title="Teachers"
            count=Signal::derive(move || rows.with(Vec::len))
            loading=teachers.loading
            error=teachers.error
            on_refresh=Callback::new(move |_| teachers.reload())
        >
            <div class="section-filters">
                <label class="section-filters__label">"Teaches"</label>
                <SubjectSelector
                    value=subject_filter
                    on_change=Callback::new(move |subject: Option<Subject>| {
                        subject_filter.set(subject.map(|s| s.id))
                    })
                />
            </div>
            <DataTable data=rows columns=table_columns meta=meta />
        </SectionFrame>
    }
}
