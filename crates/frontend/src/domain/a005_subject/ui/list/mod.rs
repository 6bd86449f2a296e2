mod columns;

pub use columns::columns;

use contracts::domain::a005_subject::aggregate::Subject;
use contracts::system::auth::Permission;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a005_subject::api::{delete_subject, fetch_subjects};
use crate::domain::a005_subject::ui::details::SubjectForm;
use crate::shared::data_table::{DataTable, TableMeta};
use crate::shared::icons::icon;
use crate::shared::list_resource::ListResource;
use crate::shared::modal_stack::use_modals;
use crate::shared::notify::use_notify;
use crate::shared::section::{confirm_delete, open_details, SectionFrame};
use crate::system::auth::CurrentActor;

#[component]
pub fn SubjectList(#[prop(into)] actor: Signal<CurrentActor>) -> impl IntoView {
    let modals = use_modals();
    let notify = use_notify();
    let subjects = ListResource::new("subjects", fetch_subjects);
    let table_columns = Signal::derive(move || actor.with(columns));
    let can_manage = Signal::derive(move || actor.with(|a| a.can(Permission::ManageRecords)));

    let open_form = move |initial: Option<Subject>| {
        let title = if initial.is_some() { "Edit subject" } else { "New subject" };
        modals.open(title, move |handle| {
            view! {
                <SubjectForm
                    initial=initial.clone()
                    on_saved=Callback::new(move |_| {
                        handle.close();
                        subjects.reload();
                    })
                    on_cancel=Callback::new(move |_| handle.close())
                />
            }
            .into_any()
        });
    };
    let modify = Callback::new(move |subject: Subject| open_form(Some(subject)));

    let meta = Signal::derive(move || {
        TableMeta::new()
            .on_edit(move |subject: &Subject| {
                open_details(
                    modals,
                    subject.name.clone(),
                    subject.clone(),
                    table_columns.get_untracked(),
                    can_manage.get_untracked().then_some(modify),
                )
            })
            .on_delete(move |id| {
                confirm_delete(modals, notify, "subject", id.to_string(), delete_subject, move || {
                    subjects.reload()
                })
            })
    });

    view! {
        <SectionFrame
            title="Subjects"
            count=Signal::derive(move || subjects.items.with(Vec::len))
            loading=subjects.loading
            error=subjects.error
            on_refresh=Callback::new(move |_| subjects.reload())
            actions=move || {
                view! {
                    <Show when=move || can_manage.get()>
                        <Button appearance=ButtonAppearance::Primary on_click=move |_| open_form(None)>
                            {icon("plus")}
                            " New subject"
                        </Button>
                    </Show>
                }
            }
        >
            <DataTable data=subjects.data() columns=table_columns meta=meta />
        </SectionFrame>
    }
}
