mod columns;

pub use columns::columns;

use contracts::domain::a004_school_class::aggregate::SchoolClass;
use contracts::system::auth::Permission;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a004_school_class::api::{delete_class, fetch_classes};
use crate::domain::a004_school_class::ui::details::SchoolClassForm;
use crate::shared::data_table::{DataTable, TableMeta};
use crate::shared::icons::icon;
use crate::shared::list_resource::ListResource;
use crate::shared::modal_stack::use_modals;
use crate::shared::notify::use_notify;
use crate::shared::section::{confirm_delete, open_details, SectionFrame};
use crate::system::auth::CurrentActor;

#[component]
pub fn SchoolClassList(#[prop(into)] actor: Signal<CurrentActor>) -> impl IntoView {
    let modals = use_modals();
    let notify = use_notify();
    let classes = ListResource::new("classes", fetch_classes);
    let table_columns = Signal::derive(move || actor.with(columns));
    let can_manage = Signal::derive(move || actor.with(|a| a.can(Permission::ManageRecords)));

    let open_form = move |initial: Option<SchoolClass>| {
        let title = if initial.is_some() { "Edit class" } else { "New class" };
        modals.open(title, move |handle| {
            view! {
                <SchoolClassForm
                    initial=initial.clone()
                    on_saved=Callback::new(move |_| {
                        handle.close();
                        classes.reload();
                    })
                    on_cancel=Callback::new(move |_| handle.close())
                />
            }
            .into_any()
        });
    };
    let modify = Callback::new(move |class: SchoolClass| open_form(Some(class)));

    let meta = Signal::derive(move || {
        TableMeta::new()
            .on_edit(move |class: &SchoolClass| {
                open_details(
                    modals,
                    class.display_name(),
                    class.clone(),
                    table_columns.get_untracked(),
                    can_manage.get_untracked().then_some(modify),
                )
            })
            .on_delete(move |id| {
                confirm_delete(modals, notify, "class", id.to_string(), delete_class, move || {
                    classes.reload()
                })
            })
    });

    view! {
        <SectionFrame
            title="Classes"
            count=Signal::derive(move || classes.items.with(Vec::len))
            loading=classes.loading
            error=classes.error
            on_refresh=Callback::new(move |_| classes.reload())
            actions=move || {
                view! {
                    <Show when=move || can_manage.get()>
                        <Button appearance=ButtonAppearance::Primary on_click=move |_| open_form(None)>
                            {icon("plus")}
                            " New class"
                        </Button>
                    </Show>
                }
            }
        >
            <DataTable
                data=classes.data()
                columns=table_columns
                meta=meta
                search_placeholder="Search classes..."
            />
        </SectionFrame>
    }
}
