mod columns;

pub use columns::{assignable_roles, columns};

use contracts::system::auth::Permission;
use contracts::system::users::User;
use leptos::prelude::*;
use thaw::*;

use crate::shared::data_table::{DataTable, TableMeta};
use crate::shared::icons::icon;
use crate::shared::list_resource::ListResource;
use crate::shared::modal_stack::use_modals;
use crate::shared::notify::use_notify;
use crate::shared::section::{confirm_delete, open_details, SectionFrame};
use crate::system::auth::CurrentActor;
use crate::system::users::api::{delete_user, fetch_users};
use crate::system::users::ui::details::UserForm;

#[component]
pub fn UserList(#[prop(into)] actor: Signal<CurrentActor>) -> impl IntoView {
    let modals = use_modals();
    let notify = use_notify();
    let users = ListResource::new("users", fetch_users);
    let table_columns = Signal::derive(move || actor.with(columns));
    let can_manage = Signal::derive(move || actor.with(|a| a.can(Permission::ManageUsers)));

    let open_form = move |initial: Option<User>| {
        let title = if initial.is_some() { "Edit user" } else { "New user" };
        let current = actor.get_untracked();
        modals.open(title, move |handle| {
            view! {
                <UserForm
                    initial=initial.clone()
                    roles=assignable_roles(&current)
                    tenant_id=current.tenant_id.clone()
                    on_saved=Callback::new(move |_| {
                        handle.close();
                        users.reload();
                    })
                    on_cancel=Callback::new(move |_| handle.close())
                />
            }
            .into_any()
        });
    };
    let modify = Callback::new(move |user: User| open_form(Some(user)));

    let meta = Signal::derive(move || {
        TableMeta::new()
            .on_edit(move |user: &User| {
                open_details(
                    modals,
                    user.username.clone(),
                    user.clone(),
                    table_columns.get_untracked(),
                    can_manage.get_untracked().then_some(modify),
                )
            })
            .on_delete(move |id| {
                confirm_delete(modals, notify, "user", id.to_string(), delete_user, move || {
                    users.reload()
                })
            })
    });

    view! {
        <SectionFrame
            title="Users"
            count=Signal::derive(move || users.items.with(Vec::len))
            loading=users.loading
            error=users.error
            on_refresh=Callback::new(move |_| users.reload())
            actions=move || {
                view! {
                    <Show when=move || can_manage.get()>
                        <Button appearance=ButtonAppearance::Primary on_click=move |_| open_form(None)>
                            {icon("plus")}
                            " New user"
                        </Button>
                    </Show>
                }
            }
        >
            <DataTable data=users.data() columns=table_columns meta=meta />
        </SectionFrame>
    }
}
