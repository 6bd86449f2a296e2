mod columns;

pub use columns::columns;

use contracts::domain::a009_tenant::aggregate::Tenant;
use leptos::prelude::*;

use crate::domain::a009_tenant::api::{delete_tenant, fetch_tenants, set_tenant_active};
use crate::shared::data_table::{DataTable, TableMeta};
use crate::shared::list_resource::ListResource;
use crate::shared::modal_stack::use_modals;
use crate::shared::notify::use_notify;
use crate::shared::section::{confirm_delete, open_details, run_mutation, SectionFrame};
use crate::system::auth::CurrentActor;
use self::columns::{ACTIVATE, DEACTIVATE};

#[component]
pub fn TenantList(#[prop(into)] actor: Signal<CurrentActor>) -> impl IntoView {
    let modals = use_modals();
    let notify = use_notify();
    let tenants = ListResource::new("tenants", fetch_tenants);
    let table_columns = Signal::derive(move || actor.with(columns));

    let switch = move |id: &str, active: bool| {
        let request = set_tenant_active(id.to_string(), active);
        let done = if active { "School activated" } else { "School suspended" };
        run_mutation(notify, done, async move { request.await.map(|_| ()) }, move || {
            tenants.reload()
        });
    };

    let meta = Signal::derive(move || {
        TableMeta::new()
            .on_edit(move |tenant: &Tenant| {
                open_details(modals, tenant.name.clone(), tenant.clone(), table_columns.get_untracked(), None)
            })
            .on_delete(move |id| {
                confirm_delete(modals, notify, "school", id.to_string(), delete_tenant, move || {
                    tenants.reload()
                })
            })
            .with(ACTIVATE, move |_, id| switch(id, true))
            .with(DEACTIVATE, move |_, id| switch(id, false))
    });

    view! {
        <SectionFrame
            title="Schools"
            count=Signal::derive(move || tenants.items.with(Vec::len))
            loading=tenants.loading
            error=tenants.error
            on_refresh=Callback::new(move |_| tenants.reload())
        >
            <DataTable data=tenants.data() columns=table_columns meta=meta />
        </SectionFrame>
    }
}
