mod columns;

pub use columns::columns;

use contracts::domain::a003_staff::aggregate::Staff;
use leptos::prelude::*;

use crate::domain::a003_staff::api::{delete_staff, fetch_staff};
use crate::shared::data_table::{DataTable, TableMeta};
use crate::shared::list_resource::ListResource;
use crate::shared::modal_stack::use_modals;
use crate::shared::notify::use_notify;
use crate::shared::section::{confirm_delete, open_details, SectionFrame};
use crate::system::auth::CurrentActor;

#[component]
pub fn StaffList(#[prop(into)] actor: Signal<CurrentActor>) -> impl IntoView {
    let modals = use_modals();
    let notify = use_notify();
    let staff = ListResource::new("staff", fetch_staff);
    let table_columns = Signal::derive(move || actor.with(columns));

    let meta = Signal::derive(move || {
        TableMeta::new()
            .on_edit(move |member: &Staff| {
                open_details(modals, member.full_name(), member.clone(), table_columns.get_untracked(), None)
            })
            .on_delete(move |id| {
                confirm_delete(modals, notify, "staff member", id.to_string(), delete_staff, move || {
                    staff.reload()
                })
            })
    });

    view! {
        <SectionFrame
            title="Staff"
            count=Signal::derive(move || staff.items.with(Vec::len))
            loading=staff.loading
            error=staff.error
            on_refresh=Callback::new(move |_| staff.reload())
        >
            <DataTable data=staff.data() columns=table_columns meta=meta />
        </SectionFrame>
    }
}
