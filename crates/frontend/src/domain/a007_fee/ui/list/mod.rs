mod columns;

pub use columns::columns;

use contracts::domain::a007_fee::aggregate::{Fee, FeeTotals};
use contracts::enums::BillType;
use leptos::prelude::*;

use crate::domain::a007_fee::api::{approve_fee, cancel_fee, delete_fee, fetch_fees};
use crate::domain::a007_fee::ui::details::PayFeeForm;
use crate::shared::combobox::EnumSelector;
use crate::shared::data_table::{DataTable, TableMeta};
use crate::shared::format::format_money;
use crate::shared::list_resource::ListResource;
use crate::shared::modal_stack::use_modals;
use crate::shared::notify::use_notify;
use crate::shared::section::{confirm_delete, open_details, run_mutation, SectionFrame};
use crate::system::auth::CurrentActor;
use self::columns::{APPROVE, CANCEL, PAY};

#[component]
pub fn FeeList(#[prop(into)] actor: Signal<CurrentActor>) -> impl IntoView {
    let modals = use_modals();
    let notify = use_notify();
    let fees = ListResource::new("fees", fetch_fees);
    let table_columns = Signal::derive(move || actor.with(columns));

    let bill_filter = RwSignal::new(None::<BillType>);
    let rows = Signal::derive(move || {
        fees.items.with(|list| match bill_filter.get() {
            Some(bill) => list.iter().filter(|f| f.bill_type == bill).cloned().collect(),
            None => list.clone(),
        })
    });
    let totals = Signal::derive(move || rows.with(|list| FeeTotals::from_fees(list.iter())));

    let open_payment = move |fee: Fee| {
        modals.open("Record payment", move |handle| {
            view! {
                <PayFeeForm
                    fee=fee.clone()
                    on_saved=Callback::new(move |_| {
                        handle.close();
                        fees.reload();
                    })
                    on_cancel=Callback::new(move |_| handle.close())
                />
            }
            .into_any()
        });
    };

    let meta = Signal::derive(move || {
        TableMeta::new()
            .on_edit(move |fee: &Fee| {
                let title = format!("{} for {}", fee.bill_type.label(), fee.student.label());
                open_details(modals, title, fee.clone(), table_columns.get_untracked(), None)
            })
            .on_delete(move |id| {
                confirm_delete(modals, notify, "fee", id.to_string(), delete_fee, move || {
                    fees.reload()
                })
            })
            .with(APPROVE, move |_, id| {
                let request = approve_fee(id.to_string());
                run_mutation(notify, "Fee approved", async move { request.await.map(|_| ()) }, move || {
                    fees.reload()
                });
            })
            .with(PAY, move |fee, _| open_payment(fee.clone()))
            .with(CANCEL, move |_, id| {
                let id = id.to_string();
                modals.confirm("Cancel fee", "Cancel this fee? Nothing will be due on it.", move || {
                    let request = cancel_fee(id.clone());
                    run_mutation(notify, "Fee cancelled", async move { request.await.map(|_| ()) }, move || {
                        fees.reload()
                    });
                });
            })
    });

    view! {
        <SectionFrame
            title="Fees"
            count=Signal::derive(move || rows.with(Vec::len))
            loading=fees.loading
            error=fees.error
            on_refresh=Callback::new(move |_| fees.reload())
        >
            <div class="section-filters">
                <label class="section-filters__label">"Bill type"</label>
                <EnumSelector
                    value=bill_filter
                    on_change=Callback::new(move |bill: Option<BillType>| bill_filter.set(bill))
                    placeholder="All bills"
                />
            </div>

            <DataTable data=rows columns=table_columns meta=meta search_placeholder="Search fees..." />

            <div class="totals-row">
                <span class="totals-row__item">
                    "Net: " <strong>{move || format_money(totals.get().net)}</strong>
                </span>
                <span class="totals-row__item">
                    "Paid: " <strong>{move || format_money(totals.get().paid)}</strong>
                </span>
                <span class="totals-row__item totals-row__item--due">
                    "Due: " <strong>{move || format_money(totals.get().due)}</strong>
                </span>
            </div>
        </SectionFrame>
    }
}
