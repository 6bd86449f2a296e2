mod columns;

pub use columns::columns;

use contracts::domain::a002_teacher::aggregate::Teacher;
use contracts::domain::a003_staff::aggregate::Staff;
use contracts::domain::a008_salary::aggregate::Salary;
use leptos::prelude::*;

use crate::domain::a002_teacher::ui::picker::TeacherSelector;
use crate::domain::a003_staff::ui::picker::StaffSelector;
use crate::domain::a008_salary::api::{delete_salary, fetch_salaries, pay_salary};
use crate::shared::data_table::{DataTable, TableMeta};
use crate::shared::format::format_money;
use crate::shared::list_resource::ListResource;
use crate::shared::modal_stack::use_modals;
use crate::shared::notify::use_notify;
use crate::shared::section::{confirm_delete, open_details, run_mutation, SectionFrame};
use crate::system::auth::CurrentActor;
use self::columns::PAY;

#[component]
pub fn SalaryList(#[prop(into)] actor: Signal<CurrentActor>) -> impl IntoView {
    let modals = use_modals();
    let notify = use_notify();
    let salaries = ListResource::new("salaries", fetch_salaries);
    let table_columns = Signal::derive(move || actor.with(columns));

    // One employee at a time: picking a teacher clears the staff pick and back
    let teacher_id = RwSignal::new(None::<String>);
    let staff_id = RwSignal::new(None::<String>);
    let rows = Signal::derive(move || {
        let employee = teacher_id.get().or_else(|| staff_id.get());
        salaries.items.with(|list| match employee {
            Some(id) => list.iter().filter(|s| s.employee_id == id).cloned().collect(),
            None => list.clone(),
        })
    });

    let meta = Signal::derive(move || {
        TableMeta::new()
            .on_edit(move |salary: &Salary| {
                let title = format!("{}, {}", salary.employee_name, salary.month);
                open_details(modals, title, salary.clone(), table_columns.get_untracked(), None)
            })
            .on_delete(move |id| {
                confirm_delete(modals, notify, "salary entry", id.to_string(), delete_salary, move || {
                    salaries.reload()
                })
            })
            .with(PAY, move |salary, id| {
                let id = id.to_string();
                let message = format!(
                    "Pay {} to {} for {}?",
                    format_money(salary.net_amount()),
                    salary.employee_name,
                    salary.month
                );
                modals.confirm("Pay salary", message, move || {
                    let request = pay_salary(id.clone());
                    run_mutation(notify, "Salary paid", async move { request.await.map(|_| ()) }, move || {
                        salaries.reload()
                    });
                });
            })
    });

    view! {
        <SectionFrame
            title="Salaries"
            count=Signal::derive(move || rows.with(Vec::len))
            loading=salaries.loading
            error=salaries.error
            on_refresh=Callback::new(move |_| salaries.reload())
        >
            <div class="section-filters">
                <label class="section-filters__label">"Teacher"</label>
                <TeacherSelector
                    value=teacher_id
                    on_change=Callback::new(move |teacher: Option<Teacher>| {
                        staff_id.set(None);
                        teacher_id.set(teacher.map(|t| t.id));
                    })
                />
                <label class="section-filters__label">"Staff"</label>
                <StaffSelector
                    value=staff_id
                    on_change=Callback::new(move |member: Option<Staff>| {
                        teacher_id.set(None);
                        staff_id.set(member.map(|s| s.id));
                    })
                />
            </div>
            <DataTable data=rows columns=table_columns meta=meta />
        </SectionFrame>
    }
}
