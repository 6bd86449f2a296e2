use leptos::prelude::*;

use crate::domain::a001_student::ui::list::StudentList;
use crate::domain::a002_teacher::ui::list::TeacherList;
use crate::domain::a003_staff::ui::list::StaffList;
use crate::domain::a004_school_class::ui::list::SchoolClassList;
use crate::domain::a005_subject::ui::list::SubjectList;
use crate::domain::a006_attendance::ui::list::AttendanceList;
use crate::domain::a007_fee::ui::list::FeeList;
use crate::domain::a008_salary::ui::list::SalaryList;
use crate::domain::a009_tenant::ui::list::TenantList;
use crate::layout::global_context::use_global_context;
use crate::layout::sections::{resolve, Section};
use crate::system::auth::{CurrentActor, RequirePermission};
use crate::system::users::ui::list::UserList;

fn section_view(section: Section, actor: Signal<CurrentActor>) -> AnyView {
    match section {
        Section::Students => view! { <StudentList actor=actor /> }.into_any(),
        Section::Classes => view! { <SchoolClassList actor=actor /> }.into_any(),
        Section::Subjects => view! { <SubjectList actor=actor /> }.into_any(),
        Section::Attendance => view! { <AttendanceList actor=actor /> }.into_any(),
        Section::Teachers => view! { <TeacherList actor=actor /> }.into_any(),
        Section::Staff => view! { <StaffList actor=actor /> }.into_any(),
        Section::Fees => view! { <FeeList actor=actor /> }.into_any(),
        Section::Salaries => view! { <SalaryList actor=actor /> }.into_any(),
        Section::Users => view! { <UserList actor=actor /> }.into_any(),
        Section::Schools => view! { <TenantList actor=actor /> }.into_any(),
    }
}

/// Renders the open section. A section the actor may not see is replaced
/// by the first one it may; the guard covers a role change while it is open.
#[component]
pub fn Center(#[prop(into)] actor: Signal<CurrentActor>) -> impl IntoView {
    let ctx = use_global_context();
    let shown = Memo::new(move |_| actor.with(|a| resolve(a, ctx.active.get())));

    view! {
        <main data-zone="center" class="app-main">
            {move || match shown.get() {
                Some(section) => {
                    view! {
                        <RequirePermission actor=actor permission=section.permission()>
                            {section_view(section, actor)}
                        </RequirePermission>
                    }
                        .into_any()
                }
                None => {
                    view! {
                        <div class="alert alert--warning">
                            "Your role has no sections available. Ask an administrator for access."
                        </div>
                    }
                        .into_any()
                }
            }}
        </main>
    }
}
