pub mod center;
pub mod global_context;
pub mod left;
pub mod sections;
pub mod top_header;

use crate::system::auth::CurrentActor;
use leptos::prelude::*;
use top_header::TopHeader;

/// Signed-in application shell.
///
/// ```text
/// +----------------------------------+
/// |            TopHeader             |
/// +----------------------------------+
/// |  Navbar   |   open section       |
/// |  (Left)   |   (Center)           |
/// +----------------------------------+
/// ```
#[component]
pub fn Shell(#[prop(into)] actor: Signal<CurrentActor>) -> impl IntoView {
    view! {
        <div class="app-layout">
            <TopHeader actor=actor />
            <div class="app-body">
                <left::Left>
                    <left::Navbar actor=actor />
                </left::Left>
                <center::Center actor=actor />
            </div>
        </div>
    }
}
