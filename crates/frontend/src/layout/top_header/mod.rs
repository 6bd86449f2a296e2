//! Top bar: sidebar toggle, brand, signed-in user and sign-out.

use crate::layout::global_context::use_global_context;
use crate::shared::icons::icon;
use crate::system::auth::context::{sign_out, use_auth};
use crate::system::auth::CurrentActor;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn TopHeader(#[prop(into)] actor: Signal<CurrentActor>) -> impl IntoView {
    let ctx = use_global_context();
    let (_, set_auth_state) = use_auth();

    let toggle_sidebar = move |_| ctx.toggle_left();
    let logout = move |_| {
        spawn_local(async move {
            sign_out(set_auth_state).await;
        });
    };

    let is_sidebar_visible = move || ctx.left_open.get();

    view! {
        <header class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=toggle_sidebar
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {move || if is_sidebar_visible() { icon("chevron-left") } else { icon("chevron-right") }}
                </button>
                <span class="top-header__title">"School Office"</span>
                <span class="top-header__section">{move || ctx.active.get().title()}</span>
            </div>

            <div class="top-header__actions">
                <div class="top-header__user">
                    {icon("user")}
                    <span>{move || actor.with(|a| a.display_name.clone())}</span>
                    <span class="top-header__role">{move || actor.with(|a| a.role.label())}</span>
                </div>
                <button class="top-header__icon-btn" on:click=logout title="Sign out">
                    {icon("logout")}
                </button>
            </div>
        </header>
    }
}
