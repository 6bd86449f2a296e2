use contracts::system::auth::Permission;
use leptos::prelude::*;

use super::actor::CurrentActor;

/// Renders children only when the actor holds `permission`
#[component]
pub fn RequirePermission(
    #[prop(into)] actor: Signal<CurrentActor>,
    permission: Permission,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <Show
            when=move || actor.with(|a| a.can(permission))
            fallback=|| view! { <div class="alert alert--warning">"Access denied for your role."</div> }
        >
            {children()}
        </Show>
    }
}
