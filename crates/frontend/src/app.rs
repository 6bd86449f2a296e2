use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use crate::shared::config::AppConfig;
use crate::shared::modal_stack::{ModalHost, ModalService};
use crate::shared::notify::{provide_notifier, ToastHost};
use crate::system::auth::{use_auth, AuthProvider};
use crate::system::pages::login::LoginPage;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Config first: the notifier reads its toast duration from it
    provide_context(AppConfig::default());
    provide_context(AppGlobalContext::new());
    provide_context(ModalService::new());
    provide_notifier();

    view! {
        <AuthProvider>
            <AuthGate />
            <ModalHost />
            <ToastHost />
        </AuthProvider>
    }
}

/// Login page until a session exists, then the shell for that actor
#[component]
fn AuthGate() -> impl IntoView {
    let (auth_state, _) = use_auth();
    // The shell is rebuilt only when a different user signs in; a profile
    // refresh for the same user flows through the actor signal.
    let user_id = Memo::new(move |_| auth_state.with(|s| s.actor.as_ref().map(|a| a.user_id.clone())));

    move || match user_id.get() {
        Some(_) => {
            let Some(first) = auth_state.with_untracked(|s| s.actor.clone()) else {
                return view! { <LoginPage /> }.into_any();
            };
            let last = StoredValue::new(first);
            let actor = Signal::derive(move || match auth_state.with(|s| s.actor.clone()) {
                Some(current) => {
                    last.set_value(current.clone());
                    current
                }
                None => last.get_value(),
            });
            view! { <Shell actor=actor /> }.into_any()
        }
        None => view! { <LoginPage /> }.into_any(),
    }
}
