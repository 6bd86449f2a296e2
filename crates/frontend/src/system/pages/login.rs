use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::system::auth::context::{sign_in, use_auth};

#[component]
pub fn LoginPage() -> impl IntoView {
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error_message = RwSignal::new(Option::<String>::None);
    let is_loading = RwSignal::new(false);

    let (_, set_auth_state) = use_auth();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let login = username.get_untracked().trim().to_string();
        let secret = password.get_untracked();
        if login.is_empty() || secret.is_empty() {
            error_message.set(Some("Enter your username and password".to_string()));
            return;
        }

        is_loading.set(true);
        error_message.set(None);

        // the auth state switch swaps this page for the shell
        spawn_local(async move {
            if let Err(err) = sign_in(set_auth_state, login, secret).await {
                error_message.try_set(Some(format!("Sign-in failed: {}", err)));
            }
            is_loading.try_set(false);
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"School Office"</h1>
                <h2>"Sign in"</h2>

                {move || error_message.get().map(|msg| view! { <div class="error-message">{msg}</div> })}

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="username">"Username"</label>
                        <input
                            type="text"
                            id="username"
                            autocomplete="username"
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            autocomplete="current-password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <button type="submit" class="btn-primary" disabled=move || is_loading.get()>
                        {move || if is_loading.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
