use contracts::system::auth::UserInfo;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::actor::CurrentActor;
use super::{api, jwt, storage};
use crate::shared::api_utils::ApiError;
use crate::shared::date_utils::unix_now;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub user_info: Option<UserInfo>,
    pub actor: Option<CurrentActor>,
    /// True while a stored session is being checked on startup
    pub restoring: bool,
}

impl AuthState {
    pub fn signed_in(token: String, user: UserInfo) -> Self {
        Self {
            access_token: Some(token),
            actor: Some(CurrentActor::from(&user)),
            user_info: Some(user),
            restoring: false,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some() && self.actor.is_some()
    }
}

/// Restores the session from localStorage and provides `AuthState`
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState::default());

    if let Some(token) = storage::get_access_token() {
        match jwt::decode_claims(&token) {
            Ok(claims) if !jwt::is_expired(&claims, unix_now()) => {
                // Claims are enough to render; /me refreshes the profile
                set_auth_state.set(AuthState {
                    access_token: Some(token.clone()),
                    user_info: None,
                    actor: Some(CurrentActor::from(&claims)),
                    restoring: true,
                });
                spawn_local(async move {
                    match api::me().await {
                        Ok(user) => set_auth_state.set(AuthState::signed_in(token, user)),
                        Err(err) if err.is_unauthorized() => {
                            log::warn!("stored session rejected: {}", err);
                            storage::clear_access_token();
                            set_auth_state.set(AuthState::default());
                        }
                        Err(err) => {
                            log::warn!("could not refresh profile: {}", err);
                            set_auth_state.update(|s| s.restoring = false);
                        }
                    }
                });
            }
            Ok(_) => {
                log::debug!("stored token expired");
                storage::clear_access_token();
            }
            Err(err) => {
                log::warn!("stored token unreadable: {}", err);
                storage::clear_access_token();
            }
        }
    }

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// The signed-in actor, if any
pub fn use_actor() -> Signal<Option<CurrentActor>> {
    let (auth_state, _) = use_auth();
    Signal::derive(move || auth_state.with(|s| s.actor.clone()))
}

/// Logs in and stores the token. Takes the setter because the component
/// context is gone once the request has been awaited.
pub async fn sign_in(
    set_auth_state: WriteSignal<AuthState>,
    username: String,
    password: String,
) -> Result<(), ApiError> {
    let response = api::login(username, password).await?;
    storage::save_access_token(&response.access_token);
    log::info!("signed in as {}", response.user.username);
    set_auth_state.set(AuthState::signed_in(response.access_token, response.user));
    Ok(())
}

pub async fn sign_out(set_auth_state: WriteSignal<AuthState>) {
    if let Err(err) = api::logout().await {
        log::warn!("logout request failed: {}", err);
    }
    storage::clear_access_token();
    set_auth_state.set(AuthState::default());
}
