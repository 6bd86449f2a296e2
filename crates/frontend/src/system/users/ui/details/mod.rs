use contracts::enums::Role;
use contracts::system::users::{CreateUserDto, UpdateUserDto, User};
use leptos::prelude::*;
use thaw::*;

use crate::shared::combobox::EnumSelector;
use crate::shared::form::{non_empty, submit_form, FormActions, FormError, FormField};
use crate::shared::notify::use_notify;
use crate::system::users::api::{create_user, update_user};

const MIN_PASSWORD_LEN: usize = 8;

pub fn validate_new_user(username: &str, password: &str, role: Option<Role>) -> Result<Role, String> {
    if username.trim().is_empty() {
        return Err("Username is required".to_string());
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(format!("Password needs at least {} characters", MIN_PASSWORD_LEN));
    }
    role.ok_or_else(|| "Choose a role".to_string())
}

/// Creates a user (`initial = None`) or edits profile, role and status.
/// New users belong to `tenant_id`.
#[component]
pub fn UserForm(
    initial: Option<User>,
    roles: Vec<Role>,
    tenant_id: Option<String>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let notify = use_notify();
    let editing = initial.as_ref().map(|u| u.id.clone());
    let is_new = editing.is_none();
    let editing = StoredValue::new(editing);
    let tenant_id = StoredValue::new(tenant_id);

    let username = RwSignal::new(initial.as_ref().map(|u| u.username.clone()).unwrap_or_default());
    let password = RwSignal::new(String::new());
    let email = RwSignal::new(initial.as_ref().and_then(|u| u.email.clone()).unwrap_or_default());
    let full_name = RwSignal::new(initial.as_ref().and_then(|u| u.full_name.clone()).unwrap_or_default());
    let role = RwSignal::new(initial.as_ref().map(|u| u.role));
    let active = RwSignal::new(initial.as_ref().map_or(true, |u| u.is_active));
    let error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);

    let on_save = Callback::new(move |_| match editing.get_value() {
        None => {
            let login = username.get_untracked();
            let secret = password.get_untracked();
            let chosen = match validate_new_user(&login, &secret, role.get_untracked()) {
                Ok(r) => r,
                Err(msg) => {
                    error.set(Some(msg));
                    return;
                }
            };
            let dto = CreateUserDto {
                username: login.trim().to_string(),
                password: secret,
                email: non_empty(&email.get_untracked()),
                full_name: non_empty(&full_name.get_untracked()),
                role: chosen,
                tenant_id: tenant_id.get_value(),
            };
            submit_form(saving, error, notify, "User created", create_user(dto), on_saved);
        }
        Some(id) => {
            let Some(chosen) = role.get_untracked() else {
                error.set(Some("Choose a role".to_string()));
                return;
            };
            let dto = UpdateUserDto {
                id,
                email: non_empty(&email.get_untracked()),
                full_name: non_empty(&full_name.get_untracked()),
                role: chosen,
                is_active: active.get_untracked(),
            };
            submit_form(saving, error, notify, "User updated", update_user(dto), on_saved);
        }
    });

    view! {
        <div class="form">
            <FormError error=error />
            <FormField label="Username">
                <Input value=username disabled=!is_new />
            </FormField>
            <Show when=move || is_new>
                <FormField label="Password">
                    <input
                        type="password"
                        class="form-input"
                        autocomplete="new-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </FormField>
            </Show>
            <FormField label="Full name">
                <Input value=full_name />
            </FormField>
            <FormField label="Email">
                <Input value=email />
            </FormField>
            <FormField label="Role">
                <EnumSelector
                    value=role
                    on_change=Callback::new(move |r: Option<Role>| role.set(r))
                    choices=roles
                    clearable=false
                />
            </FormField>
            <Show when=move || !is_new>
                <label class="form-check">
                    <input
                        type="checkbox"
                        prop:checked=move || active.get()
                        on:change=move |ev| active.set(event_target_checked(&ev))
                    />
                    " Active"
                </label>
            </Show>
            <FormActions saving=saving on_save=on_save on_cancel=on_cancel />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_new_user() {
        assert_eq!(validate_new_user("amina", "long-enough", Some(Role::Teacher)), Ok(Role::Teacher));
        assert!(validate_new_user(" ", "long-enough", Some(Role::Teacher)).is_err());
        assert!(validate_new_user("amina", "short", Some(Role::Teacher)).is_err());
        assert_eq!(
            validate_new_user("amina", "long-enough", None),
            Err("Choose a role".to_string())
        );
    }
}
