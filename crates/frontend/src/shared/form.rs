//! Общие части форм создания/редактирования.

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::api_utils::ApiError;
use crate::shared::notify::Notifier;

/// Trimmed text, `None` when blank
pub fn non_empty(text: &str) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Optional whole number; blank means "not set"
pub fn parse_count(text: &str, what: &str) -> Result<Option<u32>, String> {
    match text.trim() {
        "" => Ok(None),
        value => value
            .parse::<u32>()
            .map(Some)
            .map_err(|_| format!("{} must be a whole number", what)),
    }
}

/// Required non-negative amount
pub fn parse_amount(text: &str, what: &str) -> Result<f64, String> {
    let value = text
        .trim()
        .replace(' ', "")
        .parse::<f64>()
        .map_err(|_| format!("{} must be a number", what))?;
    if !value.is_finite() || value < 0.0 {
        return Err(format!("{} cannot be negative", what));
    }
    Ok(value)
}

#[component]
pub fn FormField(#[prop(into)] label: String, children: Children) -> impl IntoView {
    view! {
        <div class="form-group">
            <label class="form-group__label">{label}</label>
            {children()}
        </div>
    }
}

#[component]
pub fn FormError(#[prop(into)] error: Signal<Option<String>>) -> impl IntoView {
    move || error.get().map(|msg| view! { <div class="alert alert--error">{msg}</div> })
}

#[component]
pub fn FormActions(
    #[prop(into)] saving: Signal<bool>,
    on_save: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <Flex justify=FlexJustify::End gap=FlexGap::Small>
            <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_cancel.run(())>
                "Cancel"
            </Button>
            <Button
                appearance=ButtonAppearance::Primary
                disabled=saving
                on_click=move |_| on_save.run(())
            >
                {move || if saving.get() { "Saving..." } else { "Save" }}
            </Button>
        </Flex>
    }
}

/// Sends a validated form. Errors stay in the form; success closes it
/// through `on_saved` and shows a toast.
pub fn submit_form<T, Fut>(
    saving: RwSignal<bool>,
    error: RwSignal<Option<String>>,
    notify: Notifier,
    success: &'static str,
    request: Fut,
    on_saved: Callback<()>,
) where
    T: 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    error.set(None);
    saving.set(true);
    spawn_local(async move {
        match request.await {
            Ok(_) => {
                notify.success(success);
                on_saved.run(());
            }
            Err(err) => {
                error.try_set(Some(err.to_string()));
            }
        }
        saving.try_set(false);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty("  B "), Some("B".to_string()));
        assert_eq!(non_empty("   "), None);
    }

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("", "Capacity"), Ok(None));
        assert_eq!(parse_count(" 30 ", "Capacity"), Ok(Some(30)));
        assert_eq!(
            parse_count("-1", "Capacity"),
            Err("Capacity must be a whole number".to_string())
        );
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("1 250.50", "Amount"), Ok(1250.5));
        assert!(parse_amount("-3", "Amount").is_err());
        assert!(parse_amount("abc", "Amount").is_err());
    }
}
