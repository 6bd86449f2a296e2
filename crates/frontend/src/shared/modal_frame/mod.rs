use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::shared::icons::icon;

/// Overlay + surface with a title bar and a close button.
///
/// Closes on an overlay click only when both mousedown and click landed on
/// the overlay itself, so selecting text inside the dialog never closes it.
#[component]
pub fn ModalFrame(
    #[prop(into)] title: String,
    on_close: Callback<()>,
    #[prop(optional, default = 1000)] z_index: i32,
    /// Wider surface for detail views
    #[prop(optional)]
    wide: bool,
    children: Children,
) -> impl IntoView {
    let pressed_on_overlay = RwSignal::new(false);

    let on_overlay = |ev: &ev::MouseEvent| match (ev.target(), ev.current_target()) {
        (Some(target), Some(current)) => target == current,
        _ => false,
    };

    let close = move || {
        // removing the overlay while its own click is dispatched breaks delegation
        spawn_local(async move {
            TimeoutFuture::new(0).await;
            on_close.run(());
        });
    };

    let surface_class = if wide { "modal modal--wide" } else { "modal" };

    view! {
        <div
            class="modal-overlay"
            style=format!("z-index: {};", z_index)
            on:mousedown=move |ev| pressed_on_overlay.set(on_overlay(&ev))
            on:click=move |ev| {
                let hit = pressed_on_overlay.get_untracked() && on_overlay(&ev);
                pressed_on_overlay.set(false);
                if hit {
                    close();
                }
            }
        >
            <div class=surface_class role="dialog" on:click=|ev: ev::MouseEvent| ev.stop_propagation()>
                <div class="modal__header">
                    <h3 class="modal__title">{title}</h3>
                    <button class="modal__close" title="Close" on:click=move |_| close()>
                        {icon("x")}
                    </button>
                </div>
                <div class="modal__body">{children()}</div>
            </div>
        </div>
    }
}
