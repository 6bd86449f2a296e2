//! Стек модальных окон: детали записи, формы, подтверждения.
//!
//! Escape закрывает только верхнее окно.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use std::sync::Arc;
use thaw::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::KeyboardEvent;

use crate::shared::modal_frame::ModalFrame;

type ModalBuilder = Arc<dyn Fn(ModalHandle) -> AnyView + Send + Sync>;

#[derive(Clone)]
struct ModalEntry {
    id: u64,
    title: String,
    wide: bool,
    builder: ModalBuilder,
}

/// Lets the content of a modal close it
#[derive(Clone, Copy)]
pub struct ModalHandle {
    id: u64,
    svc: ModalService,
}

impl ModalHandle {
    pub fn close(&self) {
        self.svc.close(self.id);
    }
}

#[derive(Clone, Copy)]
pub struct ModalService {
    stack: RwSignal<Vec<ModalEntry>>,
    next_id: StoredValue<u64>,
}

impl Default for ModalService {
    fn default() -> Self {
        Self::new()
    }
}

impl ModalService {
    pub fn new() -> Self {
        Self {
            stack: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(1),
        }
    }

    fn push(&self, title: String, wide: bool, builder: ModalBuilder) -> ModalHandle {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.stack.update(|s| {
            s.push(ModalEntry {
                id,
                title,
                wide,
                builder,
            })
        });
        ModalHandle { id, svc: *self }
    }

    pub fn open<F>(&self, title: impl Into<String>, builder: F) -> ModalHandle
    where
        F: Fn(ModalHandle) -> AnyView + Send + Sync + 'static,
    {
        self.push(title.into(), false, Arc::new(builder))
    }

    pub fn open_wide<F>(&self, title: impl Into<String>, builder: F) -> ModalHandle
    where
        F: Fn(ModalHandle) -> AnyView + Send + Sync + 'static,
    {
        self.push(title.into(), true, Arc::new(builder))
    }

    /// Yes/no dialog; `on_confirm` runs after the dialog is closed
    pub fn confirm<F>(&self, title: impl Into<String>, message: impl Into<String>, on_confirm: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        let message = message.into();
        let on_confirm = Arc::new(on_confirm);
        self.open(title, move |handle| {
            let on_confirm = on_confirm.clone();
            view! {
                <p class="modal__message">{message.clone()}</p>
                <Flex justify=FlexJustify::End gap=FlexGap::Small>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| handle.close()>
                        "Cancel"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| {
                            handle.close();
                            on_confirm();
                        }
                    >
                        "Confirm"
                    </Button>
                </Flex>
            }
            .into_any()
        });
    }

    /// Deferred to the next tick: the modal may be removed from inside its own click handler
    pub fn close(&self, id: u64) {
        let stack = self.stack;
        spawn_local(async move {
            TimeoutFuture::new(0).await;
            stack.try_update(|s| s.retain(|e| e.id != id));
        });
    }

    pub fn close_top(&self) {
        if let Some(id) = self.stack.with_untracked(|s| s.last().map(|e| e.id)) {
            self.close(id);
        }
    }

    pub fn is_open(&self) -> bool {
        self.stack.with(|s| !s.is_empty())
    }
}

pub fn use_modals() -> ModalService {
    use_context::<ModalService>().expect("ModalService not provided in context (provide it in app root)")
}

/// Renders the stack; mounted once at the root
#[component]
pub fn ModalHost() -> impl IntoView {
    let svc = use_modals();

    Effect::new(move |_| {
        let on_key = Closure::wrap(Box::new(move |event: web_sys::Event| {
            if let Some(key) = event.dyn_ref::<KeyboardEvent>() {
                if key.key() == "Escape" {
                    svc.close_top();
                }
            }
        }) as Box<dyn FnMut(_)>);

        if let Some(window) = web_sys::window() {
            let _ = window.add_event_listener_with_callback("keydown", on_key.as_ref().unchecked_ref());
            // lives as long as the app
            on_key.forget();
        }
    });

    view! {
        <For
            each={move || svc.stack.get().into_iter().enumerate().collect::<Vec<_>>()}
            key=|(_, entry)| entry.id
            children=move |(depth, entry)| {
                let handle = ModalHandle { id: entry.id, svc };
                let content = (entry.builder)(handle);
                view! {
                    <ModalFrame
                        title=entry.title.clone()
                        wide=entry.wide
                        z_index={1000 + depth as i32}
                        on_close=Callback::new(move |_| handle.close())
                    >
                        {content}
                    </ModalFrame>
                }
            }
        />
    }
}
