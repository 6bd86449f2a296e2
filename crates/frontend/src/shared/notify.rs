//! Всплывающие уведомления (toast) о результатах операций.
//!
//! Секции вызывают `use_notify().error(..)` / `.success(..)`; `ToastHost`
//! монтируется один раз в корне приложения.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::config::AppConfig;
use crate::shared::icons::icon;

/// Older toasts are dropped beyond this many
const MAX_VISIBLE: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Info,
    Error,
}

impl ToastKind {
    fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast--success",
            ToastKind::Info => "toast toast--info",
            ToastKind::Error => "toast toast--error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub text: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastQueue {
    items: Vec<Toast>,
    next_id: u64,
}

impl ToastQueue {
    pub fn push(&mut self, kind: ToastKind, text: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Toast {
            id,
            kind,
            text: text.into(),
        });
        if self.items.len() > MAX_VISIBLE {
            let overflow = self.items.len() - MAX_VISIBLE;
            self.items.drain(..overflow);
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|t| t.id != id);
    }

    pub fn items(&self) -> &[Toast] {
        &self.items
    }
}

#[derive(Clone, Copy)]
pub struct Notifier {
    queue: RwSignal<ToastQueue>,
    duration_ms: u32,
}

impl Notifier {
    pub fn new(duration_ms: u32) -> Self {
        Self {
            queue: RwSignal::new(ToastQueue::default()),
            duration_ms,
        }
    }

    pub fn show(&self, kind: ToastKind, text: impl Into<String>) {
        let id = self.queue.try_update(|q| q.push(kind, text));
        let Some(id) = id else {
            return;
        };
        let queue = self.queue;
        let duration = self.duration_ms;
        spawn_local(async move {
            TimeoutFuture::new(duration).await;
            // the owner may be gone after navigation
            queue.try_update(|q| q.dismiss(id));
        });
    }

    pub fn success(&self, text: impl Into<String>) {
        self.show(ToastKind::Success, text);
    }

    pub fn info(&self, text: impl Into<String>) {
        self.show(ToastKind::Info, text);
    }

    pub fn error(&self, text: impl Into<String>) {
        let text = text.into();
        log::error!("{}", text);
        self.show(ToastKind::Error, text);
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.update(|q| q.dismiss(id));
    }
}

pub fn provide_notifier() -> Notifier {
    let duration = use_context::<AppConfig>()
        .map(|c| c.toast_millis)
        .unwrap_or(4000);
    let notifier = Notifier::new(duration);
    provide_context(notifier);
    notifier
}

pub fn use_notify() -> Notifier {
    use_context::<Notifier>().expect("Notifier not provided in context (call provide_notifier in app root)")
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let notifier = use_notify();

    view! {
        <div class="toast-host">
            <For
                each=move || notifier.queue.with(|q| q.items().to_vec())
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.kind.class() role="status">
                            <span class="toast__text">{toast.text}</span>
                            <button class="toast__close" on:click=move |_| notifier.dismiss(id)>
                                {icon("x")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
