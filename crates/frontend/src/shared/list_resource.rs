//! Загрузка списка сущностей для секции: данные, флаг загрузки, ошибка.

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::api_utils::ApiError;

/// Rows of one entity list plus load state.
///
/// `reload()` refetches; a response that arrives after a newer reload was
/// requested is discarded.
pub struct ListResource<T: Send + Sync + 'static> {
    pub items: RwSignal<Vec<T>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    version: RwSignal<u64>,
}

impl<T: Send + Sync + 'static> Clone for ListResource<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for ListResource<T> {}

impl<T: Send + Sync + 'static> ListResource<T> {
    pub fn new<F, Fut>(label: &'static str, fetch: F) -> Self
    where
        F: Fn() -> Fut + 'static,
        Fut: Future<Output = Result<Vec<T>, ApiError>> + 'static,
    {
        let res = Self {
            items: RwSignal::new(Vec::new()),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
            version: RwSignal::new(0),
        };

        Effect::new(move |_| {
            let version = res.version.get();
            res.loading.set(true);
            let request = fetch();
            spawn_local(async move {
                let result = request.await;
                if res.version.try_get_untracked() != Some(version) {
                    return;
                }
                match result {
                    Ok(items) => {
                        log::debug!("{}: loaded {} rows", label, items.len());
                        res.items.set(items);
                        res.error.set(None);
                    }
                    Err(err) => {
                        log::error!("{}: {}", label, err);
                        res.error.set(Some(err.to_string()));
                    }
                }
                res.loading.set(false);
            });
        });

        res
    }

    pub fn reload(&self) {
        self.version.update(|v| *v += 1);
    }

    pub fn data(&self) -> Signal<Vec<T>> {
        self.items.into()
    }
}
