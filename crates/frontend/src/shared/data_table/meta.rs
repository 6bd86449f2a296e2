//! Meta-контекст таблицы: колбэки секции, доступные ячейкам.
//!
//! Секция собирает `TableMeta` заново при каждом изменении своих колбэков,
//! таблица читает актуальное значение в момент нажатия на действие.

use std::collections::HashMap;
use std::sync::Arc;

pub type EditCallback<T> = Arc<dyn Fn(&T) + Send + Sync>;
pub type DeleteCallback = Arc<dyn Fn(&str) + Send + Sync>;
pub type RowCallback<T> = Arc<dyn Fn(&T, &str) + Send + Sync>;

pub struct TableMeta<T> {
    on_edit: Option<EditCallback<T>>,
    on_delete: Option<DeleteCallback>,
    extra: HashMap<String, RowCallback<T>>,
}

impl<T> Clone for TableMeta<T> {
    fn clone(&self) -> Self {
        Self {
            on_edit: self.on_edit.clone(),
            on_delete: self.on_delete.clone(),
            extra: self.extra.clone(),
        }
    }
}

impl<T> Default for TableMeta<T> {
    fn default() -> Self {
        Self {
            on_edit: None,
            on_delete: None,
            extra: HashMap::new(),
        }
    }
}

impl<T> TableMeta<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_edit(mut self, f: impl Fn(&T) + Send + Sync + 'static) -> Self {
        self.on_edit = Some(Arc::new(f));
        self
    }

    pub fn on_delete(mut self, f: impl Fn(&str) + Send + Sync + 'static) -> Self {
        self.on_delete = Some(Arc::new(f));
        self
    }

    /// Entity-specific row callback, e.g. "approve" or "pay"
    pub fn with(mut self, name: impl Into<String>, f: impl Fn(&T, &str) + Send + Sync + 'static) -> Self {
        self.extra.insert(name.into(), Arc::new(f));
        self
    }

    /// Adds callbacks from `other`; its entries win on conflict
    pub fn merge(mut self, other: TableMeta<T>) -> Self {
        if other.on_edit.is_some() {
            self.on_edit = other.on_edit;
        }
        if other.on_delete.is_some() {
            self.on_delete = other.on_delete;
        }
        self.extra.extend(other.extra);
        self
    }

    pub fn has_edit(&self) -> bool {
        self.on_edit.is_some()
    }

    pub fn has_delete(&self) -> bool {
        self.on_delete.is_some()
    }

    pub fn has(&self, name: &str) -> bool {
        self.extra.contains_key(name)
    }

    /// Returns false when no edit callback is set
    pub fn edit(&self, row: &T) -> bool {
        match &self.on_edit {
            Some(f) => {
                f(row);
                true
            }
            None => false,
        }
    }

    pub fn delete(&self, id: &str) -> bool {
        match &self.on_delete {
            Some(f) => {
                f(id);
                true
            }
            None => false,
        }
    }

    pub fn call(&self, name: &str, row: &T, id: &str) -> bool {
        match self.extra.get(name) {
            Some(f) => {
                f(row, id);
                true
            }
            None => {
                log::warn!("table meta has no `{}` callback", name);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_missing_callbacks_report_false() {
        let meta: TableMeta<String> = TableMeta::new();
        assert!(!meta.edit(&"row".to_string()));
        assert!(!meta.delete("1"));
        assert!(!meta.call("approve", &"row".to_string(), "1"));
    }

    #[test]
    fn test_merge_prefers_other() {
        let hits = Arc::new(AtomicUsize::new(0));
        let a = hits.clone();
        let b = hits.clone();
        let base: TableMeta<String> = TableMeta::new().on_delete(move |_| {
            a.fetch_add(1, Ordering::SeqCst);
        });
        let merged = base.merge(TableMeta::new().on_delete(move |_| {
            b.fetch_add(10, Ordering::SeqCst);
        }));
        assert!(merged.delete("x"));
        assert_eq!(hits.load(Ordering::SeqCst), 10);
    }
}
