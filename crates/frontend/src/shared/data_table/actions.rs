use std::sync::Arc;

use super::meta::TableMeta;

/// Semantic color of a row action
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionIntent {
    Info,
    Primary,
    Success,
    Warning,
    Danger,
}

impl ActionIntent {
    pub fn css_class(&self) -> &'static str {
        match self {
            ActionIntent::Info => "table-action table-action--info",
            ActionIntent::Primary => "table-action table-action--primary",
            ActionIntent::Success => "table-action table-action--success",
            ActionIntent::Warning => "table-action table-action--warning",
            ActionIntent::Danger => "table-action table-action--danger",
        }
    }
}

/// Meta callback an action's handler relies on
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActionNeeds {
    Nothing,
    Edit,
    Delete,
    Named(String),
}

pub type ActionHandler<T> = Arc<dyn Fn(&T, &str, &TableMeta<T>) + Send + Sync>;
pub type ActionPredicate<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;

/// One control in the actions column
pub struct ActionDescriptor<T> {
    pub key: String,
    pub label: String,
    pub icon: Option<&'static str>,
    pub intent: ActionIntent,
    pub handler: ActionHandler<T>,
    /// Without this callback in the meta the action is hidden
    needs: ActionNeeds,
    visible_when: Option<ActionPredicate<T>>,
}

impl<T> Clone for ActionDescriptor<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            label: self.label.clone(),
            icon: self.icon,
            intent: self.intent,
            handler: self.handler.clone(),
            needs: self.needs.clone(),
            visible_when: self.visible_when.clone(),
        }
    }
}

const EDIT: &str = "edit";
const DELETE: &str = "delete";

impl<T> ActionDescriptor<T> {
    pub fn new(
        key: impl Into<String>,
        label: impl Into<String>,
        intent: ActionIntent,
        handler: impl Fn(&T, &str, &TableMeta<T>) + Send + Sync + 'static,
    ) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            icon: None,
            intent,
            handler: Arc::new(handler),
            needs: ActionNeeds::Nothing,
            visible_when: None,
        }
    }

    /// Calls `meta.on_edit(row)`
    pub fn edit() -> Self {
        let mut action = Self::new(EDIT, "Edit", ActionIntent::Info, |row, _, meta| {
            meta.edit(row);
        })
        .icon("edit");
        action.needs = ActionNeeds::Edit;
        action
    }

    /// Calls `meta.on_delete(id)`
    pub fn delete() -> Self {
        let mut action = Self::new(DELETE, "Delete", ActionIntent::Danger, |_, id, meta| {
            meta.delete(id);
        })
        .icon("delete");
        action.needs = ActionNeeds::Delete;
        action
    }

    /// Calls the named extra callback of the meta context
    pub fn custom(name: impl Into<String>, label: impl Into<String>, intent: ActionIntent) -> Self {
        let name = name.into();
        let callback = name.clone();
        let mut action = Self::new(name.clone(), label, intent, move |row, id, meta| {
            meta.call(&callback, row, id);
        });
        action.needs = ActionNeeds::Named(name);
        action
    }

    pub fn icon(mut self, icon: &'static str) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn visible_when(mut self, predicate: impl Fn(&T) -> bool + Send + Sync + 'static) -> Self {
        self.visible_when = Some(Arc::new(predicate));
        self
    }

    /// Whether the control is shown for `row` with the current `meta`
    pub fn is_available(&self, row: &T, meta: &TableMeta<T>) -> bool {
        let wired = match &self.needs {
            ActionNeeds::Nothing => true,
            ActionNeeds::Edit => meta.has_edit(),
            ActionNeeds::Delete => meta.has_delete(),
            ActionNeeds::Named(name) => meta.has(name),
        };
        wired && self.visible_when.as_ref().map_or(true, |p| p(row))
    }

    pub fn invoke(&self, row: &T, id: &str, meta: &TableMeta<T>) {
        (self.handler)(row, id, meta);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn test_builtin_actions_hidden_without_callbacks() {
        let meta: TableMeta<u32> = TableMeta::new();
        assert!(!ActionDescriptor::<u32>::edit().is_available(&1, &meta));
        assert!(!ActionDescriptor::<u32>::delete().is_available(&1, &meta));
        assert!(!ActionDescriptor::<u32>::custom("approve", "Approve", ActionIntent::Success)
            .is_available(&1, &meta));
    }

    #[test]
    fn test_custom_action_calls_named_callback() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let meta: TableMeta<u32> = TableMeta::new().with("approve", move |row, id| {
            sink.lock().unwrap().push((*row, id.to_string()));
        });
        let action = ActionDescriptor::custom("approve", "Approve", ActionIntent::Success);
        assert!(action.is_available(&7, &meta));
        action.invoke(&7, "f-7", &meta);
        assert_eq!(*seen.lock().unwrap(), vec![(7, "f-7".to_string())]);
    }

    #[test]
    fn test_custom_action_named_like_builtin_uses_extra_callback() {
        let only_builtin: TableMeta<u32> = TableMeta::new().on_delete(|_| {});
        let archive = ActionDescriptor::<u32>::custom("delete", "Archive", ActionIntent::Warning);
        assert!(!archive.is_available(&1, &only_builtin));

        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let only_extra: TableMeta<u32> = TableMeta::new().with("delete", move |_, id| {
            sink.lock().unwrap().push(id.to_string());
        });
        assert!(archive.is_available(&1, &only_extra));
        assert!(!ActionDescriptor::<u32>::delete().is_available(&1, &only_extra));
        archive.invoke(&1, "s-1", &only_extra);
        assert_eq!(*seen.lock().unwrap(), vec!["s-1".to_string()]);
    }

    #[test]
    fn test_visible_when() {
        let meta: TableMeta<u32> = TableMeta::new().on_delete(|_| {});
        let action = ActionDescriptor::<u32>::delete().visible_when(|row| *row > 5);
        assert!(!action.is_available(&3, &meta));
        assert!(action.is_available(&9, &meta));
    }
}
