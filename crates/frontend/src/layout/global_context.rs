use leptos::prelude::*;

use super::sections::Section;

/// Shell state shared through context: which section is open and whether
/// the sidebar is shown.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<Section>,
    pub left_open: RwSignal<bool>,
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(Section::Students),
            left_open: RwSignal::new(true),
        }
    }

    pub fn open(&self, section: Section) {
        if self.active.get_untracked() != section {
            log::debug!("open section {:?}", section);
            self.active.set(section);
        }
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|open| *open = !*open);
    }
}

pub fn use_global_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext not found")
}
