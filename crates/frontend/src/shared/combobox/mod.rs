//! Поисковый выбор одного элемента из списка.

pub mod component;
pub mod enum_selector;
pub mod state;

pub use component::Combobox;
pub use enum_selector::{enum_fields, EnumChoice, EnumSelector};
pub use state::{
    candidates, display_text, find_by_value, position_of, ComboboxFields, ComboboxState, Dropdown,
};
