pub mod api_utils;
pub mod combobox;
pub mod config;
pub mod data_table;
pub mod date_utils;
pub mod form;
pub mod format;
pub mod icons;
pub mod list_resource;
pub mod modal_frame;
pub mod modal_stack;
pub mod notify;
pub mod section;
