//! Универсальная таблица: сортировка, глобальный поиск, пагинация
//! над записями любого типа с описанием колонок и действиями строк.

pub mod actions;
pub mod column;
pub mod component;
pub mod details;
pub mod helpers;
pub mod meta;
pub mod model;
pub mod pagination;
pub mod pipeline;
pub mod state;
pub mod value;

pub use actions::{ActionDescriptor, ActionIntent};
pub use column::{
    validate_columns, Accessor, Align, ColumnDef, ColumnError, ColumnKind, Header, HeaderContext,
    TableRecord,
};
pub use component::DataTable;
pub use details::RecordDetails;
pub use helpers::{
    actions_column, badge_cell, badge_column, date_column, derived_column, display_column, money_column,
    number_column, sort_indicator, sortable_header, text_column,
};
pub use meta::TableMeta;
pub use model::TableModel;
pub use pipeline::{compute_view, TableView};
pub use state::{SortDirection, TableState};
pub use value::CellValue;
