//! Описание колонок таблицы.
//!
//! Колонка бывает трёх видов: колонка данных с аксессором, колонка
//! только для отображения или колонка действий над строкой.

use leptos::prelude::*;
use std::collections::HashSet;
use std::sync::Arc;
use thiserror::Error;

use super::actions::ActionDescriptor;
use super::state::SortDirection;
use super::value::CellValue;

/// Row types the table can read by field key.
pub trait TableRecord {
    /// `None` for keys the record does not have
    fn field(&self, key: &str) -> Option<CellValue>;
}

pub type CellRenderer<T> = Arc<dyn Fn(&CellValue, &T) -> AnyView + Send + Sync>;
pub type RowRenderer<T> = Arc<dyn Fn(&T) -> AnyView + Send + Sync>;
pub type HeaderRenderer = Arc<dyn Fn(HeaderContext) -> AnyView + Send + Sync>;

/// How a column reads its value from a row
pub enum Accessor<T> {
    Field(&'static str),
    Derived(Arc<dyn Fn(&T) -> CellValue + Send + Sync>),
    Fallible(Arc<dyn Fn(&T) -> Result<CellValue, String> + Send + Sync>),
}

impl<T> Clone for Accessor<T> {
    fn clone(&self) -> Self {
        match self {
            Accessor::Field(key) => Accessor::Field(*key),
            Accessor::Derived(f) => Accessor::Derived(f.clone()),
            Accessor::Fallible(f) => Accessor::Fallible(f.clone()),
        }
    }
}

impl<T: TableRecord> Accessor<T> {
    pub fn derived(f: impl Fn(&T) -> CellValue + Send + Sync + 'static) -> Self {
        Accessor::Derived(Arc::new(f))
    }

    pub fn fallible(f: impl Fn(&T) -> Result<CellValue, String> + Send + Sync + 'static) -> Self {
        Accessor::Fallible(Arc::new(f))
    }

    /// Never fails: a missing field or a failed derivation is an empty cell.
    pub fn read(&self, row: &T) -> CellValue {
        match self {
            Accessor::Field(key) => row.field(key).unwrap_or(CellValue::Empty),
            Accessor::Derived(f) => f(row),
            Accessor::Fallible(f) => f(row).unwrap_or_else(|err| {
                log::warn!("cell value unavailable: {}", err);
                CellValue::Empty
            }),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Align {
    #[default]
    Left,
    Right,
}

impl Align {
    pub fn as_style(&self) -> &'static str {
        match self {
            Align::Left => "text-align: left;",
            Align::Right => "text-align: right;",
        }
    }
}

/// Passed to a custom header renderer on every render
#[derive(Clone)]
pub struct HeaderContext {
    pub column_id: String,
    pub title: String,
    pub sortable: bool,
    pub sort: Option<SortDirection>,
    pub align: Align,
    pub on_toggle: Callback<String>,
}

#[derive(Clone)]
pub enum Header {
    Plain(String),
    Custom { title: String, render: HeaderRenderer },
}

impl Header {
    pub fn title(&self) -> &str {
        match self {
            Header::Plain(title) => title,
            Header::Custom { title, .. } => title,
        }
    }
}

pub enum ColumnKind<T> {
    Data {
        accessor: Accessor<T>,
        sortable: bool,
        filterable: bool,
        cell: Option<CellRenderer<T>>,
    },
    Display {
        render: RowRenderer<T>,
    },
    Actions {
        id_accessor: Accessor<T>,
        actions: Vec<ActionDescriptor<T>>,
    },
}

impl<T> Clone for ColumnKind<T> {
    fn clone(&self) -> Self {
        match self {
            ColumnKind::Data {
                accessor,
                sortable,
                filterable,
                cell,
            } => ColumnKind::Data {
                accessor: accessor.clone(),
                sortable: *sortable,
                filterable: *filterable,
                cell: cell.clone(),
            },
            ColumnKind::Display { render } => ColumnKind::Display {
                render: render.clone(),
            },
            ColumnKind::Actions {
                id_accessor,
                actions,
            } => ColumnKind::Actions {
                id_accessor: id_accessor.clone(),
                actions: actions.clone(),
            },
        }
    }
}

pub struct ColumnDef<T> {
    pub id: String,
    pub header: Header,
    pub kind: ColumnKind<T>,
    pub align: Align,
    pub min_width: f64,
}

impl<T> Clone for ColumnDef<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            header: self.header.clone(),
            kind: self.kind.clone(),
            align: self.align,
            min_width: self.min_width,
        }
    }
}

impl<T: TableRecord> ColumnDef<T> {
    pub fn new(id: impl Into<String>, header: Header, kind: ColumnKind<T>) -> Self {
        Self {
            id: id.into(),
            header,
            kind,
            align: Align::Left,
            min_width: 100.0,
        }
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn min_width(mut self, min_width: f64) -> Self {
        self.min_width = min_width;
        self
    }

    /// Render the value with a custom cell renderer (data columns only)
    pub fn cell(mut self, render: impl Fn(&CellValue, &T) -> AnyView + Send + Sync + 'static) -> Self {
        if let ColumnKind::Data { cell, .. } = &mut self.kind {
            *cell = Some(Arc::new(render));
        }
        self
    }

    /// Exclude the column from the global search
    pub fn not_filterable(mut self) -> Self {
        if let ColumnKind::Data { filterable, .. } = &mut self.kind {
            *filterable = false;
        }
        self
    }

    pub fn title(&self) -> &str {
        self.header.title()
    }

    /// Accessed value; display and action columns have none
    pub fn value(&self, row: &T) -> CellValue {
        match &self.kind {
            ColumnKind::Data { accessor, .. } => accessor.read(row),
            _ => CellValue::Empty,
        }
    }

    pub fn is_sortable(&self) -> bool {
        matches!(self.kind, ColumnKind::Data { sortable: true, .. })
    }

    pub fn is_filterable(&self) -> bool {
        matches!(self.kind, ColumnKind::Data { filterable: true, .. })
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColumnError {
    #[error("duplicate column id `{0}`")]
    DuplicateId(String),
    #[error("column id must not be empty")]
    EmptyId,
}

/// Checks that every column has a non-empty id unique within the set
pub fn validate_columns<T>(columns: &[ColumnDef<T>]) -> Result<(), ColumnError> {
    let mut seen = HashSet::new();
    for column in columns {
        if column.id.is_empty() {
            return Err(ColumnError::EmptyId);
        }
        if !seen.insert(column.id.as_str()) {
            return Err(ColumnError::DuplicateId(column.id.clone()));
        }
    }
    Ok(())
}

/// Keeps the first column for every id, drops empty ids, and logs what was dropped.
pub fn sanitize_columns<T>(columns: Vec<ColumnDef<T>>) -> Vec<ColumnDef<T>> {
    let mut seen = HashSet::new();
    columns
        .into_iter()
        .filter(|column| {
            if column.id.is_empty() {
                log::warn!("{}", ColumnError::EmptyId);
                return false;
            }
            if !seen.insert(column.id.clone()) {
                log::warn!("{}", ColumnError::DuplicateId(column.id.clone()));
                return false;
            }
            true
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data_table::helpers::{derived_column, text_column};

    #[derive(Clone)]
    struct Row {
        name: String,
    }

    impl TableRecord for Row {
        fn field(&self, key: &str) -> Option<CellValue> {
            match key {
                "name" => Some(self.name.clone().into()),
                _ => None,
            }
        }
    }

    fn row() -> Row {
        Row {
            name: "Amina".into(),
        }
    }

    #[test]
    fn test_unknown_field_reads_empty() {
        let col: ColumnDef<Row> = text_column("missing", "Missing");
        assert_eq!(col.value(&row()), CellValue::Empty);
    }

    #[test]
    fn test_failed_derivation_reads_empty() {
        let col = ColumnDef::new(
            "broken",
            Header::Plain("Broken".into()),
            ColumnKind::Data {
                accessor: Accessor::fallible(|_: &Row| Err("no data".to_string())),
                sortable: true,
                filterable: true,
                cell: None,
            },
        );
        assert_eq!(col.value(&row()), CellValue::Empty);
    }

    #[test]
    fn test_validate_columns_reports_duplicates() {
        let cols: Vec<ColumnDef<Row>> = vec![
            text_column("name", "Name"),
            derived_column("name", "Again", |r: &Row| r.name.len().to_string().into()),
        ];
        assert_eq!(
            validate_columns(&cols),
            Err(ColumnError::DuplicateId("name".into()))
        );
        let cleaned = sanitize_columns(cols);
        assert_eq!(cleaned.len(), 1);
        assert_eq!(cleaned[0].title(), "Name");
        assert!(validate_columns(&cleaned).is_ok());
    }
}
