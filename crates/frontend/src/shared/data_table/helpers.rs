//! Фабрики колонок, общие для всех списков.
//!
//! ```ignore
//! let columns = vec![
//!     text_column("name", "Name"),
//!     money_column("amount", "Amount"),
//!     actions_column(vec![ActionDescriptor::edit(), ActionDescriptor::delete()]),
//! ];
//! ```

use leptos::prelude::*;
use std::sync::Arc;

use super::actions::ActionDescriptor;
use super::column::{Accessor, Align, ColumnDef, ColumnKind, Header, HeaderContext, TableRecord};
use super::state::SortDirection;
use super::value::CellValue;
use crate::shared::format::format_money;

pub const ACTIONS_COLUMN_ID: &str = "actions";

/// Индикатор сортировки для заголовка
pub fn sort_indicator(sort: Option<SortDirection>) -> &'static str {
    match sort {
        Some(SortDirection::Ascending) => " ▲",
        Some(SortDirection::Descending) => " ▼",
        None => " ⇅",
    }
}

pub fn sort_class(sort: Option<SortDirection>) -> &'static str {
    if sort.is_some() {
        "table__sort-indicator table__sort-indicator--active"
    } else {
        "table__sort-indicator"
    }
}

/// Header that shows the title with a sort indicator and asks the table to
/// toggle sorting on click. Reads nothing but the context it is given.
pub fn sortable_header(title: impl Into<String>) -> Header {
    let title = title.into();
    Header::Custom {
        title,
        render: Arc::new(|ctx: HeaderContext| {
            let HeaderContext {
                column_id,
                title,
                sortable,
                sort,
                align,
                on_toggle,
            } = ctx;
            if !sortable {
                return view! { <span>{title}</span> }.into_any();
            }
            let style = match align {
                Align::Right => "cursor: pointer; justify-content: flex-end;",
                Align::Left => "cursor: pointer;",
            };
            view! {
                <div
                    class="table__sortable-header"
                    style=style
                    on:click=move |_| on_toggle.run(column_id.clone())
                >
                    {title}
                    <span class=sort_class(sort)>{sort_indicator(sort)}</span>
                </div>
            }
            .into_any()
        }),
    }
}

fn data_column<T: TableRecord>(id: &str, title: &str, accessor: Accessor<T>) -> ColumnDef<T> {
    ColumnDef::new(
        id,
        sortable_header(title),
        ColumnKind::Data {
            accessor,
            sortable: true,
            filterable: true,
            cell: None,
        },
    )
}

/// Column bound to a field key of the record
pub fn text_column<T: TableRecord>(key: &'static str, title: &str) -> ColumnDef<T> {
    data_column(key, title, Accessor::Field(key))
}

pub fn number_column<T: TableRecord>(key: &'static str, title: &str) -> ColumnDef<T> {
    data_column(key, title, Accessor::Field(key)).align(Align::Right)
}

/// Number shown with two decimals and thousands separators
pub fn money_column<T: TableRecord>(key: &'static str, title: &str) -> ColumnDef<T> {
    number_column(key, title).cell(|value, _| {
        let text = match value {
            CellValue::Number(n) => format_money(*n),
            CellValue::Integer(i) => format_money(*i as f64),
            other => other.display_text(),
        };
        view! { <span class="table__cell--money">{text}</span> }.into_any()
    })
}

pub fn date_column<T: TableRecord>(key: &'static str, title: &str) -> ColumnDef<T> {
    data_column(key, title, Accessor::Field(key))
}

/// Column whose value is computed from the whole row
pub fn derived_column<T, F>(id: &str, title: &str, f: F) -> ColumnDef<T>
where
    T: TableRecord,
    F: Fn(&T) -> CellValue + Send + Sync + 'static,
{
    data_column(id, title, Accessor::derived(f))
}

/// Display-only column: not sortable, not searchable
pub fn display_column<T, F>(id: &str, title: &str, render: F) -> ColumnDef<T>
where
    T: TableRecord,
    F: Fn(&T) -> AnyView + Send + Sync + 'static,
{
    ColumnDef::new(
        id,
        Header::Plain(title.to_string()),
        ColumnKind::Display {
            render: Arc::new(render),
        },
    )
}

/// Actions column bound to the row's `id` field
pub fn actions_column<T: TableRecord>(actions: Vec<ActionDescriptor<T>>) -> ColumnDef<T> {
    ColumnDef::new(
        ACTIONS_COLUMN_ID,
        Header::Plain(String::new()),
        ColumnKind::Actions {
            id_accessor: Accessor::Field("id"),
            actions,
        },
    )
    .min_width(60.0)
}

/// Badge cell for enum-like values
pub fn badge_cell<T>(variant: impl Fn(&T) -> &'static str + Send + Sync + 'static) -> impl Fn(&CellValue, &T) -> AnyView + Send + Sync + 'static {
    move |value, row| {
        let class = format!("badge badge--{}", variant(row));
        view! { <span class=class>{value.display_text()}</span> }.into_any()
    }
}

/// Enum-like column: sorts and searches by label, renders as a badge
pub fn badge_column<T, L, V>(id: &str, title: &str, label: L, variant: V) -> ColumnDef<T>
where
    T: TableRecord,
    L: Fn(&T) -> &'static str + Send + Sync + 'static,
    V: Fn(&T) -> &'static str + Send + Sync + 'static,
{
    derived_column(id, title, move |row| label(row).into()).cell(badge_cell(variant))
}

/// Keys of the actions a column list offers, in order
#[cfg(test)]
pub(crate) fn action_keys<T>(columns: &[ColumnDef<T>]) -> Vec<String> {
    columns
        .iter()
        .filter_map(|col| match &col.kind {
            ColumnKind::Actions { actions, .. } => Some(actions.iter().map(|a| a.key.clone())),
            _ => None,
        })
        .flatten()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row;

    impl TableRecord for Row {
        fn field(&self, _key: &str) -> Option<CellValue> {
            None
        }
    }

    #[test]
    fn test_sort_indicator() {
        assert_eq!(sort_indicator(Some(SortDirection::Ascending)), " ▲");
        assert_eq!(sort_indicator(Some(SortDirection::Descending)), " ▼");
        assert_eq!(sort_indicator(None), " ⇅");
    }

    #[test]
    fn test_actions_column_is_neither_sorted_nor_searched() {
        let col: ColumnDef<Row> = actions_column(vec![ActionDescriptor::delete()]);
        assert_eq!(col.id, ACTIONS_COLUMN_ID);
        assert!(!col.is_sortable());
        assert!(!col.is_filterable());
    }

    #[test]
    fn test_display_column_excluded_from_search_and_sort() {
        let col: ColumnDef<Row> = display_column("avatar", "", |_| ().into_any());
        assert!(!col.is_sortable());
        assert!(!col.is_filterable());
    }
}
