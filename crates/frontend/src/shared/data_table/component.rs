//! Компонент `DataTable`: поиск, сортируемые заголовки, тело и пагинация.
//!
//! Всё состояние (сортировка, фильтр, страница) локальное; родитель передаёт
//! только данные, колонки и meta с колбэками.

use leptos::prelude::*;
use thaw::*;

use super::column::{sanitize_columns, ColumnDef, ColumnKind, Header, HeaderContext, TableRecord};
use super::meta::TableMeta;
use super::model::resolve_row_id;
use super::pagination::PaginationControls;
use super::pipeline::compute_view;
use super::state::TableState;
use crate::shared::config::AppConfig;
use crate::shared::icons::icon;

#[component]
pub fn DataTable<T>(
    /// Rows as currently held by the parent
    #[prop(into)]
    data: Signal<Vec<T>>,
    #[prop(into)] columns: Signal<Vec<ColumnDef<T>>>,
    /// Row callbacks; read at the moment an action fires
    #[prop(into, optional)]
    meta: Option<Signal<TableMeta<T>>>,
    #[prop(optional)] page_size: Option<usize>,
    #[prop(optional)] page_size_options: Option<Vec<usize>>,
    #[prop(optional, default = true)] show_search: bool,
    /// Field holding the row id; inferred when not set
    #[prop(optional)]
    id_field: Option<&'static str>,
    #[prop(into, optional)] empty_message: Option<String>,
    #[prop(into, optional)] search_placeholder: Option<String>,
) -> impl IntoView
where
    T: TableRecord + Clone + Send + Sync + 'static,
{
    let config = use_context::<AppConfig>().unwrap_or_default();
    let meta = meta.unwrap_or_else(|| Signal::stored(TableMeta::default()));
    let page_size_options = page_size_options.unwrap_or_else(|| config.page_size_options.clone());
    let empty_message = empty_message.unwrap_or_else(|| config.empty_message.clone());
    let search_placeholder = search_placeholder.unwrap_or_else(|| "Search...".to_string());

    let state = RwSignal::new(TableState::new(page_size.unwrap_or(config.page_size)));
    let columns = Signal::derive(move || sanitize_columns(columns.get()));

    let table_view = Memo::new(move |_| {
        data.with(|rows| columns.with(|cols| state.with(|s| compute_view(rows, cols, s))))
    });

    // Data may shrink (e.g. after a delete): keep the stored page in range
    Effect::new(move |_| {
        let page_count = table_view.with(|v| v.page_count);
        let out_of_range = state.with_untracked(|s| {
            s.pagination.clamped_index(page_count) != s.pagination.page_index
        });
        if out_of_range {
            state.update(|s| {
                s.clamp(page_count);
            });
        }
    });

    let search = RwSignal::new(String::new());
    Effect::new(move |_| {
        let text = search.get();
        if state.with_untracked(|s| s.global_filter != text) {
            state.update(|s| s.set_global_filter(text));
        }
    });

    let on_toggle = Callback::new(move |column_id: String| {
        state.update(|s| s.toggle_sort(&column_id));
    });

    let header_row = move || {
        columns.with(|cols| {
            cols.iter()
                .map(|col| {
                    let ctx = HeaderContext {
                        column_id: col.id.clone(),
                        title: col.title().to_string(),
                        sortable: col.is_sortable(),
                        sort: state.with(|s| s.sort_direction(&col.id)),
                        align: col.align,
                        on_toggle,
                    };
                    let content = match &col.header {
                        Header::Plain(title) => title.clone().into_any(),
                        Header::Custom { render, .. } => render(ctx),
                    };
                    view! {
                        <TableHeaderCell resizable=false min_width=col.min_width>
                            {content}
                        </TableHeaderCell>
                    }
                })
                .collect_view()
        })
    };

    let body = move || {
        let current = table_view.get();
        if current.is_empty() {
            let span = columns.with(|c| c.len().max(1)).to_string();
            let empty_message = empty_message.clone();
            return view! {
                <TableRow>
                    <TableCell attr:colspan=span>
                        <div class="table__empty">{empty_message}</div>
                    </TableCell>
                </TableRow>
            }
            .into_any();
        }

        data.with(|rows| {
            columns.with(|cols| {
                current
                    .rows
                    .iter()
                    .filter_map(|&idx| rows.get(idx).map(|row| (idx, row)))
                    .map(|(idx, row)| {
                        let cells = cols
                            .iter()
                            .map(|col| render_cell(col, row, idx, id_field, meta))
                            .collect_view();
                        view! { <TableRow>{cells}</TableRow> }
                    })
                    .collect_view()
                    .into_any()
            })
        })
    };

    view! {
        <div class="data-table">
            <Show when=move || show_search>
                <div class="data-table__toolbar">
                    <Input value=search placeholder=search_placeholder.clone() />
                </div>
            </Show>

            <div class="table-wrapper">
                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>{header_row}</TableRow>
                    </TableHeader>
                    <TableBody>{body}</TableBody>
                </Table>
            </div>

            <PaginationControls
                page_index=Signal::derive(move || table_view.with(|v| v.page_index))
                page_count=Signal::derive(move || table_view.with(|v| v.page_count))
                row_count=Signal::derive(move || table_view.with(|v| v.filtered_count))
                page_size=Signal::derive(move || state.with(|s| s.pagination.page_size))
                on_page_change=Callback::new(move |page: usize| state.update(|s| s.go_to_page(page)))
                on_page_size_change=Callback::new(move |size: usize| {
                    state.update(|s| s.set_page_size(size))
                })
                page_size_options=page_size_options
            />
        </div>
    }
}

fn render_cell<T>(
    col: &ColumnDef<T>,
    row: &T,
    position: usize,
    id_field: Option<&'static str>,
    meta: Signal<TableMeta<T>>,
) -> impl IntoView
where
    T: TableRecord + Clone + Send + Sync + 'static,
{
    let content = match &col.kind {
        ColumnKind::Actions { id_accessor, actions } => {
            let row_id = resolve_row_id(row, Some(id_accessor), id_field, position);
            // Visibility follows the meta of this render; the click re-reads it
            let controls = meta.with(|m| {
                actions
                    .iter()
                    .filter(|action| action.is_available(row, m))
                    .cloned()
                    .collect::<Vec<_>>()
            });
            controls
                .into_iter()
                .map(|action| {
                    let row = row.clone();
                    let row_id = row_id.clone();
                    let label = action.label.clone();
                    let face = match action.icon {
                        Some(name) => icon(name),
                        None => label.clone().into_any(),
                    };
                    view! {
                        <button
                            class=action.intent.css_class()
                            title=label
                            on:click=move |ev| {
                                ev.stop_propagation();
                                meta.with_untracked(|m| action.invoke(&row, &row_id, m));
                            }
                        >
                            {face}
                        </button>
                    }
                })
                .collect_view()
                .into_any()
        }
        _ => cell_content(col, row).unwrap_or_else(|| ().into_any()),
    };

    view! {
        <TableCell attr:style=col.align.as_style()>
            <TableCellLayout truncate=true>{content}</TableCellLayout>
        </TableCell>
    }
}

/// Rendered value of a data or display column; `None` for action columns
pub fn cell_content<T: TableRecord>(col: &ColumnDef<T>, row: &T) -> Option<AnyView> {
    match &col.kind {
        ColumnKind::Data { accessor, cell, .. } => {
            let value = accessor.read(row);
            Some(match cell {
                Some(render) => render(&value, row),
                None => value.display_text().into_any(),
            })
        }
        ColumnKind::Display { render } => Some(render(row)),
        ColumnKind::Actions { .. } => None,
    }
}
