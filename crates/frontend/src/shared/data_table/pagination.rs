use crate::shared::icons::icon;
use leptos::prelude::*;

/// Pagination bar under a `DataTable`: first/prev/next/last and page size.
#[component]
pub fn PaginationControls(
    /// Current page (0-indexed, already clamped)
    #[prop(into)]
    page_index: Signal<usize>,
    #[prop(into)] page_count: Signal<usize>,
    /// Rows after filtering
    #[prop(into)]
    row_count: Signal<usize>,
    #[prop(into)] page_size: Signal<usize>,
    on_page_change: Callback<usize>,
    on_page_size_change: Callback<usize>,
    page_size_options: Vec<usize>,
) -> impl IntoView {
    let at_start = move || page_index.get() == 0;
    let at_end = move || page_index.get() + 1 >= page_count.get();

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                title="First page"
                disabled=at_start
                on:click=move |_| on_page_change.run(0)
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                title="Previous page"
                disabled=at_start
                on:click=move |_| {
                    let page = page_index.get_untracked();
                    if page > 0 {
                        on_page_change.run(page - 1);
                    }
                }
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || {
                    format!(
                        "Page {} of {} ({} rows)",
                        page_index.get() + 1,
                        page_count.get().max(1),
                        row_count.get(),
                    )
                }}
            </span>
            <button
                class="pagination-btn"
                title="Next page"
                disabled=at_end
                on:click=move |_| {
                    let page = page_index.get_untracked();
                    if page + 1 < page_count.get_untracked() {
                        on_page_change.run(page + 1);
                    }
                }
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                title="Last page"
                disabled=at_end
                on:click=move |_| {
                    let count = page_count.get_untracked();
                    if count > 0 {
                        on_page_change.run(count - 1);
                    }
                }
            >
                {icon("chevrons-right")}
            </button>
            <select
                class="page-size-select"
                prop:value=move || page_size.get().to_string()
                on:change=move |ev| {
                    if let Ok(size) = event_target_value(&ev).parse::<usize>() {
                        on_page_size_change.run(size);
                    }
                }
            >
                {page_size_options
                    .into_iter()
                    .map(|size| {
                        view! {
                            <option value=size.to_string() selected=move || page_size.get() == size>
                                {format!("{} / page", size)}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}
