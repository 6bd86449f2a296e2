use leptos::prelude::*;

use super::column::{ColumnDef, TableRecord};
use super::component::cell_content;

/// One record laid out as label/value pairs, using the same column
/// definitions as its list. Action columns are skipped.
#[component]
pub fn RecordDetails<T>(row: T, columns: Vec<ColumnDef<T>>) -> impl IntoView
where
    T: TableRecord + Send + Sync + 'static,
{
    let fields = columns
        .iter()
        .filter_map(|col| {
            cell_content(col, &row).map(|content| {
                view! {
                    <div class="details__field">
                        <dt class="details__label">{col.title().to_string()}</dt>
                        <dd class="details__value">{content}</dd>
                    </div>
                }
            })
        })
        .collect_view();

    view! { <dl class="details">{fields}</dl> }
}
