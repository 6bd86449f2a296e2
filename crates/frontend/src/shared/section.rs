//! Общая обвязка экранов-списков: заголовок, баннер ошибки, запуск мутаций.

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::api_utils::ApiError;
use crate::shared::data_table::{ColumnDef, RecordDetails, TableRecord};
use crate::shared::icons::icon;
use crate::shared::modal_stack::ModalService;
use crate::shared::notify::Notifier;

/// Header with title, row count and refresh; `children` go into the action area
#[component]
pub fn SectionFrame(
    #[prop(into)] title: String,
    #[prop(into)] count: Signal<usize>,
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] error: Signal<Option<String>>,
    on_refresh: Callback<()>,
    /// Extra header actions, e.g. "Add"
    #[prop(optional, into)]
    actions: Option<ViewFn>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="page">
            <div class="page-header">
                <div class="page-header__content">
                    <h1 class="page-header__title">{title}</h1>
                    <div class="page-header__subtitle">
                        {move || {
                            if loading.get() { "Loading...".to_string() } else { format!("{} records", count.get()) }
                        }}
                    </div>
                </div>
                <div class="page-header__actions">
                    {actions.map(|a| a.run())}
                    <Button
                        appearance=ButtonAppearance::Secondary
                        disabled=Signal::derive(move || loading.get())
                        on_click=move |_| on_refresh.run(())
                    >
                        {icon("refresh")}
                        " Refresh"
                    </Button>
                </div>
            </div>

            {move || error.get().map(|err| view! { <div class="alert alert--error">{err}</div> })}

            <div class="page__content">{children()}</div>
        </div>
    }
}

/// Runs a server mutation, reports the outcome as a toast, then calls `on_done`
/// (typically a list reload) whether it succeeded or not.
pub fn run_mutation<Fut>(
    notify: Notifier,
    success: impl Into<String>,
    request: Fut,
    on_done: impl FnOnce() + 'static,
) where
    Fut: Future<Output = Result<(), ApiError>> + 'static,
{
    let success = success.into();
    spawn_local(async move {
        match request.await {
            Ok(()) => notify.success(success),
            Err(err) => notify.error(err.to_string()),
        }
        on_done();
    });
}

/// Opens one record in a modal, laid out with the columns of its list.
/// With `on_modify` the modal offers an "Edit" button that hands the row on.
pub fn open_details<T>(
    modals: ModalService,
    title: impl Into<String>,
    row: T,
    columns: Vec<ColumnDef<T>>,
    on_modify: Option<Callback<T>>,
) where
    T: TableRecord + Clone + Send + Sync + 'static,
{
    modals.open_wide(title, move |handle| {
        let footer = on_modify.map(|modify| {
            let row = row.clone();
            view! {
                <Flex justify=FlexJustify::End gap=FlexGap::Small>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| {
                            handle.close();
                            modify.run(row.clone());
                        }
                    >
                        {icon("edit")}
                        " Edit"
                    </Button>
                </Flex>
            }
        });
        view! {
            <RecordDetails row=row.clone() columns=columns.clone() />
            {footer}
        }
        .into_any()
    });
}

/// Asks for confirmation, deletes through `request`, then reloads
pub fn confirm_delete<F, Fut>(
    modals: ModalService,
    notify: Notifier,
    noun: &'static str,
    id: String,
    request: F,
    reload: impl Fn() + Send + Sync + 'static,
) where
    F: Fn(String) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<(), ApiError>> + 'static,
{
    let message = format!("Delete this {}? This cannot be undone.", noun);
    let reload = std::sync::Arc::new(reload);
    modals.confirm(format!("Delete {}", noun), message, move || {
        let reload = reload.clone();
        run_mutation(notify, format!("The {} was deleted", noun), request(id.clone()), move || {
            reload()
        });
    });
}
