use leptos::ev;
use leptos::prelude::*;

use super::state::{ComboboxFields, ComboboxState, Dropdown};
use crate::shared::icons::icon;

/// Searchable single select over any item type.
///
/// Reports the whole item through `on_change` (`None` on clear). Knows
/// nothing about what the items mean.
#[component]
pub fn Combobox<U>(
    #[prop(into)] items: Signal<Vec<U>>,
    #[prop(into)] value: Signal<Option<U>>,
    on_change: Callback<Option<U>>,
    fields: ComboboxFields<U>,
    #[prop(into, optional)] placeholder: Option<String>,
    #[prop(into, optional)] disabled: MaybeProp<bool>,
    /// Show the clear button when something is selected
    #[prop(optional, default = true)]
    clearable: bool,
) -> impl IntoView
where
    U: Clone + Send + Sync + 'static,
{
    let state = RwSignal::new(ComboboxState::default());
    let fields = StoredValue::new(fields);
    let is_disabled = Signal::derive(move || disabled.get().unwrap_or(false));
    let placeholder = placeholder.unwrap_or_else(|| "Select...".to_string());

    // Disabling while open must not leave a stale query behind
    Effect::new(move |_| {
        if is_disabled.get() {
            state.update(|s| s.close());
        }
    });

    let dropdown = Memo::new(move |_| {
        let disabled = is_disabled.get();
        state.with(|s| items.with(|list| fields.with_value(|f| s.dropdown(list, f, disabled))))
    });

    let input_text = move || {
        state.with(|s| value.with(|selected| fields.with_value(|f| s.input_text(selected.as_ref(), f))))
    };

    let choose = move |idx: usize| {
        let picked = items.with_untracked(|list| list.get(idx).cloned());
        if let Some(item) = picked {
            let reported = state.try_update(|s| s.select(&item)).flatten();
            on_change.run(reported);
        }
    };

    let clear = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        if is_disabled.get_untracked() {
            return;
        }
        let reported = state.try_update(|s| s.clear::<U>()).flatten();
        on_change.run(reported);
    };

    let on_keydown = move |ev: ev::KeyboardEvent| match ev.key().as_str() {
        "Escape" => state.update(|s| s.close()),
        "Enter" => {
            ev.prevent_default();
            if let Dropdown::Options(found) = dropdown.get_untracked() {
                if let Some(&first) = found.first() {
                    choose(first);
                }
            }
        }
        "ArrowDown" => state.update(|s| s.open(is_disabled.get_untracked())),
        _ => {}
    };

    let options = move || match dropdown.get() {
        Dropdown::Hidden => ().into_any(),
        Dropdown::Empty => view! { <div class="combobox__list combobox__list--empty"></div> }.into_any(),
        Dropdown::NothingFound => view! {
            <div class="combobox__list">
                <div class="combobox__nothing">"Nothing found"</div>
            </div>
        }
        .into_any(),
        Dropdown::Options(found) => {
            let selected_value =
                value.with(|v| v.as_ref().map(|item| fields.with_value(|f| f.value(item))));
            let rows = items.with(|list| {
                found
                    .iter()
                    .filter_map(|&idx| list.get(idx).map(|item| (idx, item)))
                    .map(|(idx, item)| {
                        let (label, item_value) =
                            fields.with_value(|f| (f.display(item), f.value(item)));
                        let class = if selected_value.as_deref() == Some(item_value.as_str()) {
                            "combobox__option combobox__option--selected"
                        } else {
                            "combobox__option"
                        };
                        view! {
                            <li
                                class=class
                                role="option"
                                // mousedown fires before the input blurs
                                on:mousedown=move |ev| {
                                    ev.prevent_default();
                                    choose(idx);
                                }
                            >
                                {label}
                            </li>
                        }
                    })
                    .collect_view()
            });
            view! { <ul class="combobox__list" role="listbox">{rows}</ul> }.into_any()
        }
    };

    view! {
        <div class=move || {
            if is_disabled.get() { "combobox combobox--disabled" } else { "combobox" }
        }>
            <div class="combobox__control">
                <input
                    class="combobox__input"
                    type="text"
                    role="combobox"
                    autocomplete="off"
                    placeholder=placeholder
                    disabled=move || is_disabled.get()
                    prop:value=input_text
                    on:input=move |ev| {
                        let text = event_target_value(&ev);
                        state.update(|s| {
                            s.set_query(text, is_disabled.get_untracked());
                        });
                    }
                    on:focus=move |_| state.update(|s| s.open(is_disabled.get_untracked()))
                    on:blur=move |_| state.update(|s| s.close())
                    on:keydown=on_keydown
                />
                <Show when=move || clearable && !is_disabled.get() && value.with(|v| v.is_some())>
                    <button class="combobox__clear" title="Clear" tabindex="-1" on:mousedown=clear>
                        {icon("x")}
                    </button>
                </Show>
                <Show when=move || !is_disabled.get()>
                    <button
                        class="combobox__toggle"
                        tabindex="-1"
                        on:mousedown=move |ev| {
                            ev.prevent_default();
                            state.update(|s| s.toggle(is_disabled.get_untracked()));
                        }
                    >
                        {icon("chevron-down")}
                    </button>
                </Show>
            </div>
            {options}
        </div>
    }
}
