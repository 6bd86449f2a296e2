use contracts::domain::a004_school_class::aggregate::SchoolClass;
use leptos::prelude::*;

use crate::domain::a004_school_class::api::fetch_classes;
use crate::shared::combobox::{find_by_value, Combobox, ComboboxFields};
use crate::shared::list_resource::ListResource;

pub fn class_fields() -> ComboboxFields<SchoolClass> {
    ComboboxFields::new(SchoolClass::display_name, |c: &SchoolClass| c.id.clone())
}

/// Class picker; the parent keeps only the selected id
#[component]
pub fn ClassSelector(
    #[prop(into)] value: Signal<Option<String>>,
    on_change: Callback<Option<SchoolClass>>,
    #[prop(into, optional)] disabled: MaybeProp<bool>,
    #[prop(into, optional)] placeholder: Option<String>,
) -> impl IntoView {
    let classes = ListResource::new("class selector", fetch_classes);
    let fields = class_fields();
    let selected = Signal::derive({
        let fields = fields.clone();
        move || classes.items.with(|list| value.with(|id| find_by_value(list, &fields, id.as_deref())))
    });

    view! {
        <Combobox
            items=classes.data()
            value=selected
            on_change=on_change
            fields=fields
            placeholder=placeholder.unwrap_or_else(|| "Select class".to_string())
            disabled=disabled
        />
    }
}
