use contracts::domain::a003_staff::aggregate::Staff;
use leptos::prelude::*;

use crate::domain::a003_staff::api::fetch_staff;
use crate::shared::combobox::{find_by_value, Combobox, ComboboxFields};
use crate::shared::list_resource::ListResource;

/// "Name (position)" so namesakes can be told apart
fn staff_label(member: &Staff) -> String {
    format!("{} ({})", member.full_name(), member.position)
}

#[component]
pub fn StaffSelector(
    #[prop(into)] value: Signal<Option<String>>,
    on_change: Callback<Option<Staff>>,
    #[prop(into, optional)] disabled: MaybeProp<bool>,
) -> impl IntoView {
    let staff = ListResource::new("staff selector", fetch_staff);
    let fields = ComboboxFields::new(staff_label, |s: &Staff| s.id.clone());
    let selected = Signal::derive({
        let fields = fields.clone();
        move || staff.items.with(|list| value.with(|id| find_by_value(list, &fields, id.as_deref())))
    });

    view! {
        <Combobox
            items=staff.data()
            value=selected
            on_change=on_change
            fields=fields
            placeholder="Select staff member"
            disabled=disabled
        />
    }
}
