use crate::layout::global_context::use_global_context;
use crate::layout::sections::{visible_for, Section};
use crate::shared::icons::icon;
use crate::system::auth::CurrentActor;
use leptos::prelude::*;

/// Consecutive sections sharing a sidebar heading
fn grouped(sections: Vec<Section>) -> Vec<(&'static str, Vec<Section>)> {
    let mut groups: Vec<(&'static str, Vec<Section>)> = Vec::new();
    for section in sections {
        match groups.last_mut() {
            Some((group, items)) if *group == section.group() => items.push(section),
            _ => groups.push((section.group(), vec![section])),
        }
    }
    groups
}

#[component]
pub fn Navbar(#[prop(into)] actor: Signal<CurrentActor>) -> impl IntoView {
    let ctx = use_global_context();

    view! {
        <nav class="main-nav-bar">
            {move || {
                grouped(actor.with(visible_for))
                    .into_iter()
                    .map(|(group, items)| {
                        view! {
                            <div class="main-nav-bar__group">
                                <div class="main-nav-bar__heading">{group}</div>
                                <ul>
                                    {items
                                        .into_iter()
                                        .map(|section| {
                                            view! {
                                                <li
                                                    class="main-nav-bar__item"
                                                    class=(
                                                        "main-nav-bar__item--active",
                                                        move || ctx.active.get() == section,
                                                    )
                                                    on:click=move |_| ctx.open(section)
                                                >
                                                    {icon(section.icon())}
                                                    <span>{section.title()}</span>
                                                </li>
                                            }
                                        })
                                        .collect_view()}
                                </ul>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grouped_keeps_order() {
        let groups = grouped(vec![
            Section::Students,
            Section::Attendance,
            Section::Fees,
            Section::Salaries,
            Section::Users,
        ]);
        let headings: Vec<_> = groups.iter().map(|(g, _)| *g).collect();
        assert_eq!(headings, vec!["School", "Finance", "Administration"]);
        assert_eq!(groups[1].1, vec![Section::Fees, Section::Salaries]);
    }
}
