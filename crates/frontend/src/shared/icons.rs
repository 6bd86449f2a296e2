use leptos::prelude::*;

/// Stroke icons (24×24 grid, lucide-style path data)
fn paths(name: &str) -> &'static [&'static str] {
    match name {
        "students" | "users" => &[
            "M17 21v-2a4 4 0 0 0-4-4H7a4 4 0 0 0-4 4v2",
            "M9 3a4 4 0 1 0 0 8a4 4 0 1 0 0-8z",
            "M23 21v-2a4 4 0 0 0-3-3.87",
            "M16 3.13a4 4 0 0 1 0 7.75",
        ],
        "teachers" => &["M22 10L12 5L2 10l10 5l10-5z", "M6 12v5c3 3 9 3 12 0v-5"],
        "staff" => &[
            "M4 7h16a2 2 0 0 1 2 2v10a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V9a2 2 0 0 1 2-2z",
            "M16 21V5a2 2 0 0 0-2-2h-4a2 2 0 0 0-2 2v16",
        ],
        "classes" => &["M12 2L2 7l10 5l10-5l-10-5z", "M2 17l10 5l10-5", "M2 12l10 5l10-5"],
        "subjects" => &[
            "M4 19.5A2.5 2.5 0 0 1 6.5 17H20",
            "M6.5 2H20v20H6.5A2.5 2.5 0 0 1 4 19.5v-15A2.5 2.5 0 0 1 6.5 2z",
        ],
        "attendance" => &[
            "M5 4h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
            "M16 2v4",
            "M8 2v4",
            "M3 10h18",
            "M9 16l2 2l4-4",
        ],
        "fees" => &[
            "M4 5h16a2 2 0 0 1 2 2v10a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V7a2 2 0 0 1 2-2z",
            "M12 9a3 3 0 1 0 0 6a3 3 0 1 0 0-6z",
            "M6 12h.01",
            "M18 12h.01",
        ],
        "salaries" => &[
            "M20 12V8H6a2 2 0 0 1-2-2c0-1.1.9-2 2-2h12v4",
            "M4 6v12c0 1.1.9 2 2 2h14v-4",
            "M18 12a2 2 0 0 0 0 4h4v-4z",
        ],
        "tenants" => &["M3 22h18", "M6 22V4h12v18", "M10 8h4", "M10 12h4", "M10 16h4"],
        "user" => &[
            "M20 21v-2a4 4 0 0 0-4-4H8a4 4 0 0 0-4 4v2",
            "M12 3a4 4 0 1 0 0 8a4 4 0 1 0 0-8z",
        ],
        "logout" => &["M9 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h4", "M16 17l5-5l-5-5", "M21 12H9"],
        "plus" => &["M12 5v14", "M5 12h14"],
        "refresh" => &[
            "M23 4v6h-6",
            "M1 20v-6h6",
            "M3.51 9a9 9 0 0 1 14.85-3.36L23 10",
            "M1 14l4.64 4.36A9 9 0 0 0 20.49 15",
        ],
        "edit" => &[
            "M11 4H4a2 2 0 0 0-2 2v14a2 2 0 0 0 2 2h14a2 2 0 0 0 2-2v-7",
            "M18.5 2.5a2.12 2.12 0 0 1 3 3L12 15l-4 1l1-4l9.5-9.5z",
        ],
        "delete" => &[
            "M3 6h18",
            "M19 6v14a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2V6",
            "M8 6V4a2 2 0 0 1 2-2h4a2 2 0 0 1 2 2v2",
        ],
        "check" => &["M20 6L9 17l-5-5"],
        "x" => &["M18 6L6 18", "M6 6l12 12"],
        "ban" => &["M12 2a10 10 0 1 0 0 20a10 10 0 1 0 0-20z", "M4.93 4.93l14.14 14.14"],
        "pay" => &["M12 1v22", "M17 5H9.5a3.5 3.5 0 0 0 0 7h5a3.5 3.5 0 0 1 0 7H6"],
        "search" => &["M11 3a8 8 0 1 0 0 16a8 8 0 1 0 0-16z", "M21 21l-4.35-4.35"],
        "chevron-left" => &["M15 18l-6-6l6-6"],
        "chevron-right" => &["M9 18l6-6l-6-6"],
        "chevrons-left" => &["M11 17l-5-5l5-5", "M18 17l-5-5l5-5"],
        "chevrons-right" => &["M13 17l5-5l-5-5", "M6 17l5-5l-5-5"],
        "chevron-down" => &["M6 9l6 6l6-6"],
        _ => &["M12 2a10 10 0 1 0 0 20a10 10 0 1 0 0-20z", "M12 8v4l3 3"],
    }
}

fn is_small(name: &str) -> bool {
    name.starts_with("chevron") || matches!(name, "x" | "check")
}

pub fn icon(name: &str) -> AnyView {
    let size = if is_small(name) { "16" } else { "20" };
    view! {
        <svg
            width=size
            height=size
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {paths(name).iter().map(|d| view! { <path d=*d /> }).collect_view()}
        </svg>
    }
    .into_any()
}
