use leptos::prelude::*;

/// Small colored pill for request and stock statuses.
#[component]
pub fn StatusBadge(status: String) -> impl IntoView {
    let class = badge_class(&status);

    view! {
        <span class=format!(
            "inline-flex items-center px-2.5 py-0.5 rounded-full text-xs font-medium {class}",
        )>{status}</span>
    }
}

fn badge_class(status: &str) -> &'static str {
    if status.contains("Fulfilled") || status.contains("In Stock") {
        "bg-emerald-100 text-emerald-800 dark:bg-emerald-900/40 dark:text-emerald-200"
    } else if status.contains("Transit") || status.contains("Low Stock") {
        "bg-amber-100 text-amber-800 dark:bg-amber-900/40 dark:text-amber-200"
    } else if status.contains("Production") || status.contains("Out of Stock") {
        "bg-red-100 text-red-800 dark:bg-red-900/40 dark:text-red-200"
    } else {
        "bg-blue-100 text-blue-800 dark:bg-blue-900/40 dark:text-blue-200"
    }
}
