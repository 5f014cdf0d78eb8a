//! Small label chip, used for role names and order statuses.

use leptos::prelude::*;

#[component]
pub fn Badge(label: String) -> impl IntoView {
    view! {
        <span class="inline-flex items-center rounded-full bg-blue-50 px-2.5 py-0.5 text-xs font-medium text-blue-700 dark:bg-blue-900/30 dark:text-blue-200 mr-1">
            {label}
        </span>
    }
}
