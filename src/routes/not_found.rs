use crate::components::AppShell;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <AppShell>
            <div class="text-center py-16">
                <h1 class="text-3xl font-semibold text-gray-900 dark:text-white">
                    "Page not found"
                </h1>
                <p class="mt-2 text-sm text-gray-500 dark:text-gray-400">
                    "The page you are looking for does not exist."
                </p>
                <A href="/" {..} class="mt-6 inline-block text-blue-600 hover:text-blue-800">
                    "Back to the shop"
                </A>
            </div>
        </AppShell>
    }
}
