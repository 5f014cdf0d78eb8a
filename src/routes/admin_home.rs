//! Console landing page linking to the management sections.

use crate::components::{AppShell, ConsoleLayout};
use crate::features::auth::Protected;
use crate::features::auth::state::use_auth;
use leptos::prelude::*;

#[component]
pub fn ConsoleHomePage() -> impl IntoView {
    let auth = use_auth();
    let greeting = move || {
        auth.identity()
            .map(|identity| format!("Signed in as {}.", identity.display_name))
            .unwrap_or_default()
    };

    view! {
        <AppShell>
            <Protected>
                <ConsoleLayout>
                    <div class="space-y-6">
                        <div class="space-y-1">
                            <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                                "Console"
                            </h1>
                            <p class="text-sm text-gray-500 dark:text-gray-400">
                                {greeting}
                            </p>
                        </div>
                        <p class="text-sm text-gray-500 dark:text-gray-400">
                            "Pick a section from the sidebar to manage the platform."
                        </p>
                    </div>
                </ConsoleLayout>
            </Protected>
        </AppShell>
    }
}
