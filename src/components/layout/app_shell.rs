//! Shared layout wrapper with navigation and content container. It
//! centralizes header markup so routes can focus on content. Navigation is
//! client-side convenience; the backend remains the authority on access.

use crate::app_lib::build_info;
use crate::features::auth::guards::{Access, evaluate};
use crate::features::auth::state::use_auth;
use leptos::prelude::*;
use leptos_router::components::A;

/// Wraps routes with a header, main content container, and footer.
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let auth = use_auth();
    let is_authenticated = auth.is_authenticated;

    // The console link only shows when the policy table would let the
    // identity through; the guard re-checks on navigation anyway.
    let shows_console = Signal::derive(move || {
        evaluate(auth.identity().as_ref(), "/admin") == Access::Allowed
    });

    // Clearing the session is enough; guards bounce the user off any
    // protected route they are still on.
    let on_sign_out = move |_| {
        auth.clear_session();
    };

    view! {
        <div class="min-h-screen flex flex-col">
            <header class="border-b border-gray-200 dark:border-gray-700 dark:bg-gray-900">
                <div class="max-w-screen-xl flex flex-wrap items-center justify-between mx-auto p-4">
                    <A
                        href="/"
                        {..}
                        class="flex items-center space-x-3"
                    >
                        <span class="font-semibold whitespace-nowrap text-lg dark:text-white">
                            "Mercato"
                        </span>
                    </A>
                    <nav>
                        <ul class="font-medium flex flex-row space-x-6 items-center">
                            <Show when=move || is_authenticated.get()>
                                <li>
                                    <A
                                        href="/user/orders"
                                        {..}
                                        class="block py-2 text-gray-900 hover:text-blue-700 dark:text-white dark:hover:text-blue-500"
                                    >
                                        "My Orders"
                                    </A>
                                </li>
                            </Show>
                            <Show when=move || shows_console.get()>
                                <li>
                                    <A
                                        href="/admin"
                                        {..}
                                        class="block py-2 text-gray-900 hover:text-blue-700 dark:text-white dark:hover:text-blue-500"
                                    >
                                        "Console"
                                    </A>
                                </li>
                            </Show>
                            <li>
                                <Show
                                    when=move || is_authenticated.get()
                                    fallback=move || {
                                        view! {
                                            <A
                                                href="/login"
                                                {..}
                                                class="block py-2 text-gray-900 hover:text-blue-700 dark:text-white dark:hover:text-blue-500"
                                            >
                                                "Sign In"
                                            </A>
                                        }
                                    }
                                >
                                    <button
                                        type="button"
                                        class="block py-2 text-gray-900 hover:text-blue-700 dark:text-white dark:hover:text-blue-500"
                                        on:click=on_sign_out
                                    >
                                        "Sign Out"
                                    </button>
                                </Show>
                            </li>
                        </ul>
                    </nav>
                </div>
            </header>
            <main class="flex-1">
                <div class="container mx-auto p-4 mt-6">
                    {children()}
                </div>
            </main>
            <footer class="border-t border-gray-200 dark:border-gray-700 py-4">
                <p class="text-center text-xs text-gray-400">
                    {format!(
                        "mercato-web {} ({})",
                        env!("CARGO_PKG_VERSION"),
                        build_info::git_commit_hash()
                    )}
                </p>
            </footer>
        </div>
    }
}
