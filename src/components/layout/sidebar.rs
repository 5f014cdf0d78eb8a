//! Console sidebar. Sections are filtered through the same access-policy
//! table the route guard uses, so a link never appears that the guard would
//! bounce.

use crate::features::auth::guards::{Access, evaluate};
use crate::features::auth::state::use_auth;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

struct Section {
    label: &'static str,
    href: &'static str,
}

const SECTIONS: [Section; 7] = [
    Section { label: "Products", href: "/admin/products" },
    Section { label: "Categories", href: "/admin/categories" },
    Section { label: "Brands", href: "/admin/brands" },
    Section { label: "Shipping", href: "/admin/shipping" },
    Section { label: "Orders", href: "/admin/orders" },
    Section { label: "Market Requests", href: "/admin/markets" },
    Section { label: "Staff", href: "/staff" },
];

#[component]
pub fn Sidebar() -> impl IntoView {
    let auth = use_auth();
    let pathname = use_location().pathname;

    view! {
        <aside class="w-56 shrink-0">
            <nav class="space-y-1">
                {SECTIONS
                    .iter()
                    .map(|section| {
                        let href = section.href;
                        let label = section.label;
                        let visible = Signal::derive(move || {
                            evaluate(auth.identity().as_ref(), href) == Access::Allowed
                        });
                        let class = Signal::derive(move || {
                            let path = pathname.get();
                            let current = path == href || path.starts_with(&format!("{href}/"));
                            if current {
                                "block rounded-lg px-3 py-2 text-sm font-medium text-gray-900 bg-gray-100 dark:text-white dark:bg-gray-700"
                            } else {
                                "block rounded-lg px-3 py-2 text-sm font-medium text-gray-700 hover:bg-gray-100 dark:text-gray-300 dark:hover:bg-gray-700"
                            }
                        });

                        view! {
                            <Show when=move || visible.get()>
                                <A
                                    href={href}
                                    {..}
                                    class=move || class.get()
                                >
                                    {label}
                                </A>
                            </Show>
                        }
                    })
                    .collect_view()}
            </nav>
        </aside>
    }
}

/// Two-column console layout: sidebar plus content.
#[component]
pub fn ConsoleLayout(children: Children) -> impl IntoView {
    view! {
        <div class="flex gap-8">
            <Sidebar />
            <div class="flex-1 min-w-0">{children()}</div>
        </div>
    }
}
