//! Storefront landing page. Shipping rates come from the public endpoint so
//! anonymous visitors see delivery options; the product browser appears once
//! a session exists.

use crate::app_lib::theme::Theme;
use crate::app_lib::use_fetch;
use crate::components::{Alert, AlertKind, AppShell, Spinner};
use crate::features::auth::state::use_auth;
use crate::features::products::client as products;
use crate::features::shipping::client as shipping;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = use_auth();
    let is_authenticated = auth.is_authenticated;

    let rates = use_fetch(
        || (),
        |(), signal| shipping::list_public_rates(signal),
    );

    view! {
        <AppShell>
            <div class="space-y-10">
                <section class="text-center py-8">
                    <h1 class="text-3xl font-semibold text-gray-900 dark:text-white">
                        "Welcome to Mercato"
                    </h1>
                    <p class="mt-2 text-sm text-gray-500 dark:text-gray-400">
                        "Markets from independent sellers, delivered to your region."
                    </p>
                    <Show when=move || !is_authenticated.get()>
                        <A href="/login" {..} class="mt-4 inline-block text-blue-600 hover:text-blue-800">
                            "Sign in to start shopping"
                        </A>
                    </Show>
                </section>

                <Show when=move || is_authenticated.get()>
                    <ProductBrowser />
                </Show>

                <section>
                    <h2 class="text-xl font-semibold text-gray-900 dark:text-white mb-4">
                        "Delivery regions"
                    </h2>
                    {move || {
                        if rates.loading.get() {
                            return view! { <Spinner /> }.into_any();
                        }
                        if let Some(err) = rates.error.get() {
                            return view! { <Alert kind=AlertKind::Error message=err.to_string() /> }
                                .into_any();
                        }
                        match rates.data.get() {
                            Some(list) if list.is_empty() => view! {
                                <p class="text-sm text-gray-500 dark:text-gray-400">
                                    "No delivery regions are configured yet."
                                </p>
                            }
                            .into_any(),
                            Some(list) => view! {
                                <div class=Theme::CARD>
                                    <table class="min-w-full divide-y divide-gray-200 dark:divide-gray-700">
                                        <thead class="bg-gray-50 dark:bg-gray-900/50">
                                            <tr>
                                                <th scope="col" class=Theme::TH>"Region"</th>
                                                <th scope="col" class=Theme::TH>"Rate"</th>
                                                <th scope="col" class=Theme::TH>"Estimated days"</th>
                                            </tr>
                                        </thead>
                                        <tbody class="divide-y divide-gray-200 dark:divide-gray-700">
                                            <For
                                                each=move || list.clone()
                                                key=|rate| rate.id.clone()
                                                children=|rate| {
                                                    view! {
                                                        <tr>
                                                            <td class=Theme::TD_PRIMARY>{rate.region}</td>
                                                            <td class=Theme::TD>{format!("${:.2}", rate.rate)}</td>
                                                            <td class=Theme::TD>{rate.estimated_days}</td>
                                                        </tr>
                                                    }
                                                }
                                            />
                                        </tbody>
                                    </table>
                                </div>
                            }
                            .into_any(),
                            None => view! { <Spinner /> }.into_any(),
                        }
                    }}
                </section>
            </div>
        </AppShell>
    }
}

/// Authenticated product browser with live search.
#[component]
fn ProductBrowser() -> impl IntoView {
    let (search, set_search) = signal(String::new());
    let (page, set_page) = signal(1u64);

    let products = use_fetch(
        move || (search.get(), page.get()),
        |(search, page), signal| products::list_products(search, page, signal),
    );

    view! {
        <section class="space-y-4">
            <div class="flex items-center justify-between gap-4">
                <h2 class="text-xl font-semibold text-gray-900 dark:text-white">
                    "Browse products"
                </h2>
                <input
                    type="search"
                    class=Theme::INPUT
                    style="max-width: 20rem"
                    placeholder="Search products"
                    on:input=move |event| {
                        set_search.set(event_target_value(&event));
                        set_page.set(1);
                    }
                />
            </div>

            {move || {
                if products.loading.get() {
                    return view! { <Spinner /> }.into_any();
                }
                if let Some(err) = products.error.get() {
                    return view! { <Alert kind=AlertKind::Error message=err.to_string() /> }
                        .into_any();
                }
                match products.data.get() {
                    Some(page_data) if page_data.products.is_empty() => view! {
                        <p class="text-sm text-gray-500 dark:text-gray-400">
                            "No products match your search."
                        </p>
                    }
                    .into_any(),
                    Some(page_data) => {
                        let pages = page_data.pages;
                        view! {
                            <div class="grid grid-cols-1 gap-4 sm:grid-cols-2 lg:grid-cols-4">
                                <For
                                    each=move || page_data.products.clone()
                                    key=|product| product.id.clone()
                                    children=|product| {
                                        view! {
                                            <div class="p-4 bg-white dark:bg-gray-800 rounded-lg border border-gray-200 dark:border-gray-700">
                                                <h3 class="font-medium text-gray-900 dark:text-white truncate">
                                                    {product.name}
                                                </h3>
                                                <p class="text-sm text-gray-500 dark:text-gray-400">
                                                    {product.brand.unwrap_or_default()}
                                                </p>
                                                <p class="mt-2 font-semibold text-gray-900 dark:text-white">
                                                    {format!("${:.2}", product.price)}
                                                </p>
                                            </div>
                                        }
                                    }
                                />
                            </div>
                            <div class="flex items-center gap-3 mt-4">
                                <button
                                    class=Theme::LINK
                                    disabled=move || page.get() <= 1
                                    on:click=move |_| set_page.update(|current| *current = current.saturating_sub(1).max(1))
                                >
                                    "Previous"
                                </button>
                                <span class="text-sm text-gray-500">
                                    {move || format!("Page {} of {}", page.get(), pages.max(1))}
                                </span>
                                <button
                                    class=Theme::LINK
                                    disabled=move || page.get() >= pages
                                    on:click=move |_| set_page.update(|current| *current += 1)
                                >
                                    "Next"
                                </button>
                            </div>
                        }
                        .into_any()
                    }
                    None => view! { <Spinner /> }.into_any(),
                }
            }}
        </section>
    }
}
