//! The signed-in customer's own orders.

use crate::app_lib::theme::Theme;
use crate::app_lib::use_fetch;
use crate::components::{Alert, AlertKind, AppShell, Badge, Spinner};
use crate::features::auth::Protected;
use crate::features::orders::client;
use leptos::prelude::*;

#[component]
pub fn MyOrdersPage() -> impl IntoView {
    let orders = use_fetch(|| (), |(), signal| client::my_orders(signal));

    view! {
        <AppShell>
            <Protected>
                <div class="space-y-6">
                    <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                        "My Orders"
                    </h1>

                    {move || {
                        if orders.loading.get() {
                            return view! { <Spinner /> }.into_any();
                        }
                        if let Some(err) = orders.error.get() {
                            return view! { <Alert kind=AlertKind::Error message=err.to_string() /> }
                                .into_any();
                        }
                        match orders.data.get() {
                            Some(list) if list.is_empty() => view! {
                                <p class="text-sm text-gray-500 dark:text-gray-400">
                                    "You have not placed any orders yet."
                                </p>
                            }
                            .into_any(),
                            Some(list) => view! {
                                <div class=Theme::CARD>
                                    <table class="min-w-full divide-y divide-gray-200 dark:divide-gray-700">
                                        <thead class="bg-gray-50 dark:bg-gray-900/50">
                                            <tr>
                                                <th scope="col" class=Theme::TH>"Order"</th>
                                                <th scope="col" class=Theme::TH>"Placed"</th>
                                                <th scope="col" class=Theme::TH>"Items"</th>
                                                <th scope="col" class=Theme::TH>"Total"</th>
                                                <th scope="col" class=Theme::TH>"Status"</th>
                                            </tr>
                                        </thead>
                                        <tbody class="divide-y divide-gray-200 dark:divide-gray-700">
                                            <For
                                                each=move || list.clone()
                                                key=|order| order.id.clone()
                                                children=|order| {
                                                    view! {
                                                        <tr>
                                                            <td class=Theme::TD_PRIMARY>{order.id.clone()}</td>
                                                            <td class=Theme::TD>
                                                                {order.created_at.clone().unwrap_or_else(|| "-".to_string())}
                                                            </td>
                                                            <td class=Theme::TD>{order.items.len()}</td>
                                                            <td class=Theme::TD>{format!("${:.2}", order.total)}</td>
                                                            <td class=Theme::TD>
                                                                <Badge label=order.status.to_string() />
                                                            </td>
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
                </div>
            </Protected>
        </AppShell>
    }
}
