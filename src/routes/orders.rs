//! Console order management: paged listing with status transitions.

use crate::app_lib::theme::Theme;
use crate::app_lib::{AppError, RefreshSignal, use_fetch};
use crate::components::{Alert, AlertKind, AppShell, Badge, ConsoleLayout, Spinner};
use crate::features::auth::Protected;
use crate::features::orders::client;
use crate::features::orders::types::OrderStatus;
use leptos::prelude::*;

#[component]
pub fn OrdersPage() -> impl IntoView {
    let (page, set_page) = signal(1u64);
    let refresh = RefreshSignal::new();
    let (notice, set_notice) = signal::<Option<AppError>>(None);

    let orders = use_fetch(
        move || (page.get(), refresh.generation()),
        |(page, _), signal| client::list_orders(page, signal),
    );

    let status_action = Action::new_local(move |input: &(String, OrderStatus)| {
        let (id, status) = input.clone();
        async move { client::update_status(&id, status).await }
    });

    Effect::new(move |_| {
        if let Some(result) = status_action.value().get() {
            match result {
                Ok(()) => {
                    set_notice.set(None);
                    refresh.trigger();
                }
                Err(err) => set_notice.set(Some(err)),
            }
        }
    });

    view! {
        <AppShell>
            <Protected>
                <ConsoleLayout>
                    <div class="space-y-6">
                        <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                            "Orders"
                        </h1>

                        {move || {
                            notice.get().map(|err| {
                                view! { <Alert kind=AlertKind::Error message=err.to_string() /> }
                            })
                        }}

                        {move || {
                            if orders.loading.get() {
                                return view! { <Spinner /> }.into_any();
                            }
                            if let Some(err) = orders.error.get() {
                                return view! { <Alert kind=AlertKind::Error message=err.to_string() /> }
                                    .into_any();
                            }
                            match orders.data.get() {
                                Some(page_data) if page_data.orders.is_empty() => view! {
                                    <p class="text-sm text-gray-500 dark:text-gray-400">
                                        "No orders on this page."
                                    </p>
                                }
                                .into_any(),
                                Some(page_data) => {
                                    let pages = page_data.pages;
                                    view! {
                                        <div class=Theme::CARD>
                                            <table class="min-w-full divide-y divide-gray-200 dark:divide-gray-700">
                                                <thead class="bg-gray-50 dark:bg-gray-900/50">
                                                    <tr>
                                                        <th scope="col" class=Theme::TH>"Order"</th>
                                                        <th scope="col" class=Theme::TH>"Customer"</th>
                                                        <th scope="col" class=Theme::TH>"Total"</th>
                                                        <th scope="col" class=Theme::TH>"Status"</th>
                                                        <th scope="col" class=Theme::TH>"Move to"</th>
                                                    </tr>
                                                </thead>
                                                <tbody class="divide-y divide-gray-200 dark:divide-gray-700">
                                                    <For
                                                        each=move || page_data.orders.clone()
                                                        key=|order| order.id.clone()
                                                        children=move |order| {
                                                            let status_id = order.id.clone();
                                                            view! {
                                                                <tr class="hover:bg-gray-50 dark:hover:bg-gray-700/50 transition-colors">
                                                                    <td class=Theme::TD_PRIMARY>{order.id.clone()}</td>
                                                                    <td class=Theme::TD>
                                                                        {order.email.clone().unwrap_or_else(|| "-".to_string())}
                                                                    </td>
                                                                    <td class=Theme::TD>{format!("${:.2}", order.total)}</td>
                                                                    <td class=Theme::TD>
                                                                        <Badge label=order.status.to_string() />
                                                                    </td>
                                                                    <td class=Theme::TD>
                                                                        <select
                                                                            class=Theme::INPUT
                                                                            on:change=move |event| {
                                                                                let value = event_target_value(&event);
                                                                                if let Some(status) = OrderStatus::ALL
                                                                                    .into_iter()
                                                                                    .find(|candidate| candidate.as_str() == value)
                                                                                {
                                                                                    status_action.dispatch((status_id.clone(), status));
                                                                                }
                                                                            }
                                                                        >
                                                                            <option value="">"Select status"</option>
                                                                            {OrderStatus::ALL
                                                                                .into_iter()
                                                                                .map(|status| {
                                                                                    view! {
                                                                                        <option value=status.as_str()>
                                                                                            {status.as_str()}
                                                                                        </option>
                                                                                    }
                                                                                })
                                                                                .collect_view()}
                                                                        </select>
                                                                    </td>
                                                                </tr>
                                                            }
                                                        }
                                                    />
                                                </tbody>
                                            </table>
                                        </div>
                                        <div class="flex items-center gap-3">
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
                    </div>
                </ConsoleLayout>
            </Protected>
        </AppShell>
    }
}
