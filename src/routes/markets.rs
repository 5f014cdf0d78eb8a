//! Console review queue for market-list requests.

use crate::app_lib::theme::Theme;
use crate::app_lib::{AppError, RefreshSignal, use_fetch};
use crate::components::{Alert, AlertKind, AppShell, Badge, ConsoleLayout, Spinner};
use crate::features::auth::Protected;
use crate::features::markets::client;
use leptos::prelude::*;

#[derive(Clone)]
enum Review {
    Approve(String),
    Reject(String),
}

#[component]
pub fn MarketRequestsPage() -> impl IntoView {
    let refresh = RefreshSignal::new();
    let (notice, set_notice) = signal::<Option<AppError>>(None);

    let requests = use_fetch(
        move || refresh.generation(),
        |_, signal| client::list_requests(signal),
    );

    let review_action = Action::new_local(move |review: &Review| {
        let review = review.clone();
        async move {
            match review {
                Review::Approve(id) => client::approve_request(&id).await,
                Review::Reject(id) => client::reject_request(&id).await,
            }
        }
    });

    Effect::new(move |_| {
        if let Some(result) = review_action.value().get() {
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
                        <div class="space-y-1">
                            <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                                "Market Requests"
                            </h1>
                            <p class="text-sm text-gray-500 dark:text-gray-400">
                                "Sellers applying to open a market on the platform."
                            </p>
                        </div>

                        {move || {
                            notice.get().map(|err| {
                                view! { <Alert kind=AlertKind::Error message=err.to_string() /> }
                            })
                        }}

                        {move || {
                            if requests.loading.get() {
                                return view! { <Spinner /> }.into_any();
                            }
                            if let Some(err) = requests.error.get() {
                                return view! { <Alert kind=AlertKind::Error message=err.to_string() /> }
                                    .into_any();
                            }
                            match requests.data.get() {
                                Some(list) if list.is_empty() => view! {
                                    <p class="text-sm text-gray-500 dark:text-gray-400">
                                        "No pending requests."
                                    </p>
                                }
                                .into_any(),
                                Some(list) => view! {
                                    <div class=Theme::CARD>
                                        <table class="min-w-full divide-y divide-gray-200 dark:divide-gray-700">
                                            <thead class="bg-gray-50 dark:bg-gray-900/50">
                                                <tr>
                                                    <th scope="col" class=Theme::TH>"Market"</th>
                                                    <th scope="col" class=Theme::TH>"Owner"</th>
                                                    <th scope="col" class=Theme::TH>"Status"</th>
                                                    <th scope="col" class="px-6 py-3 text-right text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">
                                                        "Review"
                                                    </th>
                                                </tr>
                                            </thead>
                                            <tbody class="divide-y divide-gray-200 dark:divide-gray-700">
                                                <For
                                                    each=move || list.clone()
                                                    key=|request| request.id.clone()
                                                    children=move |request| {
                                                        let approve_id = request.id.clone();
                                                        let reject_id = request.id.clone();
                                                        view! {
                                                            <tr class="hover:bg-gray-50 dark:hover:bg-gray-700/50 transition-colors">
                                                                <td class=Theme::TD_PRIMARY>{request.name.clone()}</td>
                                                                <td class=Theme::TD>{request.owner_email.clone()}</td>
                                                                <td class=Theme::TD>
                                                                    <Badge label=request.status.clone() />
                                                                </td>
                                                                <td class="px-6 py-4 whitespace-nowrap text-right text-sm font-medium space-x-3">
                                                                    <button
                                                                        class="text-emerald-600 hover:text-emerald-800 dark:text-emerald-400"
                                                                        on:click=move |_| {
                                                                            review_action.dispatch(Review::Approve(approve_id.clone()));
                                                                        }
                                                                    >
                                                                        "Approve"
                                                                    </button>
                                                                    <button
                                                                        class="text-red-600 hover:text-red-800 dark:text-red-400"
                                                                        on:click=move |_| {
                                                                            review_action.dispatch(Review::Reject(reject_id.clone()));
                                                                        }
                                                                    >
                                                                        "Reject"
                                                                    </button>
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
                </ConsoleLayout>
            </Protected>
        </AppShell>
    }
}
