//! Checkout route. Shipping options come from the public endpoint; the
//! actual order placement lives on the backend and is out of client scope
//! beyond the request itself.

use crate::app_lib::theme::Theme;
use crate::app_lib::use_fetch;
use crate::components::{Alert, AlertKind, AppShell, Spinner};
use crate::features::auth::Protected;
use crate::features::shipping::client;
use leptos::prelude::*;

#[component]
pub fn CheckoutPage() -> impl IntoView {
    let rates = use_fetch(|| (), |(), signal| client::list_public_rates(signal));
    let (region, set_region) = signal(String::new());

    view! {
        <AppShell>
            <Protected>
                <div class="max-w-lg mx-auto space-y-6">
                    <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                        "Checkout"
                    </h1>

                    <div>
                        <label class=Theme::LABEL for="region">"Delivery region"</label>
                        {move || {
                            if rates.loading.get() {
                                return view! { <Spinner /> }.into_any();
                            }
                            if let Some(err) = rates.error.get() {
                                return view! { <Alert kind=AlertKind::Error message=err.to_string() /> }
                                    .into_any();
                            }
                            match rates.data.get() {
                                Some(list) => view! {
                                    <select
                                        id="region"
                                        class=Theme::INPUT
                                        on:change=move |event| set_region.set(event_target_value(&event))
                                    >
                                        <option value="">"Select a region"</option>
                                        <For
                                            each=move || list.clone()
                                            key=|rate| rate.id.clone()
                                            children=|rate| {
                                                view! {
                                                    <option value=rate.region.clone()>
                                                        {format!(
                                                            "{} (${:.2}, ~{} days)",
                                                            rate.region, rate.rate, rate.estimated_days
                                                        )}
                                                    </option>
                                                }
                                            }
                                        />
                                    </select>
                                }
                                .into_any(),
                                None => view! { <Spinner /> }.into_any(),
                            }
                        }}
                    </div>

                    {move || {
                        let selected = region.get();
                        (!selected.is_empty()).then(|| {
                            view! {
                                <Alert
                                    kind=AlertKind::Info
                                    message=format!("Delivering to {selected}.")
                                />
                            }
                        })
                    }}
                </div>
            </Protected>
        </AppShell>
    }
}
