//! Console shipping-rate management. The same form serves create and edit;
//! selecting a row seeds it.

use crate::app_lib::theme::Theme;
use crate::app_lib::{AppError, RefreshSignal, use_fetch};
use crate::components::{Alert, AlertKind, AppShell, Button, ConsoleLayout, Spinner};
use crate::features::auth::Protected;
use crate::features::shipping::client;
use crate::features::shipping::types::{ShippingRate, ShippingRateDraft};
use leptos::prelude::*;

/// Parses free-text rate fields into a draft before any network call.
fn parse_rate_draft(
    region: String,
    rate_text: String,
    days_text: String,
) -> Result<ShippingRateDraft, AppError> {
    let rate = rate_text
        .trim()
        .parse::<f64>()
        .map_err(|_| AppError::Validation("Rate must be a number.".to_string()))?;
    let estimated_days = if days_text.trim().is_empty() {
        0
    } else {
        days_text
            .trim()
            .parse::<u32>()
            .map_err(|_| AppError::Validation("Days must be a whole number.".to_string()))?
    };

    Ok(ShippingRateDraft {
        region: region.trim().to_string(),
        rate,
        estimated_days,
    })
}

#[component]
pub fn ShippingRatesPage() -> impl IntoView {
    let refresh = RefreshSignal::new();
    let (editing, set_editing) = signal::<Option<String>>(None);
    let (region, set_region) = signal(String::new());
    let (rate_text, set_rate_text) = signal(String::new());
    let (days_text, set_days_text) = signal(String::new());
    let (error, set_error) = signal::<Option<AppError>>(None);

    let rates = use_fetch(
        move || refresh.generation(),
        |_, signal| client::list_rates(signal),
    );

    let save_action = Action::new_local(move |input: &(Option<String>, ShippingRateDraft)| {
        let (id, draft) = input.clone();
        async move {
            match id {
                Some(id) => client::update_rate(&id, &draft).await.map(|_| ()),
                None => client::create_rate(&draft).await.map(|_| ()),
            }
        }
    });

    let delete_action = Action::new_local(move |id: &String| {
        let id = id.clone();
        async move { client::delete_rate(&id).await }
    });

    let clear_form = move || {
        set_editing.set(None);
        set_region.set(String::new());
        set_rate_text.set(String::new());
        set_days_text.set(String::new());
    };

    Effect::new(move |_| {
        if let Some(result) = save_action.value().get() {
            match result {
                Ok(()) => {
                    set_error.set(None);
                    clear_form();
                    refresh.trigger();
                }
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    Effect::new(move |_| {
        if let Some(result) = delete_action.value().get() {
            match result {
                Ok(()) => refresh.trigger(),
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    let seed_form = move |rate: ShippingRate| {
        set_editing.set(Some(rate.id));
        set_region.set(rate.region);
        set_rate_text.set(format!("{:.2}", rate.rate));
        set_days_text.set(rate.estimated_days.to_string());
        set_error.set(None);
    };

    let on_submit = move |event: leptos::ev::SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        match parse_rate_draft(
            region.get_untracked(),
            rate_text.get_untracked(),
            days_text.get_untracked(),
        ) {
            Ok(draft) => {
                save_action.dispatch((editing.get_untracked(), draft));
            }
            Err(err) => set_error.set(Some(err)),
        }
    };

    view! {
        <AppShell>
            <Protected>
                <ConsoleLayout>
                    <div class="space-y-6">
                        <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                            "Shipping Rates"
                        </h1>

                        <form class="flex flex-wrap items-end gap-3" on:submit=on_submit>
                            <div>
                                <label class=Theme::LABEL for="region">"Region"</label>
                                <input
                                    id="region"
                                    type="text"
                                    class=Theme::INPUT
                                    prop:value=move || region.get()
                                    on:input=move |event| set_region.set(event_target_value(&event))
                                />
                            </div>
                            <div>
                                <label class=Theme::LABEL for="rate">"Rate"</label>
                                <input
                                    id="rate"
                                    type="text"
                                    class=Theme::INPUT
                                    placeholder="4.50"
                                    prop:value=move || rate_text.get()
                                    on:input=move |event| set_rate_text.set(event_target_value(&event))
                                />
                            </div>
                            <div>
                                <label class=Theme::LABEL for="days">"Estimated days"</label>
                                <input
                                    id="days"
                                    type="text"
                                    class=Theme::INPUT
                                    placeholder="3"
                                    prop:value=move || days_text.get()
                                    on:input=move |event| set_days_text.set(event_target_value(&event))
                                />
                            </div>
                            <Button button_type="submit" disabled=save_action.pending()>
                                {move || if editing.get().is_some() { "Update" } else { "Add" }}
                            </Button>
                            <Show when=move || editing.get().is_some()>
                                <button
                                    type="button"
                                    class="text-sm text-gray-500 hover:text-gray-700 dark:hover:text-gray-300"
                                    on:click=move |_| clear_form()
                                >
                                    "Cancel edit"
                                </button>
                            </Show>
                        </form>

                        {move || {
                            error.get().map(|err| {
                                view! { <Alert kind=AlertKind::Error message=err.to_string() /> }
                            })
                        }}

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
                                        "No shipping rates configured."
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
                                                    <th scope="col" class="px-6 py-3 text-right text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">
                                                        "Actions"
                                                    </th>
                                                </tr>
                                            </thead>
                                            <tbody class="divide-y divide-gray-200 dark:divide-gray-700">
                                                <For
                                                    each=move || list.clone()
                                                    key=|rate| rate.id.clone()
                                                    children=move |rate| {
                                                        let edit_rate = rate.clone();
                                                        let delete_id = rate.id.clone();
                                                        view! {
                                                            <tr class="hover:bg-gray-50 dark:hover:bg-gray-700/50 transition-colors">
                                                                <td class=Theme::TD_PRIMARY>{rate.region.clone()}</td>
                                                                <td class=Theme::TD>{format!("${:.2}", rate.rate)}</td>
                                                                <td class=Theme::TD>{rate.estimated_days}</td>
                                                                <td class="px-6 py-4 whitespace-nowrap text-right text-sm font-medium space-x-3">
                                                                    <button
                                                                        class=Theme::LINK
                                                                        on:click=move |_| seed_form(edit_rate.clone())
                                                                    >
                                                                        "Edit"
                                                                    </button>
                                                                    <button
                                                                        class="text-red-600 hover:text-red-800 dark:text-red-400"
                                                                        on:click=move |_| {
                                                                            delete_action.dispatch(delete_id.clone());
                                                                        }
                                                                    >
                                                                        "Delete"
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

#[cfg(test)]
mod tests {
    use super::parse_rate_draft;
    use crate::app_lib::AppError;

    #[test]
    fn parse_rate_draft_accepts_numeric_fields() {
        let draft = parse_rate_draft("EU".to_string(), "4.50".to_string(), "3".to_string())
            .expect("valid draft");
        assert_eq!(draft.region, "EU");
        assert_eq!(draft.rate, 4.5);
        assert_eq!(draft.estimated_days, 3);
    }

    #[test]
    fn parse_rate_draft_rejects_malformed_numbers() {
        assert!(matches!(
            parse_rate_draft("EU".to_string(), "cheap".to_string(), "3".to_string()),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            parse_rate_draft("EU".to_string(), "4.5".to_string(), "soon".to_string()),
            Err(AppError::Validation(_))
        ));
    }
}
