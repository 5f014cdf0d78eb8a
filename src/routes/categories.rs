//! Console category management.

use crate::app_lib::theme::Theme;
use crate::app_lib::{AppError, RefreshSignal, use_fetch};
use crate::components::{Alert, AlertKind, AppShell, Button, ConsoleLayout, Spinner};
use crate::features::auth::Protected;
use crate::features::categories::client;
use crate::features::categories::types::CategoryDraft;
use leptos::prelude::*;

#[component]
pub fn CategoriesPage() -> impl IntoView {
    let refresh = RefreshSignal::new();
    let (name, set_name) = signal(String::new());
    let (error, set_error) = signal::<Option<AppError>>(None);

    let categories = use_fetch(
        move || refresh.generation(),
        |_, signal| client::list_categories(signal),
    );

    let create_action = Action::new_local(move |draft: &CategoryDraft| {
        let draft = draft.clone();
        async move { client::create_category(&draft).await }
    });

    let delete_action = Action::new_local(move |id: &String| {
        let id = id.clone();
        async move { client::delete_category(&id).await }
    });

    Effect::new(move |_| {
        if let Some(result) = create_action.value().get() {
            match result {
                Ok(_) => {
                    set_name.set(String::new());
                    set_error.set(None);
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

    let on_submit = move |event: leptos::ev::SubmitEvent| {
        event.prevent_default();
        let name_value = name.get_untracked().trim().to_string();
        if name_value.is_empty() {
            set_error.set(Some(AppError::Validation(
                "Category name is required.".to_string(),
            )));
            return;
        }
        create_action.dispatch(CategoryDraft {
            name: name_value,
            description: None,
        });
    };

    view! {
        <AppShell>
            <Protected>
                <ConsoleLayout>
                    <div class="space-y-6">
                        <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                            "Categories"
                        </h1>

                        <form class="flex items-end gap-3" on:submit=on_submit>
                            <div class="flex-1 max-w-xs">
                                <label class=Theme::LABEL for="category-name">"New category"</label>
                                <input
                                    id="category-name"
                                    type="text"
                                    class=Theme::INPUT
                                    prop:value=move || name.get()
                                    on:input=move |event| set_name.set(event_target_value(&event))
                                />
                            </div>
                            <Button button_type="submit" disabled=create_action.pending()>
                                "Add"
                            </Button>
                        </form>

                        {move || {
                            error.get().map(|err| {
                                view! { <Alert kind=AlertKind::Error message=err.to_string() /> }
                            })
                        }}

                        {move || {
                            if categories.loading.get() {
                                return view! { <Spinner /> }.into_any();
                            }
                            if let Some(err) = categories.error.get() {
                                return view! { <Alert kind=AlertKind::Error message=err.to_string() /> }
                                    .into_any();
                            }
                            match categories.data.get() {
                                Some(list) if list.is_empty() => view! {
                                    <p class="text-sm text-gray-500 dark:text-gray-400">
                                        "No categories yet."
                                    </p>
                                }
                                .into_any(),
                                Some(list) => view! {
                                    <ul class="space-y-2">
                                        <For
                                            each=move || list.clone()
                                            key=|category| category.id.clone()
                                            children=move |category| {
                                                let delete_id = category.id.clone();
                                                view! {
                                                    <li class="flex items-center justify-between bg-gray-50 dark:bg-gray-900/50 p-3 rounded-lg border border-gray-200 dark:border-gray-700">
                                                        <span class="text-sm font-medium text-gray-900 dark:text-white">
                                                            {category.name.clone()}
                                                        </span>
                                                        <button
                                                            class="text-red-600 hover:text-red-800 dark:text-red-400 text-sm"
                                                            on:click=move |_| {
                                                                delete_action.dispatch(delete_id.clone());
                                                            }
                                                        >
                                                            "Delete"
                                                        </button>
                                                    </li>
                                                }
                                            }
                                        />
                                    </ul>
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
