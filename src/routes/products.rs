//! Console product management: searchable, paged listing with create, edit,
//! and delete. Mutations bump the refresh signal so the listing re-fetches
//! exactly once per change.

use crate::app_lib::theme::Theme;
use crate::app_lib::{AppError, RefreshSignal, use_fetch};
use crate::components::{Alert, AlertKind, AppShell, Button, ConsoleLayout, Spinner};
use crate::features::auth::Protected;
use crate::features::products::client;
use crate::features::products::types::{Product, ProductDraft};
use leptos::prelude::*;

#[derive(Clone, PartialEq)]
enum Editor {
    Closed,
    Create,
    Edit(Product),
}

#[component]
pub fn ProductsPage() -> impl IntoView {
    let (search, set_search) = signal(String::new());
    let (page, set_page) = signal(1u64);
    let refresh = RefreshSignal::new();
    let (notice, set_notice) = signal::<Option<AppError>>(None);
    let editor = RwSignal::new(Editor::Closed);

    let products = use_fetch(
        move || (search.get(), page.get(), refresh.generation()),
        |(search, page, _), signal| client::list_products(search, page, signal),
    );

    let delete_action = Action::new_local(move |id: &String| {
        let id = id.clone();
        async move { client::delete_product(&id).await }
    });

    Effect::new(move |_| {
        if let Some(result) = delete_action.value().get() {
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
                        <div class="flex items-center justify-between gap-4">
                            <div class="space-y-1">
                                <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                                    "Products"
                                </h1>
                                <p class="text-sm text-gray-500 dark:text-gray-400">
                                    "Manage the catalog across all markets."
                                </p>
                            </div>
                            <Button on_click=Callback::new(move |_| editor.set(Editor::Create))>
                                "New Product"
                            </Button>
                        </div>

                        <input
                            type="search"
                            class=Theme::INPUT
                            style="max-width: 20rem"
                            placeholder="Search by name"
                            on:input=move |event| {
                                set_search.set(event_target_value(&event));
                                set_page.set(1);
                            }
                        />

                        {move || {
                            notice.get().map(|err| {
                                view! { <Alert kind=AlertKind::Error message=err.to_string() /> }
                            })
                        }}

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
                                        "No products found."
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
                                                        <th scope="col" class=Theme::TH>"Name"</th>
                                                        <th scope="col" class=Theme::TH>"Price"</th>
                                                        <th scope="col" class=Theme::TH>"Category"</th>
                                                        <th scope="col" class=Theme::TH>"Stock"</th>
                                                        <th scope="col" class="px-6 py-3 text-right text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">
                                                            "Actions"
                                                        </th>
                                                    </tr>
                                                </thead>
                                                <tbody class="divide-y divide-gray-200 dark:divide-gray-700">
                                                    <For
                                                        each=move || page_data.products.clone()
                                                        key=|product| product.id.clone()
                                                        children=move |product| {
                                                            let edit_product = product.clone();
                                                            let delete_id = product.id.clone();
                                                            view! {
                                                                <tr class="hover:bg-gray-50 dark:hover:bg-gray-700/50 transition-colors">
                                                                    <td class=Theme::TD_PRIMARY>{product.name.clone()}</td>
                                                                    <td class=Theme::TD>{format!("${:.2}", product.price)}</td>
                                                                    <td class=Theme::TD>
                                                                        {product.category.clone().unwrap_or_else(|| "-".to_string())}
                                                                    </td>
                                                                    <td class=Theme::TD>{product.count_in_stock}</td>
                                                                    <td class="px-6 py-4 whitespace-nowrap text-right text-sm font-medium space-x-3">
                                                                        <button
                                                                            class=Theme::LINK
                                                                            on:click=move |_| editor.set(Editor::Edit(edit_product.clone()))
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

                        <ProductFormModal
                            editor=editor
                            on_saved=Callback::new(move |_| refresh.trigger())
                        />
                    </div>
                </ConsoleLayout>
            </Protected>
        </AppShell>
    }
}

/// Parses the free-text form fields into a draft, rejecting bad numbers
/// before any network call.
fn parse_draft(
    name: String,
    price_text: String,
    stock_text: String,
    category: String,
    brand: String,
    description: String,
) -> Result<ProductDraft, AppError> {
    let price = price_text
        .trim()
        .parse::<f64>()
        .map_err(|_| AppError::Validation("Price must be a number.".to_string()))?;
    let count_in_stock = if stock_text.trim().is_empty() {
        0
    } else {
        stock_text
            .trim()
            .parse::<i64>()
            .map_err(|_| AppError::Validation("Stock must be a whole number.".to_string()))?
    };

    let optional = |value: String| {
        let trimmed = value.trim().to_string();
        if trimmed.is_empty() { None } else { Some(trimmed) }
    };

    Ok(ProductDraft {
        name: name.trim().to_string(),
        description: description.trim().to_string(),
        price,
        image: None,
        category: optional(category),
        brand: optional(brand),
        count_in_stock,
    })
}

#[component]
fn ProductFormModal(editor: RwSignal<Editor>, on_saved: Callback<()>) -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (price, set_price) = signal(String::new());
    let (stock, set_stock) = signal(String::new());
    let (category, set_category) = signal(String::new());
    let (brand, set_brand) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (error, set_error) = signal::<Option<AppError>>(None);

    // Re-seed the form whenever the editor target changes.
    Effect::new(move |_| match editor.get() {
        Editor::Closed => {}
        Editor::Create => {
            set_name.set(String::new());
            set_price.set(String::new());
            set_stock.set(String::new());
            set_category.set(String::new());
            set_brand.set(String::new());
            set_description.set(String::new());
            set_error.set(None);
        }
        Editor::Edit(product) => {
            set_name.set(product.name);
            set_price.set(format!("{:.2}", product.price));
            set_stock.set(product.count_in_stock.to_string());
            set_category.set(product.category.unwrap_or_default());
            set_brand.set(product.brand.unwrap_or_default());
            set_description.set(product.description);
            set_error.set(None);
        }
    });

    let save_action = Action::new_local(move |input: &(Option<String>, ProductDraft)| {
        let (id, draft) = input.clone();
        async move {
            match id {
                Some(id) => client::update_product(&id, &draft).await.map(|_| ()),
                None => client::create_product(&draft).await.map(|_| ()),
            }
        }
    });

    Effect::new(move |_| {
        if let Some(result) = save_action.value().get() {
            match result {
                Ok(()) => {
                    editor.set(Editor::Closed);
                    on_saved.run(());
                }
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    let on_submit = move |event: leptos::ev::SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        let draft = match parse_draft(
            name.get_untracked(),
            price.get_untracked(),
            stock.get_untracked(),
            category.get_untracked(),
            brand.get_untracked(),
            description.get_untracked(),
        ) {
            Ok(draft) => draft,
            Err(err) => {
                set_error.set(Some(err));
                return;
            }
        };

        let id = match editor.get_untracked() {
            Editor::Edit(product) => Some(product.id),
            _ => None,
        };
        save_action.dispatch((id, draft));
    };

    view! {
        <Show when=move || editor.get() != Editor::Closed>
            <div class="fixed inset-0 z-50 flex items-center justify-center p-4 bg-black/50 backdrop-blur-sm">
                <div class="bg-white dark:bg-gray-800 rounded-xl shadow-xl border border-gray-200 dark:border-gray-700 w-full max-w-md overflow-hidden">
                    <div class="px-6 py-4 border-b border-gray-100 dark:border-gray-700 flex items-center justify-between">
                        <h2 class="text-lg font-semibold text-gray-900 dark:text-white">
                            {move || match editor.get() {
                                Editor::Edit(_) => "Edit Product",
                                _ => "Create Product",
                            }}
                        </h2>
                        <button
                            on:click=move |_| editor.set(Editor::Closed)
                            class="text-gray-400 hover:text-gray-600 dark:hover:text-gray-200"
                        >
                            "✕"
                        </button>
                    </div>

                    <form on:submit=on_submit class="p-6 space-y-4">
                        <div>
                            <label class=Theme::LABEL>"Name"</label>
                            <input
                                type="text"
                                required
                                class=Theme::INPUT
                                prop:value=move || name.get()
                                on:input=move |event| set_name.set(event_target_value(&event))
                            />
                        </div>
                        <div class="grid grid-cols-2 gap-4">
                            <div>
                                <label class=Theme::LABEL>"Price"</label>
                                <input
                                    type="text"
                                    required
                                    class=Theme::INPUT
                                    placeholder="19.90"
                                    prop:value=move || price.get()
                                    on:input=move |event| set_price.set(event_target_value(&event))
                                />
                            </div>
                            <div>
                                <label class=Theme::LABEL>"Stock"</label>
                                <input
                                    type="text"
                                    class=Theme::INPUT
                                    placeholder="0"
                                    prop:value=move || stock.get()
                                    on:input=move |event| set_stock.set(event_target_value(&event))
                                />
                            </div>
                        </div>
                        <div class="grid grid-cols-2 gap-4">
                            <div>
                                <label class=Theme::LABEL>"Category"</label>
                                <input
                                    type="text"
                                    class=Theme::INPUT
                                    prop:value=move || category.get()
                                    on:input=move |event| set_category.set(event_target_value(&event))
                                />
                            </div>
                            <div>
                                <label class=Theme::LABEL>"Brand"</label>
                                <input
                                    type="text"
                                    class=Theme::INPUT
                                    prop:value=move || brand.get()
                                    on:input=move |event| set_brand.set(event_target_value(&event))
                                />
                            </div>
                        </div>
                        <div>
                            <label class=Theme::LABEL>"Description"</label>
                            <textarea
                                class=Theme::INPUT
                                prop:value=move || description.get()
                                on:input=move |event| set_description.set(event_target_value(&event))
                            ></textarea>
                        </div>

                        <Show when=move || error.get().is_some()>
                            <Alert
                                kind=AlertKind::Error
                                message=error.get().map(|err| err.to_string()).unwrap_or_default()
                            />
                        </Show>

                        <div class="pt-4 flex justify-end gap-3">
                            <button
                                type="button"
                                on:click=move |_| editor.set(Editor::Closed)
                                class="px-5 py-2.5 text-sm font-medium text-gray-700 bg-white border border-gray-300 rounded-lg hover:bg-gray-50 dark:bg-gray-800 dark:text-gray-300 dark:border-gray-600 dark:hover:bg-gray-700"
                            >
                                "Cancel"
                            </button>
                            <Button button_type="submit" disabled=save_action.pending()>
                                {move || if save_action.pending().get() { "Saving..." } else { "Save" }}
                            </Button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::parse_draft;
    use crate::app_lib::AppError;

    fn draft(price: &str, stock: &str) -> Result<super::ProductDraft, AppError> {
        parse_draft(
            "Lamp".to_string(),
            price.to_string(),
            stock.to_string(),
            "Lighting".to_string(),
            String::new(),
            String::new(),
        )
    }

    #[test]
    fn parse_draft_accepts_numeric_fields() {
        let parsed = draft("19.90", "4").expect("valid draft");
        assert_eq!(parsed.price, 19.90);
        assert_eq!(parsed.count_in_stock, 4);
        assert_eq!(parsed.category.as_deref(), Some("Lighting"));
        assert_eq!(parsed.brand, None);
    }

    #[test]
    fn parse_draft_defaults_empty_stock() {
        let parsed = draft("5", "").expect("valid draft");
        assert_eq!(parsed.count_in_stock, 0);
    }

    #[test]
    fn parse_draft_rejects_malformed_numbers() {
        assert!(matches!(draft("abc", "1"), Err(AppError::Validation(_))));
        assert!(matches!(draft("5", "many"), Err(AppError::Validation(_))));
    }
}
