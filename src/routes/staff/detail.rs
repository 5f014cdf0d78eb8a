//! Staff detail route: account summary, realm role assignment, and password
//! reset. Role grants and revocations always go through the provider record
//! shape; display stays on normalized names.

use crate::app_lib::theme::Theme;
use crate::app_lib::{AppError, RefreshSignal, use_fetch};
use crate::components::{Alert, AlertKind, AppShell, Badge, Button, ConsoleLayout, Spinner};
use crate::features::auth::Protected;
use crate::features::auth::roles::{self, RoleRecord};
use crate::features::staff::client;
use crate::features::staff::types::{StaffAccount, StaffDraft};
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

#[derive(Clone)]
enum RoleChange {
    Grant(String, RoleRecord),
    Revoke(String, RoleRecord),
}

#[component]
pub fn StaffDetailPage() -> impl IntoView {
    let params = use_params_map();
    let id = Memo::new(move |_| params.with(|map| map.get("id").unwrap_or_default()));
    let navigate = use_navigate();
    let roles_refresh = RefreshSignal::new();
    let account_refresh = RefreshSignal::new();
    let (notice, set_notice) = signal::<Option<AppError>>(None);

    let account = use_fetch(
        move || (id.get(), account_refresh.generation()),
        |(id, _), signal| async move { client::get_staff(&id, signal).await },
    );

    let held_roles = use_fetch(
        move || (id.get(), roles_refresh.generation()),
        |(id, _), signal| client::user_realm_roles(id, signal),
    );

    let assignable = use_fetch(|| (), |(), signal| client::assignable_roles(signal));

    let role_action = Action::new_local(move |change: &RoleChange| {
        let change = change.clone();
        async move {
            match change {
                RoleChange::Grant(user_id, record) => {
                    client::grant_realm_roles(&user_id, std::slice::from_ref(&record)).await
                }
                RoleChange::Revoke(user_id, record) => {
                    client::revoke_realm_roles(&user_id, std::slice::from_ref(&record)).await
                }
            }
        }
    });

    Effect::new(move |_| {
        if let Some(result) = role_action.value().get() {
            match result {
                Ok(()) => {
                    set_notice.set(None);
                    roles_refresh.trigger();
                }
                Err(err) => set_notice.set(Some(err)),
            }
        }
    });

    // Flips the enabled flag by replaying the account through an update.
    let toggle_action = Action::new_local(move |current: &StaffAccount| {
        let current = current.clone();
        async move {
            let draft = StaffDraft {
                username: current.username.clone(),
                email: current.email.clone().unwrap_or_default(),
                first_name: current.first_name.clone(),
                last_name: current.last_name.clone(),
                enabled: !current.enabled,
            };
            client::update_staff(&current.id, &draft).await
        }
    });

    Effect::new(move |_| {
        if let Some(result) = toggle_action.value().get() {
            match result {
                Ok(()) => {
                    set_notice.set(None);
                    account_refresh.trigger();
                }
                Err(err) => set_notice.set(Some(err)),
            }
        }
    });

    let delete_action = Action::new_local(move |user_id: &String| {
        let user_id = user_id.clone();
        async move { client::delete_staff(&user_id).await }
    });

    Effect::new(move |_| {
        if let Some(result) = delete_action.value().get() {
            match result {
                Ok(()) => navigate("/staff", Default::default()),
                Err(err) => set_notice.set(Some(err)),
            }
        }
    });

    let (selected_role, set_selected_role) = signal(String::new());
    let on_grant = move |_| {
        let name = selected_role.get_untracked();
        if name.is_empty() {
            return;
        }
        let record = assignable
            .data
            .get_untracked()
            .and_then(|records| records.into_iter().find(|record| record.name == name));
        if let Some(record) = record {
            role_action.dispatch(RoleChange::Grant(id.get_untracked(), record));
        }
    };

    view! {
        <AppShell>
            <Protected>
                <ConsoleLayout>
                    <div class="space-y-8">
                        {move || {
                            notice.get().map(|err| {
                                view! { <Alert kind=AlertKind::Error message=err.to_string() /> }
                            })
                        }}

                        {move || {
                            if account.loading.get() {
                                return view! { <Spinner /> }.into_any();
                            }
                            if let Some(err) = account.error.get() {
                                return view! { <Alert kind=AlertKind::Error message=err.to_string() /> }
                                    .into_any();
                            }
                            match account.data.get() {
                                Some(staff) => {
                                    let delete_id = staff.id.clone();
                                    let toggle_account = staff.clone();
                                    let toggle_label = if staff.enabled { "Disable" } else { "Enable" };
                                    view! {
                                        <div class="flex items-start justify-between">
                                            <div class="space-y-1">
                                                <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                                                    {staff.display_name()}
                                                </h1>
                                                <p class="text-sm text-gray-500 dark:text-gray-400">
                                                    {staff.email.clone().unwrap_or_else(|| "-".to_string())}
                                                    {if staff.enabled { "" } else { " (disabled)" }}
                                                </p>
                                            </div>
                                            <div class="space-x-4">
                                                <button
                                                    class="text-gray-500 hover:text-gray-700 dark:text-gray-400 dark:hover:text-gray-200 text-sm font-medium"
                                                    on:click=move |_| {
                                                        toggle_action.dispatch(toggle_account.clone());
                                                    }
                                                >
                                                    {toggle_label}
                                                </button>
                                                <button
                                                    class="text-red-600 hover:text-red-800 dark:text-red-400 text-sm font-medium"
                                                    on:click=move |_| {
                                                        delete_action.dispatch(delete_id.clone());
                                                    }
                                                >
                                                    "Delete account"
                                                </button>
                                            </div>
                                        </div>
                                    }
                                    .into_any()
                                }
                                None => view! { <Spinner /> }.into_any(),
                            }
                        }}

                        <section class="space-y-3">
                            <h2 class="text-lg font-semibold text-gray-900 dark:text-white">
                                "Realm roles"
                            </h2>
                            {move || {
                                if held_roles.loading.get() {
                                    return view! { <Spinner /> }.into_any();
                                }
                                if let Some(err) = held_roles.error.get() {
                                    return view! { <Alert kind=AlertKind::Error message=err.to_string() /> }
                                        .into_any();
                                }
                                match held_roles.data.get() {
                                    Some(records) => {
                                        let visible: Vec<RoleRecord> = records
                                            .into_iter()
                                            .filter(|record| !roles::is_builtin(&record.name))
                                            .collect();
                                        if visible.is_empty() {
                                            view! {
                                                <p class="text-sm text-gray-500 dark:text-gray-400">
                                                    "No roles assigned."
                                                </p>
                                            }
                                            .into_any()
                                        } else {
                                            view! {
                                                <ul class="space-y-2">
                                                    <For
                                                        each=move || visible.clone()
                                                        key=|record| record.name.clone()
                                                        children=move |record| {
                                                            let revoke_record = record.clone();
                                                            view! {
                                                                <li class="flex items-center justify-between bg-gray-50 dark:bg-gray-900/50 p-3 rounded-lg border border-gray-200 dark:border-gray-700">
                                                                    <span>
                                                                        <Badge label=record.name.clone() />
                                                                        <span class="text-xs text-gray-500 dark:text-gray-400 ml-2">
                                                                            {record.description.clone().unwrap_or_default()}
                                                                        </span>
                                                                    </span>
                                                                    <button
                                                                        class="text-red-600 hover:text-red-800 dark:text-red-400 text-sm"
                                                                        on:click=move |_| {
                                                                            role_action.dispatch(RoleChange::Revoke(
                                                                                id.get_untracked(),
                                                                                revoke_record.clone(),
                                                                            ));
                                                                        }
                                                                    >
                                                                        "Remove"
                                                                    </button>
                                                                </li>
                                                            }
                                                        }
                                                    />
                                                </ul>
                                            }
                                            .into_any()
                                        }
                                    }
                                    None => view! { <Spinner /> }.into_any(),
                                }
                            }}

                            <div class="flex items-end gap-3">
                                <div class="flex-1 max-w-xs">
                                    <label class=Theme::LABEL for="role">"Grant role"</label>
                                    {move || match assignable.data.get() {
                                        Some(records) => view! {
                                            <select
                                                id="role"
                                                class=Theme::INPUT
                                                on:change=move |event| set_selected_role.set(event_target_value(&event))
                                            >
                                                <option value="">"Select a role"</option>
                                                <For
                                                    each=move || records.clone()
                                                    key=|record| record.name.clone()
                                                    children=|record| {
                                                        view! {
                                                            <option value=record.name.clone()>
                                                                {record.name.clone()}
                                                            </option>
                                                        }
                                                    }
                                                />
                                            </select>
                                        }
                                        .into_any(),
                                        None => view! { <Spinner /> }.into_any(),
                                    }}
                                </div>
                                <Button on_click=Callback::new(on_grant) disabled=role_action.pending()>
                                    "Grant"
                                </Button>
                            </div>
                        </section>

                        <PasswordResetSection id=id />
                    </div>
                </ConsoleLayout>
            </Protected>
        </AppShell>
    }
}

#[component]
fn PasswordResetSection(id: Memo<String>) -> impl IntoView {
    let (password, set_password) = signal(String::new());
    let (confirmation, set_confirmation) = signal(String::new());
    let (temporary, set_temporary) = signal(true);
    let (outcome, set_outcome) = signal::<Option<Result<(), AppError>>>(None);

    let reset_action = Action::new_local(
        move |input: &(String, String, String, bool)| {
            let (user_id, value, confirm, temporary) = input.clone();
            async move { client::reset_password(&user_id, &value, &confirm, temporary).await }
        },
    );

    Effect::new(move |_| {
        if let Some(result) = reset_action.value().get() {
            if result.is_ok() {
                set_password.set(String::new());
                set_confirmation.set(String::new());
            }
            set_outcome.set(Some(result));
        }
    });

    let on_submit = move |event: leptos::ev::SubmitEvent| {
        event.prevent_default();
        set_outcome.set(None);
        reset_action.dispatch((
            id.get_untracked(),
            password.get_untracked(),
            confirmation.get_untracked(),
            temporary.get_untracked(),
        ));
    };

    view! {
        <section class="space-y-3">
            <h2 class="text-lg font-semibold text-gray-900 dark:text-white">
                "Reset password"
            </h2>
            <form class="flex flex-wrap items-end gap-3" on:submit=on_submit>
                <div>
                    <label class=Theme::LABEL for="new-password">"New password"</label>
                    <input
                        id="new-password"
                        type="password"
                        class=Theme::INPUT
                        autocomplete="new-password"
                        prop:value=move || password.get()
                        on:input=move |event| set_password.set(event_target_value(&event))
                    />
                </div>
                <div>
                    <label class=Theme::LABEL for="confirm-password">"Confirm"</label>
                    <input
                        id="confirm-password"
                        type="password"
                        class=Theme::INPUT
                        autocomplete="new-password"
                        prop:value=move || confirmation.get()
                        on:input=move |event| set_confirmation.set(event_target_value(&event))
                    />
                </div>
                <label class="flex items-center gap-2 text-sm text-gray-700 dark:text-gray-300 pb-2">
                    <input
                        type="checkbox"
                        prop:checked=move || temporary.get()
                        on:change=move |event| set_temporary.set(event_target_checked(&event))
                    />
                    "Require change on next sign-in"
                </label>
                <Button button_type="submit" disabled=reset_action.pending()>
                    "Reset"
                </Button>
            </form>
            {move || {
                outcome.get().map(|result| match result {
                    Ok(()) => view! {
                        <Alert kind=AlertKind::Success message="Password updated.".to_string() />
                    },
                    Err(err) => view! {
                        <Alert kind=AlertKind::Error message=err.to_string() />
                    },
                })
            }}
        </section>
    }
}
