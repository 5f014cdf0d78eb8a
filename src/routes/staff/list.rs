//! Staff list route. Each row carries the account's normalized realm roles;
//! an account whose role lookup failed simply shows none.

use crate::app_lib::theme::Theme;
use crate::app_lib::{AppError, RefreshSignal, use_fetch};
use crate::components::{Alert, AlertKind, AppShell, Badge, Button, ConsoleLayout, Spinner};
use crate::features::auth::Protected;
use crate::features::staff::client;
use crate::features::staff::types::StaffDraft;
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn StaffListPage() -> impl IntoView {
    let refresh = RefreshSignal::new();
    let (username, set_username) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (error, set_error) = signal::<Option<AppError>>(None);

    let staff = use_fetch(
        move || refresh.generation(),
        |_, signal| client::list_staff(signal),
    );

    let create_action = Action::new_local(move |draft: &StaffDraft| {
        let draft = draft.clone();
        async move { client::create_staff(&draft).await }
    });

    Effect::new(move |_| {
        if let Some(result) = create_action.value().get() {
            match result {
                Ok(()) => {
                    set_username.set(String::new());
                    set_email.set(String::new());
                    set_error.set(None);
                    refresh.trigger();
                }
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    let on_submit = move |event: leptos::ev::SubmitEvent| {
        event.prevent_default();
        create_action.dispatch(StaffDraft {
            username: username.get_untracked().trim().to_string(),
            email: email.get_untracked().trim().to_string(),
            first_name: None,
            last_name: None,
            enabled: true,
        });
    };

    view! {
        <AppShell>
            <Protected>
                <ConsoleLayout>
                    <div class="space-y-6">
                        <div class="space-y-1">
                            <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                                "Staff"
                            </h1>
                            <p class="text-sm text-gray-500 dark:text-gray-400">
                                "Accounts and realm roles from the identity provider."
                            </p>
                        </div>

                        <form class="flex flex-wrap items-end gap-3" on:submit=on_submit>
                            <div>
                                <label class=Theme::LABEL for="username">"Username"</label>
                                <input
                                    id="username"
                                    type="text"
                                    class=Theme::INPUT
                                    prop:value=move || username.get()
                                    on:input=move |event| set_username.set(event_target_value(&event))
                                />
                            </div>
                            <div>
                                <label class=Theme::LABEL for="email">"Email"</label>
                                <input
                                    id="email"
                                    type="email"
                                    class=Theme::INPUT
                                    prop:value=move || email.get()
                                    on:input=move |event| set_email.set(event_target_value(&event))
                                />
                            </div>
                            <Button button_type="submit" disabled=create_action.pending()>
                                "Invite"
                            </Button>
                        </form>

                        {move || {
                            error.get().map(|err| {
                                view! { <Alert kind=AlertKind::Error message=err.to_string() /> }
                            })
                        }}

                        {move || {
                            if staff.loading.get() {
                                return view! { <Spinner /> }.into_any();
                            }
                            if let Some(err) = staff.error.get() {
                                return view! { <Alert kind=AlertKind::Error message=err.to_string() /> }
                                    .into_any();
                            }
                            match staff.data.get() {
                                Some(members) if members.is_empty() => view! {
                                    <p class="text-sm text-gray-500 dark:text-gray-400">
                                        "No staff accounts found."
                                    </p>
                                }
                                .into_any(),
                                Some(members) => view! {
                                    <div class=Theme::CARD>
                                        <table class="min-w-full divide-y divide-gray-200 dark:divide-gray-700">
                                            <thead class="bg-gray-50 dark:bg-gray-900/50">
                                                <tr>
                                                    <th scope="col" class=Theme::TH>"Username"</th>
                                                    <th scope="col" class=Theme::TH>"Email"</th>
                                                    <th scope="col" class=Theme::TH>"Roles"</th>
                                                    <th scope="col" class="px-6 py-3 text-right text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">
                                                        "Actions"
                                                    </th>
                                                </tr>
                                            </thead>
                                            <tbody class="divide-y divide-gray-200 dark:divide-gray-700">
                                                <For
                                                    each=move || members.clone()
                                                    key=|member| member.account.id.clone()
                                                    children=|member| {
                                                        let detail_href = paths::staff_detail(&member.account.id);
                                                        view! {
                                                            <tr class="hover:bg-gray-50 dark:hover:bg-gray-700/50 transition-colors">
                                                                <td class=Theme::TD_PRIMARY>
                                                                    <A
                                                                        href=detail_href.clone()
                                                                        {..}
                                                                        class=Theme::LINK
                                                                    >
                                                                        {member.account.username.clone()}
                                                                    </A>
                                                                </td>
                                                                <td class=Theme::TD>
                                                                    {member.account.email.clone().unwrap_or_else(|| "-".to_string())}
                                                                </td>
                                                                <td class=Theme::TD>
                                                                    {if member.roles.is_empty() {
                                                                        view! {
                                                                            <span class="text-xs text-gray-400">"none"</span>
                                                                        }
                                                                        .into_any()
                                                                    } else {
                                                                        member
                                                                            .roles
                                                                            .iter()
                                                                            .map(|role| view! { <Badge label=role.to_string() /> })
                                                                            .collect_view()
                                                                            .into_any()
                                                                    }}
                                                                </td>
                                                                <td class="px-6 py-4 whitespace-nowrap text-right text-sm font-medium">
                                                                    <A
                                                                        href={detail_href}
                                                                        {..}
                                                                        class=Theme::LINK
                                                                    >
                                                                        "Manage"
                                                                    </A>
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
