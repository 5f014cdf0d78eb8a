//! Login route. On success the assembled identity goes into the session
//! store and navigation returns to the originally requested destination, if
//! the guard preserved one.

use crate::app_lib::AppError;
use crate::app_lib::theme::Theme;
use crate::components::{Alert, AlertKind, AppShell, Button, Spinner};
use crate::features::auth::client;
use crate::features::auth::state::use_auth;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};

#[derive(Clone)]
struct LoginInput {
    email: String,
    password: String,
}

/// Resolves the post-login destination from the `redirect` query parameter.
/// Only same-app paths are honored.
fn restore_target(raw: Option<String>) -> String {
    match raw {
        Some(path) if path.starts_with('/') && !path.starts_with("//") => path,
        _ => "/".to_string(),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let query = use_query_map();
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<AppError>>(None);

    let login_action = Action::new_local(move |input: &LoginInput| {
        let input = input.clone();
        async move { client::login(&input.email, &input.password).await }
    });

    Effect::new(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(identity) => {
                    auth.set_session(identity);
                    let target = restore_target(query.with_untracked(|map| map.get("redirect")));
                    navigate(&target, Default::default());
                }
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        let email_value = email.get_untracked().trim().to_string();
        let password_value = password.get_untracked();
        if email_value.is_empty() || password_value.trim().is_empty() {
            set_error.set(Some(AppError::Validation(
                "Email and password are required.".to_string(),
            )));
            return;
        }

        login_action.dispatch(LoginInput {
            email: email_value,
            password: password_value,
        });
    };

    view! {
        <AppShell>
            <form class="max-w-sm mx-auto" on:submit=on_submit>
                <div class="mb-5">
                    <label class=Theme::LABEL for="email">
                        "Your email"
                    </label>
                    <input
                        id="email"
                        type="email"
                        class=Theme::INPUT
                        autocomplete="email"
                        placeholder="name@inbox.im"
                        required
                        on:input=move |event| set_email.set(event_target_value(&event))
                    />
                </div>
                <div class="mb-5">
                    <label class=Theme::LABEL for="password">
                        "Your password"
                    </label>
                    <input
                        id="password"
                        type="password"
                        class=Theme::INPUT
                        autocomplete="current-password"
                        required
                        on:input=move |event| set_password.set(event_target_value(&event))
                    />
                </div>
                <Button button_type="submit" disabled=login_action.pending()>
                    "Sign In"
                </Button>
                {move || {
                    login_action
                        .pending()
                        .get()
                        .then_some(view! { <div class="mt-4"><Spinner /></div> })
                }}
                {move || {
                    error
                        .get()
                        .map(|err| {
                            view! {
                                <div class="mt-4">
                                    <Alert kind=AlertKind::Error message=err.to_string() />
                                </div>
                            }
                        })
                }}
            </form>
        </AppShell>
    }
}

#[cfg(test)]
mod tests {
    use super::restore_target;

    #[test]
    fn restore_target_honors_preserved_paths() {
        assert_eq!(
            restore_target(Some("/user/orders".to_string())),
            "/user/orders"
        );
    }

    #[test]
    fn restore_target_defaults_home() {
        assert_eq!(restore_target(None), "/");
        assert_eq!(restore_target(Some(String::new())), "/");
    }

    #[test]
    fn restore_target_rejects_external_destinations() {
        assert_eq!(restore_target(Some("https://evil.example".to_string())), "/");
        assert_eq!(restore_target(Some("//evil.example".to_string())), "/");
    }
}
