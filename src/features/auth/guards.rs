//! Route guarding. Each protected navigation is evaluated statelessly
//! against the access-policy table; a failing identity is redirected to the
//! login page with the original destination preserved as a query parameter.

use crate::features::auth::policy;
use crate::features::auth::session::Identity;
use crate::features::auth::state::use_auth;
use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

/// Guard outcome for one navigation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Access {
    Allowed,
    Redirecting(String),
}

/// Decides access for `path`. Public paths are always allowed; protected
/// paths require a satisfying identity or redirect to login.
pub fn evaluate(identity: Option<&Identity>, path: &str) -> Access {
    match policy::required_for(path) {
        None => Access::Allowed,
        Some(entry) if policy::is_authorized(identity, entry) => Access::Allowed,
        Some(_) => Access::Redirecting(login_redirect(path)),
    }
}

/// Login path carrying the originally requested destination, so post-login
/// navigation can restore it.
pub fn login_redirect(path: &str) -> String {
    format!("/login?redirect={}", urlencoding::encode(path))
}

/// Wraps a protected route. Re-evaluates on every navigation and on session
/// changes; the API remains the real authority, this guard is client UX.
#[component]
pub fn Protected(children: Children) -> impl IntoView {
    let auth = use_auth();
    let location = use_location();
    let navigate = use_navigate();

    Effect::new(move |_| {
        let path = location.pathname.get();
        if let Access::Redirecting(target) = evaluate(auth.identity().as_ref(), &path) {
            navigate(&target, Default::default());
        }
    });

    view! { {children()} }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::auth::roles::RoleName;

    fn identity_with(roles: &[&str]) -> Identity {
        Identity {
            id: "7b6e".to_string(),
            email: "ada@mercato.store".to_string(),
            display_name: "Ada".to_string(),
            token: "tok".to_string(),
            roles: roles.iter().map(|name| RoleName::from(*name)).collect(),
            issued_at: 0,
        }
    }

    #[test]
    fn anonymous_protected_navigation_redirects_with_destination() {
        assert_eq!(
            evaluate(None, "/user/orders"),
            Access::Redirecting("/login?redirect=%2Fuser%2Forders".to_string())
        );
    }

    #[test]
    fn public_paths_are_allowed_without_identity() {
        assert_eq!(evaluate(None, "/"), Access::Allowed);
        assert_eq!(evaluate(None, "/login"), Access::Allowed);
    }

    #[test]
    fn wrong_role_redirects_even_when_authenticated() {
        let shopper = identity_with(&[]);
        assert_eq!(
            evaluate(Some(&shopper), "/admin/orders"),
            Access::Redirecting("/login?redirect=%2Fadmin%2Forders".to_string())
        );
    }

    #[test]
    fn satisfying_identity_is_allowed_through() {
        let manager = identity_with(&["Manager"]);
        assert_eq!(evaluate(Some(&manager), "/admin/products"), Access::Allowed);
        assert_eq!(evaluate(Some(&manager), "/user/orders"), Access::Allowed);
    }
}
