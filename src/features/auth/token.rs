//! Bearer token projection. A pure view over the session store: no state of
//! its own, no network access.

use crate::features::auth::session;

/// The current bearer token, if a session exists.
pub fn current_token() -> Option<String> {
    session::read().map(|identity| identity.token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::auth::session::Identity;

    #[test]
    fn projects_the_session_token() {
        session::reset_for_tests();
        assert_eq!(current_token(), None);

        session::write(&Identity {
            id: "7b6e".to_string(),
            email: "ada@mercato.store".to_string(),
            display_name: "Ada".to_string(),
            token: "tok-123".to_string(),
            roles: Vec::new(),
            issued_at: 0,
        });

        assert_eq!(current_token(), Some("tok-123".to_string()));

        session::clear();
        assert_eq!(current_token(), None);
    }
}
