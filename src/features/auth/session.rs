//! Durable session state. The signed-in identity lives here and nowhere
//! else: an in-memory cache backed by browser storage under a single key,
//! mirrored into a cookie for the short-lived layer. Other browsing contexts
//! observe changes through the `storage` event and re-read persisted state
//! rather than trusting the event payload. Only the login, logout, and
//! refresh flows may write.

use crate::features::auth::roles::RoleName;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;

/// Storage key shared by the durable layer, the cookie mirror, and the
/// cross-context change notification.
pub const SESSION_KEY: &str = "mercato.identity";

/// The authenticated user's token and profile, as held by this client.
/// Immutable once constructed; login, refresh, and logout replace it
/// wholesale.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    pub id: String,
    pub email: String,
    pub display_name: String,
    pub token: String,
    pub roles: Vec<RoleName>,
    pub issued_at: u64,
}

impl Identity {
    pub fn has_role(&self, name: &str) -> bool {
        self.roles.iter().any(|role| role.as_str() == name)
    }
}

thread_local! {
    // Outer None: not yet loaded from persisted storage this session.
    static CACHE: RefCell<Option<Option<Identity>>> = const { RefCell::new(None) };
}

/// Current identity: in-memory cache first, then persisted storage. Corrupt
/// persisted data reads as absent.
pub fn read() -> Option<Identity> {
    if let Some(cached) = CACHE.with(|cache| cache.borrow().clone()) {
        return cached;
    }

    let loaded = backend::read(SESSION_KEY).and_then(|raw| decode(&raw));
    CACHE.with(|cache| *cache.borrow_mut() = Some(loaded.clone()));
    loaded
}

/// Persists the identity to every layer and primes the cache.
pub fn write(identity: &Identity) {
    match serde_json::to_string(identity) {
        Ok(json) => backend::write(SESSION_KEY, &json),
        Err(err) => log::error!("failed to encode session: {err}"),
    }
    CACHE.with(|cache| *cache.borrow_mut() = Some(Some(identity.clone())));
    log::debug!("session established for {}", identity.email);
}

/// Removes the identity from every layer.
pub fn clear() {
    backend::remove(SESSION_KEY);
    CACHE.with(|cache| *cache.borrow_mut() = Some(None));
    log::debug!("session cleared");
}

/// Re-reads persisted state, bypassing the cache. The storage-event listener
/// calls this so cross-context notifications never race the cache.
pub fn refresh_from_storage() -> Option<Identity> {
    let loaded = backend::read(SESSION_KEY).and_then(|raw| decode(&raw));
    CACHE.with(|cache| *cache.borrow_mut() = Some(loaded.clone()));
    loaded
}

fn decode(raw: &str) -> Option<Identity> {
    match serde_json::from_str(raw) {
        Ok(identity) => Some(identity),
        Err(err) => {
            log::warn!("discarding corrupt persisted session: {err}");
            None
        }
    }
}

/// Milliseconds since the epoch, for `Identity::issued_at`.
#[cfg(target_arch = "wasm32")]
pub(crate) fn now_millis() -> u64 {
    js_sys::Date::now() as u64
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn now_millis() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(target_arch = "wasm32")]
mod backend {
    //! Browser persistence: localStorage as the durable layer, a cookie as
    //! the short-lived mirror. Reads prefer localStorage and fall back to the
    //! cookie.

    use gloo_storage::Storage;
    use wasm_bindgen::JsCast;

    pub fn read(key: &str) -> Option<String> {
        let local = gloo_storage::LocalStorage::raw().get_item(key).ok().flatten();
        local.or_else(|| cookie_read(key))
    }

    pub fn write(key: &str, value: &str) {
        if let Err(err) = gloo_storage::LocalStorage::raw().set_item(key, value) {
            log::warn!("failed to persist session: {err:?}");
        }
        cookie_write(key, value);
    }

    pub fn remove(key: &str) {
        let _ = gloo_storage::LocalStorage::raw().remove_item(key);
        cookie_clear(key);
    }

    fn html_document() -> Option<web_sys::HtmlDocument> {
        web_sys::window()?
            .document()?
            .dyn_into::<web_sys::HtmlDocument>()
            .ok()
    }

    fn cookie_write(key: &str, value: &str) {
        if let Some(document) = html_document() {
            let cookie = format!(
                "{key}={}; path=/; max-age=86400; samesite=lax",
                urlencoding::encode(value)
            );
            let _ = document.set_cookie(&cookie);
        }
    }

    fn cookie_read(key: &str) -> Option<String> {
        let cookies = html_document()?.cookie().ok()?;
        let prefix = format!("{key}=");
        cookies
            .split("; ")
            .find_map(|part| part.strip_prefix(prefix.as_str()))
            .and_then(|raw| urlencoding::decode(raw).ok())
            .map(|decoded| decoded.into_owned())
    }

    fn cookie_clear(key: &str) {
        if let Some(document) = html_document() {
            let _ = document.set_cookie(&format!("{key}=; path=/; max-age=0"));
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod backend {
    //! In-process stand-in for browser storage so session semantics run under
    //! `cargo test` on the host.

    use std::cell::RefCell;
    use std::collections::HashMap;

    thread_local! {
        static STORAGE: RefCell<HashMap<String, String>> = RefCell::new(HashMap::new());
    }

    pub fn read(key: &str) -> Option<String> {
        STORAGE.with(|storage| storage.borrow().get(key).cloned())
    }

    pub fn write(key: &str, value: &str) {
        STORAGE.with(|storage| {
            storage.borrow_mut().insert(key.to_string(), value.to_string());
        });
    }

    pub fn remove(key: &str) {
        STORAGE.with(|storage| {
            storage.borrow_mut().remove(key);
        });
    }
}

/// Clears the cache and the backing storage between tests.
#[cfg(test)]
pub(crate) fn reset_for_tests() {
    CACHE.with(|cache| *cache.borrow_mut() = None);
    backend::remove(SESSION_KEY);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(email: &str) -> Identity {
        Identity {
            id: "7b6e".to_string(),
            email: email.to_string(),
            display_name: "Ada".to_string(),
            token: "tok-123".to_string(),
            roles: vec![RoleName::from("Admin")],
            issued_at: 1_700_000_000_000,
        }
    }

    fn drop_cache() {
        CACHE.with(|cache| *cache.borrow_mut() = None);
    }

    #[test]
    fn read_reflects_the_last_write() {
        reset_for_tests();
        assert_eq!(read(), None);

        let first = identity("ada@mercato.store");
        write(&first);
        assert_eq!(read(), Some(first));

        let second = identity("grace@mercato.store");
        write(&second);
        assert_eq!(read(), Some(second));

        clear();
        assert_eq!(read(), None);
    }

    #[test]
    fn read_survives_a_cold_cache() {
        reset_for_tests();
        let ada = identity("ada@mercato.store");
        write(&ada);

        drop_cache();
        assert_eq!(read(), Some(ada));
    }

    #[test]
    fn corrupt_persisted_session_reads_as_absent() {
        reset_for_tests();
        backend::write(SESSION_KEY, "{not json at all");

        assert_eq!(read(), None);

        // Still absent on a repeated read through the cache.
        assert_eq!(read(), None);
    }

    #[test]
    fn second_context_observes_changes_via_storage_refresh() {
        reset_for_tests();
        let ada = identity("ada@mercato.store");

        // Context A signs in; context B is notified and re-reads storage.
        write(&ada);
        assert_eq!(refresh_from_storage(), Some(ada.clone()));

        // Context A signs out; context B re-reads again.
        clear();
        assert_eq!(refresh_from_storage(), None);
    }

    #[test]
    fn has_role_matches_by_name() {
        let ada = identity("ada@mercato.store");
        assert!(ada.has_role("Admin"));
        assert!(!ada.has_role("Manager"));
    }
}
