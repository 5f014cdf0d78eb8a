//! Reactive auth state shared through Leptos context. The provider hydrates
//! the session from persisted storage once on mount and subscribes to
//! cross-context storage changes; guards, layouts, and routes consume the
//! derived signals. All writes go through the session store so the in-memory
//! and persisted layers never diverge.

use crate::features::auth::session::{self, Identity};
use leptos::prelude::*;

#[derive(Clone, Copy)]
/// Auth session context shared through Leptos.
pub struct AuthContext {
    session: RwSignal<Option<Identity>>,
    pub is_authenticated: Signal<bool>,
}

impl AuthContext {
    /// Builds a context around the provided session signal.
    fn new(session: RwSignal<Option<Identity>>) -> Self {
        let is_authenticated = Signal::derive(move || session.get().is_some());
        Self {
            session,
            is_authenticated,
        }
    }

    /// Reactive read of the current identity.
    pub fn identity(&self) -> Option<Identity> {
        self.session.get()
    }

    /// Establishes a session after login.
    pub fn set_session(&self, identity: Identity) {
        session::write(&identity);
        self.session.set(Some(identity));
    }

    /// Destroys the session, typically on logout or an invalid token.
    pub fn clear_session(&self) {
        session::clear();
        self.session.set(None);
    }

    /// Re-reads persisted state after a cross-context notification. The
    /// notification payload is never trusted; storage is the authority.
    pub fn refresh_from_storage(&self) {
        self.session.set(session::refresh_from_storage());
    }
}

/// Provides auth context, hydrated from persisted storage, and wires up the
/// cross-context storage listener.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let session_signal = RwSignal::new(session::read());
    let auth = AuthContext::new(session_signal);
    provide_context(auth);

    register_storage_listener(auth);

    view! { {children()} }
}

#[cfg(target_arch = "wasm32")]
fn register_storage_listener(auth: AuthContext) {
    use gloo_events::EventListener;
    use wasm_bindgen::JsCast;

    let Some(window) = web_sys::window() else {
        return;
    };

    // Fires only in other browsing contexts; a null key means the whole
    // storage area was cleared.
    let listener = EventListener::new(&window, "storage", move |event| {
        let Some(event) = event.dyn_ref::<web_sys::StorageEvent>() else {
            return;
        };
        let key = event.key();
        if key.is_none() || key.as_deref() == Some(session::SESSION_KEY) {
            auth.refresh_from_storage();
        }
    });
    listener.forget();
}

#[cfg(not(target_arch = "wasm32"))]
fn register_storage_listener(_auth: AuthContext) {}

/// Returns the current auth context or a fallback empty context.
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| AuthContext::new(RwSignal::new(None)))
}
