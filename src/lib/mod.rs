//! Shared frontend plumbing for API access, fetch lifecycle, configuration,
//! errors, and build metadata.
//!
//! ## Session & authorized fetch
//!
//! The session store (`features::auth::session`) is the single source of
//! truth for the signed-in identity. [`api`] projects the current bearer
//! token out of it for every authenticated request and refuses to touch the
//! network when no token is available. [`fetch`] binds requests to component
//! lifetimes: dependency changes supersede in-flight attempts, and only the
//! most recently issued attempt may publish its result.
//!
//! Centralizing these helpers keeps network behavior consistent and avoids
//! duplicated logic in routes and features. Callers must still avoid logging
//! token material.

pub(crate) mod api;
pub(crate) mod build_info;
pub(crate) mod config;
pub(crate) mod errors;
pub(crate) mod fetch;
pub(crate) mod theme;

pub(crate) use api::{ApiRequest, execute_empty, execute_json};
pub(crate) use errors::AppError;
pub(crate) use fetch::{RefreshSignal, use_fetch};
