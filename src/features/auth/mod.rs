//! Auth feature: session persistence, token projection, role normalization,
//! access policies, and route guarding. This module owns every security
//! boundary on the client and must avoid logging secrets or token material.
//!
//! Flow overview: login exchanges credentials for a bearer token, resolves
//! the profile and realm roles, and stores the resulting identity in the
//! session store. Every authorized request projects the token back out of
//! that store; guards and navigation consult the access-policy table.

pub(crate) mod client;
pub(crate) mod guards;
pub(crate) mod policy;
pub(crate) mod roles;
pub(crate) mod session;
pub(crate) mod state;
pub(crate) mod token;
pub(crate) mod types;

pub(crate) use guards::Protected;
pub(crate) use state::{AuthProvider, use_auth};
