//! Staff administration against the identity provider: accounts, credential
//! resets, and realm role mappings.

pub(crate) mod client;
pub(crate) mod types;
