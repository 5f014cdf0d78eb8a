//! Types for identity-provider staff accounts. Account records use the
//! provider's camelCase field names; everything role-shaped is normalized
//! before it leaves this feature.

use crate::features::auth::roles::RoleName;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffAccount {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub created_timestamp: Option<u64>,
}

impl StaffAccount {
    /// Human-readable name for lists, falling back to the username.
    pub fn display_name(&self) -> String {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => format!("{first} {last}"),
            (Some(first), None) => first.clone(),
            (None, Some(last)) => last.clone(),
            (None, None) => self.username.clone(),
        }
    }
}

/// A staff account enriched with its normalized realm roles.
#[derive(Clone, Debug, PartialEq)]
pub struct StaffMember {
    pub account: StaffAccount,
    pub roles: Vec<RoleName>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffDraft {
    pub username: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    pub enabled: bool,
}

/// Provider password-reset payload; `type` is always `password`.
#[derive(Clone, Debug, Serialize)]
pub struct CredentialReset {
    #[serde(rename = "type")]
    pub kind: String,
    pub value: String,
    pub temporary: bool,
}

impl CredentialReset {
    pub fn password(value: String, temporary: bool) -> Self {
        Self {
            kind: "password".to_string(),
            value,
            temporary,
        }
    }
}
