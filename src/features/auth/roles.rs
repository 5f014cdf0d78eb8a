//! Role normalization. The identity provider describes roles with its own
//! record shape and seeds every realm with internal bookkeeping roles; both
//! must stay behind this module. The rest of the application sees only
//! [`RoleName`]s, so swapping providers touches nothing but this file and the
//! provider client.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Normalized, provider-agnostic permission label.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleName(String);

impl RoleName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoleName {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

impl From<&str> for RoleName {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

/// Provider-native role description, camelCase on the wire.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub composite: bool,
    #[serde(default)]
    pub client_role: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container_id: Option<String>,
}

/// Realm-internal roles the provider attaches to every account. These never
/// reach the application's role model.
const BUILTIN_ROLES: [&str; 3] = ["offline_access", "uma_authorization", "create-realm"];

/// The provider also assigns a per-realm composite named after the realm.
const BUILTIN_ROLE_PREFIX: &str = "default-roles-";

/// True for provider bookkeeping roles that must be stripped.
pub fn is_builtin(name: &str) -> bool {
    BUILTIN_ROLES.contains(&name) || name.starts_with(BUILTIN_ROLE_PREFIX)
}

/// Maps provider role records to application role names, dropping builtin
/// roles. Sorted case-insensitively so display order is stable regardless of
/// provider ordering.
pub fn normalize(records: &[RoleRecord]) -> Vec<RoleName> {
    let mut names: Vec<RoleName> = records
        .iter()
        .filter(|record| !is_builtin(&record.name))
        .map(|record| RoleName::new(record.name.clone()))
        .collect();

    names.sort_by(|a, b| a.as_str().to_lowercase().cmp(&b.as_str().to_lowercase()));
    names.dedup();
    names
}

#[cfg(test)]
pub(crate) fn record(name: &str) -> RoleRecord {
    RoleRecord {
        id: Some(format!("id-{name}")),
        name: name.to_string(),
        description: None,
        composite: false,
        client_role: false,
        container_id: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_provider_builtin_roles() {
        let records = vec![
            record("offline_access"),
            record("uma_authorization"),
            record("default-roles-master"),
            record("create-realm"),
            record("Admin"),
        ];

        assert_eq!(normalize(&records), vec![RoleName::from("Admin")]);
    }

    #[test]
    fn normalize_sorts_for_stable_display() {
        let records = vec![record("Manager"), record("admin"), record("Support")];

        let names = normalize(&records);
        assert_eq!(
            names,
            vec![
                RoleName::from("admin"),
                RoleName::from("Manager"),
                RoleName::from("Support"),
            ]
        );
    }

    #[test]
    fn normalize_drops_duplicates() {
        let records = vec![record("Admin"), record("Admin")];
        assert_eq!(normalize(&records), vec![RoleName::from("Admin")]);
    }

    #[test]
    fn role_record_decodes_provider_camel_case() {
        let raw = r#"{
            "id": "2f1c",
            "name": "Admin",
            "description": "Console access",
            "composite": false,
            "clientRole": false,
            "containerId": "master"
        }"#;

        let record: RoleRecord = serde_json::from_str(raw).expect("Failed to decode");
        assert_eq!(record.name, "Admin");
        assert!(!record.client_role);
        assert_eq!(record.container_id.as_deref(), Some("master"));
    }
}
