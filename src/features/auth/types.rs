//! Request and response types for the identity-provider token and profile
//! endpoints. These payloads carry credentials and token material, so they
//! must never be logged.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize)]
pub struct TokenRequest {
    pub client_id: String,
    pub username: String,
    pub password: String,
    pub grant_type: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct TokenGrant {
    pub access_token: String,
    #[serde(default)]
    pub expires_in: u64,
    #[serde(default)]
    pub token_type: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct UserInfo {
    pub sub: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub preferred_username: Option<String>,
}

impl UserInfo {
    /// Best available display name, falling back through the profile fields.
    pub fn display_name(&self) -> String {
        self.name
            .clone()
            .or_else(|| self.preferred_username.clone())
            .or_else(|| self.email.clone())
            .unwrap_or_else(|| self.sub.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_falls_back_through_profile_fields() {
        let full = UserInfo {
            sub: "7b6e".to_string(),
            email: Some("ada@mercato.store".to_string()),
            name: Some("Ada Lovelace".to_string()),
            preferred_username: Some("ada".to_string()),
        };
        assert_eq!(full.display_name(), "Ada Lovelace");

        let minimal = UserInfo {
            sub: "7b6e".to_string(),
            email: None,
            name: None,
            preferred_username: None,
        };
        assert_eq!(minimal.display_name(), "7b6e");
    }

    #[test]
    fn token_grant_tolerates_missing_optional_fields() {
        let grant: TokenGrant =
            serde_json::from_str(r#"{"access_token":"tok-123"}"#).expect("Failed to decode");
        assert_eq!(grant.access_token, "tok-123");
        assert_eq!(grant.expires_in, 0);
        assert_eq!(grant.token_type, "");
    }
}
