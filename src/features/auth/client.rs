//! Login flow against the identity provider: a direct credential grant, a
//! profile lookup, and a realm role lookup combine into the [`Identity`] the
//! session store owns. Credentials and tokens pass through here and must
//! never be logged.

use crate::app_lib::{ApiRequest, AppError, execute_json};
use crate::app_lib::config::AppConfig;
use crate::features::auth::roles::{self, RoleRecord};
use crate::features::auth::session::{self, Identity};
use crate::features::auth::types::{TokenGrant, TokenRequest, UserInfo};

/// Exchanges credentials for a token, resolves the profile and roles, and
/// returns the assembled identity. The caller stores it via the session
/// store. A failed role lookup degrades to an empty role set; it does not
/// fail the login.
pub async fn login(email: &str, password: &str) -> Result<Identity, AppError> {
    let email = email.trim();
    if email.is_empty() || password.trim().is_empty() {
        return Err(AppError::Validation(
            "Email and password are required.".to_string(),
        ));
    }

    let config = AppConfig::load();
    if config.auth_base_url.trim().is_empty() {
        return Err(AppError::Config(
            "Identity provider host is not configured.".to_string(),
        ));
    }

    let grant: TokenGrant = execute_json(
        &ApiRequest::post("/token")
            .base(&config.auth_base_url)
            .public()
            .json(&TokenRequest {
                client_id: config.client_id.clone(),
                username: email.to_string(),
                password: password.to_string(),
                grant_type: "password".to_string(),
            })?,
        None,
    )
    .await?;

    let user: UserInfo = execute_json(
        &ApiRequest::get("/userinfo")
            .base(&config.auth_base_url)
            .bearer(&grant.access_token),
        None,
    )
    .await?;

    let roles = match fetch_realm_roles(&config, &user.sub, &grant.access_token).await {
        Ok(records) => roles::normalize(&records),
        Err(err) => {
            log::warn!("role lookup failed during login for {}: {err}", user.sub);
            Vec::new()
        }
    };

    Ok(Identity {
        id: user.sub.clone(),
        display_name: user.display_name(),
        email: user.email.unwrap_or_else(|| email.to_string()),
        token: grant.access_token,
        roles,
        issued_at: session::now_millis(),
    })
}

async fn fetch_realm_roles(
    config: &AppConfig,
    user_id: &str,
    token: &str,
) -> Result<Vec<RoleRecord>, AppError> {
    execute_json(
        &ApiRequest::get(&format!("/users/{user_id}/role-mappings/realm"))
            .base(&config.auth_base_url)
            .bearer(token),
        None,
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn login_rejects_blank_credentials_locally() {
        let result = block_on(login("", "secret"));
        assert!(matches!(result, Err(AppError::Validation(_))));

        let result = block_on(login("ada@mercato.store", "   "));
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn login_requires_a_configured_provider() {
        // No MERCATO_AUTH_BASE_URL is baked into test builds.
        let result = block_on(login("ada@mercato.store", "secret"));
        assert!(matches!(result, Err(AppError::Config(_))));
    }
}
