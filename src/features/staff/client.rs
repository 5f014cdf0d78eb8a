//! Client wrappers for identity-provider staff administration: account CRUD,
//! password resets, and realm role mappings. Role lookups degrade per
//! account so one failed lookup never sinks a whole listing.

use crate::app_lib::config::AppConfig;
use crate::app_lib::{ApiRequest, AppError, execute_empty, execute_json};
use crate::features::auth::roles::{self, RoleRecord};
use crate::features::staff::types::{CredentialReset, StaffAccount, StaffDraft, StaffMember};
use futures::future::join_all;
use std::future::Future;
use web_sys::AbortSignal;

fn provider(request: ApiRequest) -> ApiRequest {
    request.base(&AppConfig::load().auth_base_url)
}

/// Lists staff accounts and enriches each with its normalized realm roles.
pub async fn list_staff(signal: Option<AbortSignal>) -> Result<Vec<StaffMember>, AppError> {
    let accounts: Vec<StaffAccount> =
        execute_json(&provider(ApiRequest::get("/users")), signal.as_ref()).await?;

    let lookup_signal = signal.clone();
    Ok(enrich(accounts, move |id| user_realm_roles(id, lookup_signal.clone())).await)
}

/// Fetches one staff account.
pub async fn get_staff(id: &str, signal: Option<AbortSignal>) -> Result<StaffAccount, AppError> {
    let trimmed = id.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation("Staff id is required.".to_string()));
    }

    execute_json(
        &provider(ApiRequest::get(&format!("/users/{trimmed}"))),
        signal.as_ref(),
    )
    .await
}

/// Raw realm role mappings for one account.
pub async fn user_realm_roles(
    user_id: String,
    signal: Option<AbortSignal>,
) -> Result<Vec<RoleRecord>, AppError> {
    execute_json(
        &provider(ApiRequest::get(&format!("/users/{user_id}/role-mappings/realm"))),
        signal.as_ref(),
    )
    .await
}

/// Creates a staff account; the provider answers 201 with no body.
pub async fn create_staff(draft: &StaffDraft) -> Result<(), AppError> {
    if draft.username.trim().is_empty() || draft.email.trim().is_empty() {
        return Err(AppError::Validation(
            "Username and email are required.".to_string(),
        ));
    }
    execute_empty(&provider(ApiRequest::post("/users")).json(draft)?, None).await
}

/// Updates a staff account.
pub async fn update_staff(id: &str, draft: &StaffDraft) -> Result<(), AppError> {
    execute_empty(
        &provider(ApiRequest::put(&format!("/users/{id}"))).json(draft)?,
        None,
    )
    .await
}

/// Deletes a staff account.
pub async fn delete_staff(id: &str) -> Result<(), AppError> {
    execute_empty(&provider(ApiRequest::delete(&format!("/users/{id}"))), None).await
}

/// Resets an account password after checking the confirmation locally.
pub async fn reset_password(
    id: &str,
    value: &str,
    confirmation: &str,
    temporary: bool,
) -> Result<(), AppError> {
    validate_password_pair(value, confirmation)?;

    let reset = CredentialReset::password(value.to_string(), temporary);
    execute_empty(
        &provider(ApiRequest::put(&format!("/users/{id}/reset-password"))).json(&reset)?,
        None,
    )
    .await
}

/// Realm roles an operator may assign: the provider's list minus builtins.
pub async fn assignable_roles(signal: Option<AbortSignal>) -> Result<Vec<RoleRecord>, AppError> {
    let records: Vec<RoleRecord> =
        execute_json(&provider(ApiRequest::get("/roles")), signal.as_ref()).await?;
    Ok(records
        .into_iter()
        .filter(|record| !roles::is_builtin(&record.name))
        .collect())
}

/// Grants realm roles to an account; 204 on success.
pub async fn grant_realm_roles(user_id: &str, records: &[RoleRecord]) -> Result<(), AppError> {
    execute_empty(
        &provider(ApiRequest::post(&format!("/users/{user_id}/role-mappings/realm")))
            .json(&records)?,
        None,
    )
    .await
}

/// Revokes realm roles from an account; 204 on success.
pub async fn revoke_realm_roles(user_id: &str, records: &[RoleRecord]) -> Result<(), AppError> {
    execute_empty(
        &provider(ApiRequest::delete(&format!("/users/{user_id}/role-mappings/realm")))
            .json(&records)?,
        None,
    )
    .await
}

fn validate_password_pair(value: &str, confirmation: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation("Password is required.".to_string()));
    }
    if value != confirmation {
        return Err(AppError::Validation("Passwords do not match.".to_string()));
    }
    Ok(())
}

/// Joins role lookups against their accounts. A failed lookup reports that
/// account with an empty role set; the batch itself always succeeds.
pub(crate) async fn enrich<F, Fut>(accounts: Vec<StaffAccount>, lookup: F) -> Vec<StaffMember>
where
    F: Fn(String) -> Fut,
    Fut: Future<Output = Result<Vec<RoleRecord>, AppError>>,
{
    let lookups = join_all(accounts.iter().map(|account| lookup(account.id.clone()))).await;

    accounts
        .into_iter()
        .zip(lookups)
        .map(|(account, result)| {
            let roles = match result {
                Ok(records) => roles::normalize(&records),
                Err(err) => {
                    log::warn!("role lookup failed for {}: {err}", account.id);
                    Vec::new()
                }
            };
            StaffMember { account, roles }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::auth::roles::{RoleName, record};
    use futures::executor::block_on;

    fn account(id: &str) -> StaffAccount {
        StaffAccount {
            id: id.to_string(),
            username: format!("user-{id}"),
            email: Some(format!("{id}@mercato.store")),
            first_name: None,
            last_name: None,
            enabled: true,
            created_timestamp: None,
        }
    }

    #[test]
    fn enrichment_isolates_a_failed_lookup() {
        let accounts = vec![account("a"), account("b"), account("c")];

        let members = block_on(enrich(accounts, |id| async move {
            if id == "b" {
                Err(AppError::Server {
                    status: 500,
                    message: "mapping lookup failed".to_string(),
                })
            } else {
                Ok(vec![record("Admin"), record("offline_access")])
            }
        }));

        assert_eq!(members.len(), 3);
        assert_eq!(members[0].roles, vec![RoleName::from("Admin")]);
        assert_eq!(members[1].roles, Vec::<RoleName>::new());
        assert_eq!(members[2].roles, vec![RoleName::from("Admin")]);
    }

    #[test]
    fn enrichment_preserves_account_order() {
        let accounts = vec![account("a"), account("b")];

        let members = block_on(enrich(accounts, |_| async { Ok(Vec::new()) }));

        assert_eq!(members[0].account.id, "a");
        assert_eq!(members[1].account.id, "b");
    }

    #[test]
    fn password_reset_validates_locally() {
        assert!(matches!(
            validate_password_pair("", ""),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            validate_password_pair("secret", "secrets"),
            Err(AppError::Validation(_))
        ));
        assert!(validate_password_pair("secret", "secret").is_ok());
    }
}
