//! Client wrappers for shipping-rate endpoints. The public listing is the
//! one resource the storefront may read without a token.

use crate::app_lib::{ApiRequest, AppError, execute_empty, execute_json};
use crate::features::shipping::types::{ShippingRate, ShippingRateDraft};
use web_sys::AbortSignal;

/// Authenticated listing for the console.
pub async fn list_rates(signal: Option<AbortSignal>) -> Result<Vec<ShippingRate>, AppError> {
    execute_json(&ApiRequest::get("/shipping-rate"), signal.as_ref()).await
}

/// Public listing for the storefront; no token attached.
pub async fn list_public_rates(
    signal: Option<AbortSignal>,
) -> Result<Vec<ShippingRate>, AppError> {
    execute_json(
        &ApiRequest::get("/shipping-rate/public").public(),
        signal.as_ref(),
    )
    .await
}

pub async fn create_rate(draft: &ShippingRateDraft) -> Result<ShippingRate, AppError> {
    validate_draft(draft)?;
    execute_json(&ApiRequest::post("/shipping-rate").json(draft)?, None).await
}

pub async fn update_rate(id: &str, draft: &ShippingRateDraft) -> Result<ShippingRate, AppError> {
    validate_draft(draft)?;
    execute_json(
        &ApiRequest::put(&format!("/shipping-rate/{id}")).json(draft)?,
        None,
    )
    .await
}

pub async fn delete_rate(id: &str) -> Result<(), AppError> {
    execute_empty(&ApiRequest::delete(&format!("/shipping-rate/{id}")), None).await
}

fn validate_draft(draft: &ShippingRateDraft) -> Result<(), AppError> {
    if draft.region.trim().is_empty() {
        return Err(AppError::Validation("Region is required.".to_string()));
    }
    if draft.rate < 0.0 {
        return Err(AppError::Validation("Rate cannot be negative.".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_validation_rejects_bad_input() {
        let mut draft = ShippingRateDraft {
            region: String::new(),
            rate: 4.5,
            estimated_days: 3,
        };
        assert!(matches!(
            validate_draft(&draft),
            Err(AppError::Validation(_))
        ));

        draft.region = "EU".to_string();
        draft.rate = -0.5;
        assert!(matches!(
            validate_draft(&draft),
            Err(AppError::Validation(_))
        ));

        draft.rate = 4.5;
        assert!(validate_draft(&draft).is_ok());
    }
}
