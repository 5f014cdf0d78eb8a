//! Client wrappers for brand endpoints.

use crate::app_lib::{ApiRequest, AppError, execute_empty, execute_json};
use crate::features::brands::types::{Brand, BrandDraft};
use web_sys::AbortSignal;

pub async fn list_brands(signal: Option<AbortSignal>) -> Result<Vec<Brand>, AppError> {
    execute_json(&ApiRequest::get("/brands"), signal.as_ref()).await
}

pub async fn create_brand(draft: &BrandDraft) -> Result<Brand, AppError> {
    if draft.name.trim().is_empty() {
        return Err(AppError::Validation("Brand name is required.".to_string()));
    }
    execute_json(&ApiRequest::post("/brands").json(draft)?, None).await
}

pub async fn delete_brand(id: &str) -> Result<(), AppError> {
    execute_empty(&ApiRequest::delete(&format!("/brands/{id}")), None).await
}
