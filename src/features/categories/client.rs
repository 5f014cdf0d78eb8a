//! Client wrappers for category endpoints.

use crate::app_lib::{ApiRequest, AppError, execute_empty, execute_json};
use crate::features::categories::types::{Category, CategoryDraft};
use web_sys::AbortSignal;

pub async fn list_categories(signal: Option<AbortSignal>) -> Result<Vec<Category>, AppError> {
    execute_json(&ApiRequest::get("/categories"), signal.as_ref()).await
}

pub async fn create_category(draft: &CategoryDraft) -> Result<Category, AppError> {
    if draft.name.trim().is_empty() {
        return Err(AppError::Validation(
            "Category name is required.".to_string(),
        ));
    }
    execute_json(&ApiRequest::post("/categories").json(draft)?, None).await
}

#[allow(dead_code)]
pub async fn update_category(id: &str, draft: &CategoryDraft) -> Result<Category, AppError> {
    execute_json(
        &ApiRequest::put(&format!("/categories/{id}")).json(draft)?,
        None,
    )
    .await
}

pub async fn delete_category(id: &str) -> Result<(), AppError> {
    execute_empty(&ApiRequest::delete(&format!("/categories/{id}")), None).await
}
