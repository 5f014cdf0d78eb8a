//! Client wrappers for product endpoints. These functions keep endpoint
//! paths centralized and assume the backend enforces authorization.

use crate::app_lib::{ApiRequest, AppError, execute_empty, execute_json};
use crate::features::products::types::{Product, ProductDraft, ProductPage};
use web_sys::AbortSignal;

/// Fetches one page of products, optionally filtered by a search term.
pub async fn list_products(
    search: String,
    page: u64,
    signal: Option<AbortSignal>,
) -> Result<ProductPage, AppError> {
    let mut request = ApiRequest::get("/products").query("page", &page.to_string());
    let search = search.trim().to_string();
    if !search.is_empty() {
        request = request.query("search", &search);
    }

    execute_json(&request, signal.as_ref()).await
}

/// Fetches product details by id after basic input validation.
#[allow(dead_code)]
pub async fn get_product(id: &str, signal: Option<AbortSignal>) -> Result<Product, AppError> {
    let trimmed = id.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation("Product id is required.".to_string()));
    }

    execute_json(
        &ApiRequest::get(&format!("/products/{trimmed}")),
        signal.as_ref(),
    )
    .await
}

pub async fn create_product(draft: &ProductDraft) -> Result<Product, AppError> {
    validate_draft(draft)?;
    execute_json(&ApiRequest::post("/products").json(draft)?, None).await
}

pub async fn update_product(id: &str, draft: &ProductDraft) -> Result<Product, AppError> {
    validate_draft(draft)?;
    execute_json(&ApiRequest::put(&format!("/products/{id}")).json(draft)?, None).await
}

pub async fn delete_product(id: &str) -> Result<(), AppError> {
    execute_empty(&ApiRequest::delete(&format!("/products/{id}")), None).await
}

fn validate_draft(draft: &ProductDraft) -> Result<(), AppError> {
    if draft.name.trim().is_empty() {
        return Err(AppError::Validation("Product name is required.".to_string()));
    }
    if draft.price < 0.0 {
        return Err(AppError::Validation(
            "Price cannot be negative.".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_validation_rejects_bad_input() {
        let mut draft = ProductDraft {
            name: "  ".to_string(),
            ..ProductDraft::default()
        };
        assert!(matches!(
            validate_draft(&draft),
            Err(AppError::Validation(_))
        ));

        draft.name = "Lamp".to_string();
        draft.price = -1.0;
        assert!(matches!(
            validate_draft(&draft),
            Err(AppError::Validation(_))
        ));

        draft.price = 19.5;
        assert!(validate_draft(&draft).is_ok());
    }
}
