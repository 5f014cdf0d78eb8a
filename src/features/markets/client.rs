//! Client wrappers for market-list requests: pending tenant applications the
//! console can approve or reject.

use crate::app_lib::{ApiRequest, AppError, execute_empty, execute_json};
use crate::features::markets::types::MarketRequest;
use web_sys::AbortSignal;

pub async fn list_requests(signal: Option<AbortSignal>) -> Result<Vec<MarketRequest>, AppError> {
    execute_json(&ApiRequest::get("/market-requests"), signal.as_ref()).await
}

pub async fn approve_request(id: &str) -> Result<(), AppError> {
    execute_empty(
        &ApiRequest::put(&format!("/market-requests/{id}/approve")),
        None,
    )
    .await
}

pub async fn reject_request(id: &str) -> Result<(), AppError> {
    execute_empty(
        &ApiRequest::put(&format!("/market-requests/{id}/reject")),
        None,
    )
    .await
}
