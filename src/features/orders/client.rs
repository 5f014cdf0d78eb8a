//! Client wrappers for order endpoints: the console listing plus the
//! storefront's own-orders view.

use crate::app_lib::{ApiRequest, AppError, execute_empty, execute_json};
use crate::features::orders::types::{Order, OrderPage, OrderStatus, StatusUpdate};
use web_sys::AbortSignal;

/// Fetches one page of all orders for the console.
pub async fn list_orders(page: u64, signal: Option<AbortSignal>) -> Result<OrderPage, AppError> {
    execute_json(
        &ApiRequest::get("/orders").query("page", &page.to_string()),
        signal.as_ref(),
    )
    .await
}

/// Fetches the signed-in customer's own orders.
pub async fn my_orders(signal: Option<AbortSignal>) -> Result<Vec<Order>, AppError> {
    execute_json(&ApiRequest::get("/orders/mine"), signal.as_ref()).await
}

#[allow(dead_code)]
pub async fn get_order(id: &str, signal: Option<AbortSignal>) -> Result<Order, AppError> {
    let trimmed = id.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation("Order id is required.".to_string()));
    }

    execute_json(
        &ApiRequest::get(&format!("/orders/{trimmed}")),
        signal.as_ref(),
    )
    .await
}

/// Moves an order to a new status.
pub async fn update_status(id: &str, status: OrderStatus) -> Result<(), AppError> {
    execute_empty(
        &ApiRequest::put(&format!("/orders/{id}/status")).json(&StatusUpdate { status })?,
        None,
    )
    .await
}
