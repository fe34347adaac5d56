//! REST client for the customer-facing order endpoints.

use contracts::orders::{CreateOrderRequest, OrderDto};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, error_from_response, patch_empty};

/// Create an order from the aggregated cart payload.
///
/// Network failures map to the generic connectivity message; business
/// failures surface the server's `detail` verbatim.
pub async fn create_order(request: &CreateOrderRequest) -> Result<OrderDto, String> {
    let response = Request::post(&api_url("/api/orders/"))
        .json(request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|_| "Failed to create order. Please check your connection.".to_string())?;

    if !response.ok() {
        return Err(error_from_response(response).await);
    }

    response
        .json::<OrderDto>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Flip the payment flag (simulates the payment gateway callback).
pub async fn update_payment(order_id: &str, paid: bool) -> Result<(), String> {
    patch_empty(&format!("/api/orders/{}/payment-status?paid={}", order_id, paid)).await
}

pub async fn mark_in_process(order_id: &str) -> Result<(), String> {
    patch_empty(&format!("/api/orders/{}/process", order_id)).await
}

pub async fn mark_shipped(order_id: &str) -> Result<(), String> {
    patch_empty(&format!("/api/orders/{}/ship", order_id)).await
}

pub async fn mark_out_for_delivery(order_id: &str) -> Result<(), String> {
    patch_empty(&format!("/api/orders/{}/out-for-delivery", order_id)).await
}

pub async fn mark_delivered(order_id: &str) -> Result<(), String> {
    patch_empty(&format!("/api/orders/{}/deliver", order_id)).await
}
