//! REST client for the admin dashboard.

use contracts::admin::{AlertDto, MessageLogDto, SyncMessagesResponse};
use contracts::orders::OrderDto;
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, error_from_response, patch_empty};

/// Page sizes mirror the server defaults.
pub const ORDERS_PAGE_LIMIT: usize = 50;
pub const MESSAGES_PAGE_LIMIT: usize = 100;
pub const ALERTS_PAGE_LIMIT: usize = 50;

/// Newest-first order list.
pub async fn fetch_orders(skip: usize, limit: usize) -> Result<Vec<OrderDto>, String> {
    get_json(&format!("/api/admin/orders?skip={}&limit={}", skip, limit)).await
}

/// Newest-first message log; `order_id` narrows it to a single order.
pub async fn fetch_messages(
    order_id: Option<&str>,
    skip: usize,
    limit: usize,
) -> Result<Vec<MessageLogDto>, String> {
    let mut path = format!("/api/admin/messages?skip={}&limit={}", skip, limit);
    if let Some(order_id) = order_id {
        path.push_str(&format!("&order_id={}", urlencoding::encode(order_id)));
    }
    get_json(&path).await
}

/// Newest-first alert list; `resolved` narrows it to one side of the flag.
pub async fn fetch_alerts(
    resolved: Option<bool>,
    skip: usize,
    limit: usize,
) -> Result<Vec<AlertDto>, String> {
    let mut path = format!("/api/admin/alerts?skip={}&limit={}", skip, limit);
    if let Some(resolved) = resolved {
        path.push_str(&format!("&resolved={}", resolved));
    }
    get_json(&path).await
}

/// Ask the server to pull new messages from the messaging provider.
/// Single-shot: a failure is reported and the operator retries by hand.
pub async fn sync_messages() -> Result<SyncMessagesResponse, String> {
    let response = Request::post(&api_url("/api/admin/sync-messages"))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(error_from_response(response).await);
    }

    response
        .json::<SyncMessagesResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn resolve_alert(alert_id: &str) -> Result<(), String> {
    patch_empty(&format!("/api/admin/alerts/{}/resolve", alert_id)).await
}

/// Cancel an order; the server notifies the customer as a side effect.
pub async fn cancel_order(order_id: &str) -> Result<(), String> {
    patch_empty(&format!("/api/admin/orders/{}/cancel", order_id)).await
}

async fn get_json<T: serde::de::DeserializeOwned>(path: &str) -> Result<T, String> {
    let response = Request::get(&api_url(path))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(error_from_response(response).await);
    }

    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
