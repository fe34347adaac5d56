//! API utilities for frontend-backend communication
//!
//! Provides helpers for constructing API URLs, for the bodyless PATCH
//! requests the lifecycle transitions use, and for turning error responses
//! into the message shown to the user.

use gloo_net::http::{Request, Response};

/// Get the base URL for API requests
///
/// The client is served from the same origin as the API, so this is the
/// window origin; outside a browser context it degrades to an empty string,
/// which leaves the paths relative.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    window.location().origin().unwrap_or_default()
}

/// Build a full API URL from a path
///
/// # Example
/// ```text
/// let url = api_url("/api/admin/orders");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Extract the human-readable `detail` field from an error body, falling
/// back to the given message when the body is not JSON or carries none.
pub fn detail_or(body: &str, fallback: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("detail")
                .and_then(|detail| detail.as_str())
                .map(String::from)
        })
        .unwrap_or_else(|| fallback.to_string())
}

/// Turn a non-2xx response into the error message surfaced to the user:
/// the server's `detail` verbatim when present, the HTTP status otherwise.
pub async fn error_from_response(response: Response) -> String {
    let fallback = format!("Server error: {}", response.status());
    let body = response.text().await.unwrap_or_default();
    detail_or(&body, &fallback)
}

/// Bodyless PATCH shared by every status transition and alert mutation.
pub async fn patch_empty(path: &str) -> Result<(), String> {
    let response = Request::patch(&api_url(path))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(error_from_response(response).await);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_is_surfaced_verbatim() {
        assert_eq!(
            detail_or(r#"{"detail": "Order not found"}"#, "Server error: 404"),
            "Order not found"
        );
    }

    #[test]
    fn missing_detail_falls_back() {
        assert_eq!(detail_or(r#"{"error": "boom"}"#, "Server error: 500"), "Server error: 500");
        assert_eq!(detail_or("<html>502</html>", "Server error: 502"), "Server error: 502");
        assert_eq!(detail_or("", "Server error: 500"), "Server error: 500");
    }
}
