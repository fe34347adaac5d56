use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::{AlertReason, MessageType, Sentiment};

/// One entry of the WhatsApp message log.
///
/// Read-only from the client's perspective; new entries appear via the
/// server's own sends or the on-demand sync trigger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageLogDto {
    pub id: String,
    pub order_id: String,
    pub message_type: MessageType,
    pub message_content: String,
    pub sent_at: DateTime<Utc>,
    pub is_incoming: bool,
    pub sentiment: Option<Sentiment>,
}

/// Operator-facing notification attached to an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertDto {
    pub id: String,
    pub order_id: String,
    pub reason: AlertReason,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub resolved: bool,
}

/// Status line returned by `POST /api/admin/sync-messages`, shown to the
/// operator verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncMessagesResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alert_decodes_from_server_payload() {
        let json = r#"{
            "id": "66f0a1",
            "order_id": "66f0a0",
            "reason": "CANCELLATION_REQUEST",
            "description": "Customer asked to cancel via WhatsApp",
            "created_at": "2025-11-02T09:30:00Z",
            "resolved": false
        }"#;
        let alert: AlertDto = serde_json::from_str(json).unwrap();
        assert_eq!(alert.reason, AlertReason::CancellationRequest);
        assert!(!alert.resolved);
    }

    #[test]
    fn incoming_message_carries_sentiment() {
        let json = r#"{
            "id": "m1",
            "order_id": "o1",
            "message_type": "CUSTOMER_REPLY",
            "message_content": "Fish was fresh, thanks!",
            "sent_at": "2025-11-02T10:15:00Z",
            "is_incoming": true,
            "sentiment": "positive"
        }"#;
        let msg: MessageLogDto = serde_json::from_str(json).unwrap();
        assert!(msg.is_incoming);
        assert_eq!(msg.sentiment, Some(Sentiment::Positive));
    }
}
