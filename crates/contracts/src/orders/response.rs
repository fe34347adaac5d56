use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::{OrderStatus, PaymentStatus, Sentiment};

/// Server-owned view of an order, returned by order creation and by the
/// admin order list. The client never mutates it locally; every change goes
/// through the API and is reflected on the next refresh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDto {
    pub id: String,
    pub user_name: String,
    pub whatsapp_number: String,
    pub status: OrderStatus,
    pub payment_status: PaymentStatus,
    pub sentiment: Sentiment,
    pub automation_enabled: bool,
    pub product_name: Option<String>,
    pub amount: Option<f64>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub feedback_rating: Option<u8>,
    #[serde(default)]
    pub feedback_text: Option<String>,
}
