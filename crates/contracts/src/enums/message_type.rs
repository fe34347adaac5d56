use serde::{Deserialize, Serialize};

/// Kind of a logged WhatsApp message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MessageType {
    OrderConfirmation,
    // rename_all drops the underscore before trailing digits
    #[serde(rename = "PAYMENT_REMINDER_1")]
    PaymentReminder1,
    #[serde(rename = "PAYMENT_REMINDER_2")]
    PaymentReminder2,
    InProcessNotification,
    ShippingNotification,
    OutForDeliveryNotification,
    DeliveryNotification,
    PaymentConfirmation,
    FeedbackRequest,
    CustomerReply,
}

impl MessageType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageType::OrderConfirmation => "ORDER_CONFIRMATION",
            MessageType::PaymentReminder1 => "PAYMENT_REMINDER_1",
            MessageType::PaymentReminder2 => "PAYMENT_REMINDER_2",
            MessageType::InProcessNotification => "IN_PROCESS_NOTIFICATION",
            MessageType::ShippingNotification => "SHIPPING_NOTIFICATION",
            MessageType::OutForDeliveryNotification => "OUT_FOR_DELIVERY_NOTIFICATION",
            MessageType::DeliveryNotification => "DELIVERY_NOTIFICATION",
            MessageType::PaymentConfirmation => "PAYMENT_CONFIRMATION",
            MessageType::FeedbackRequest => "FEEDBACK_REQUEST",
            MessageType::CustomerReply => "CUSTOMER_REPLY",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbered_reminders_keep_their_suffix() {
        assert_eq!(
            serde_json::to_string(&MessageType::PaymentReminder1).unwrap(),
            "\"PAYMENT_REMINDER_1\""
        );
        assert_eq!(
            serde_json::from_str::<MessageType>("\"PAYMENT_REMINDER_2\"").unwrap(),
            MessageType::PaymentReminder2
        );
    }
}
