use serde::{Deserialize, Serialize};

/// Fulfillment stage of an order, from creation through delivery.
///
/// Transitions are performed server-side; the client only renders the current
/// value and offers the actions valid for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Created,
    PaymentPending,
    Paid,
    InProcess,
    Shipped,
    OutForDelivery,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// Wire/display text, identical to the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Created => "CREATED",
            OrderStatus::PaymentPending => "PAYMENT_PENDING",
            OrderStatus::Paid => "PAID",
            OrderStatus::InProcess => "IN_PROCESS",
            OrderStatus::Shipped => "SHIPPED",
            OrderStatus::OutForDelivery => "OUT_FOR_DELIVERY",
            OrderStatus::Delivered => "DELIVERED",
            OrderStatus::Cancelled => "CANCELLED",
        }
    }

    /// Badge variant for this status. Exhaustive on purpose: a new status
    /// must pick a variant here before it compiles.
    pub fn badge_variant(&self) -> &'static str {
        match self {
            OrderStatus::Created => "primary",
            OrderStatus::PaymentPending => "warning",
            OrderStatus::Paid => "success",
            OrderStatus::InProcess => "neutral",
            OrderStatus::Shipped => "primary",
            OrderStatus::OutForDelivery => "warning",
            OrderStatus::Delivered => "success",
            OrderStatus::Cancelled => "error",
        }
    }

    /// Terminal statuses never offer further lifecycle actions.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_format_matches_server() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::OutForDelivery).unwrap(),
            "\"OUT_FOR_DELIVERY\""
        );
        assert_eq!(
            serde_json::from_str::<OrderStatus>("\"PAYMENT_PENDING\"").unwrap(),
            OrderStatus::PaymentPending
        );
    }

    #[test]
    fn as_str_agrees_with_serde() {
        let all = [
            OrderStatus::Created,
            OrderStatus::PaymentPending,
            OrderStatus::Paid,
            OrderStatus::InProcess,
            OrderStatus::Shipped,
            OrderStatus::OutForDelivery,
            OrderStatus::Delivered,
            OrderStatus::Cancelled,
        ];
        for status in all {
            let wire = serde_json::to_string(&status).unwrap();
            assert_eq!(wire, format!("\"{}\"", status.as_str()));
        }
    }

    #[test]
    fn terminal_statuses() {
        assert!(OrderStatus::Delivered.is_terminal());
        assert!(OrderStatus::Cancelled.is_terminal());
        assert!(!OrderStatus::Shipped.is_terminal());
    }
}
