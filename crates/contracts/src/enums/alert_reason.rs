use serde::{Deserialize, Serialize};

/// Why an alert was raised for an order.
///
/// Alerts are created server-side; the dashboard only resolves them, and for
/// CANCELLATION_REQUEST additionally offers cancelling the order itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertReason {
    NegativeSentiment,
    NoCustomerResponse,
    PaymentOverdue,
    DeliveryDelayed,
    CancellationRequest,
}

impl AlertReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertReason::NegativeSentiment => "NEGATIVE_SENTIMENT",
            AlertReason::NoCustomerResponse => "NO_CUSTOMER_RESPONSE",
            AlertReason::PaymentOverdue => "PAYMENT_OVERDUE",
            AlertReason::DeliveryDelayed => "DELIVERY_DELAYED",
            AlertReason::CancellationRequest => "CANCELLATION_REQUEST",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_format_matches_server() {
        assert_eq!(
            serde_json::from_str::<AlertReason>("\"CANCELLATION_REQUEST\"").unwrap(),
            AlertReason::CancellationRequest
        );
        assert_eq!(
            serde_json::to_string(&AlertReason::PaymentOverdue).unwrap(),
            "\"PAYMENT_OVERDUE\""
        );
    }
}
