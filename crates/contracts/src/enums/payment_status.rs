use serde::{Deserialize, Serialize};

/// Payment flag, an axis independent from [`super::OrderStatus`].
///
/// The dashboard only ever marks payments PAID; FAILED is set by the payment
/// callback server-side and is display-only here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Pending,
    Paid,
    Failed,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "PENDING",
            PaymentStatus::Paid => "PAID",
            PaymentStatus::Failed => "FAILED",
        }
    }

    pub fn badge_variant(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "warning",
            PaymentStatus::Paid => "success",
            PaymentStatus::Failed => "error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_format_matches_server() {
        assert_eq!(
            serde_json::from_str::<PaymentStatus>("\"PENDING\"").unwrap(),
            PaymentStatus::Pending
        );
        assert_eq!(serde_json::to_string(&PaymentStatus::Paid).unwrap(), "\"PAID\"");
    }
}
