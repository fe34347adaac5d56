pub mod alert_reason;
pub mod message_type;
pub mod order_status;
pub mod payment_status;
pub mod sentiment;

pub use alert_reason::AlertReason;
pub use message_type::MessageType;
pub use order_status::OrderStatus;
pub use payment_status::PaymentStatus;
pub use sentiment::Sentiment;
