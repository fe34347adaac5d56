//! Dashboard state: per-collection load tracking, tab selection, and the
//! action-visibility rules for order rows and alert cards.

use contracts::admin::AlertDto;
use contracts::enums::{AlertReason, OrderStatus, PaymentStatus};
use contracts::orders::OrderDto;

/// Dashboard tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminTab {
    Orders,
    Messages,
    Alerts,
}

/// Load state of one fetched collection.
///
/// Each of the three admin collections tracks its own state, so a failing
/// endpoint only blanks its own tab while the other two keep rendering.
#[derive(Debug, Clone)]
pub struct CollectionLoad<T> {
    pub items: Vec<T>,
    pub loading: bool,
    pub error: Option<String>,
    /// True once the first fetch has settled, successfully or not.
    pub loaded: bool,
}

impl<T> Default for CollectionLoad<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            error: None,
            loaded: false,
        }
    }
}

impl<T> CollectionLoad<T> {
    pub fn start(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Replace the snapshot. Overlapping refreshes apply last-wins; there is
    /// no merging to go wrong.
    pub fn finish(&mut self, items: Vec<T>) {
        self.items = items;
        self.loading = false;
        self.loaded = true;
    }

    /// Record a failure but keep the previous snapshot visible.
    pub fn fail(&mut self, error: String) {
        self.loading = false;
        self.loaded = true;
        self.error = Some(error);
    }
}

/// Mutations the dashboard can request for an order. Which of them are
/// offered is a pure function of the order's current state; the server
/// stays the authority on legality.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderAction {
    MarkPaid,
    Process,
    Ship,
    OutForDelivery,
    Deliver,
}

impl OrderAction {
    pub fn label(&self) -> &'static str {
        match self {
            OrderAction::MarkPaid => "Mark Paid",
            OrderAction::Process => "Process",
            OrderAction::Ship => "Ship",
            OrderAction::OutForDelivery => "Out for Delivery",
            OrderAction::Deliver => "Deliver",
        }
    }
}

/// Buttons shown on an order row.
pub fn order_actions(order: &OrderDto) -> Vec<OrderAction> {
    let mut actions = Vec::new();
    if order.payment_status == PaymentStatus::Pending {
        actions.push(OrderAction::MarkPaid);
    }
    match order.status {
        OrderStatus::Paid => {
            actions.push(OrderAction::Process);
            actions.push(OrderAction::Ship);
        }
        OrderStatus::InProcess => actions.push(OrderAction::Ship),
        OrderStatus::Shipped => actions.push(OrderAction::OutForDelivery),
        OrderStatus::OutForDelivery => actions.push(OrderAction::Deliver),
        OrderStatus::Created
        | OrderStatus::PaymentPending
        | OrderStatus::Delivered
        | OrderStatus::Cancelled => {}
    }
    actions
}

/// Cancel Order is reserved for unresolved cancellation requests; every
/// other unresolved alert offers Resolve only.
pub fn alert_offers_cancel(alert: &AlertDto) -> bool {
    !alert.resolved && alert.reason == AlertReason::CancellationRequest
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use contracts::enums::Sentiment;

    fn order(status: OrderStatus, payment_status: PaymentStatus) -> OrderDto {
        OrderDto {
            id: "o1".to_string(),
            user_name: "Asha".to_string(),
            whatsapp_number: "+919999999999".to_string(),
            status,
            payment_status,
            sentiment: Sentiment::Unknown,
            automation_enabled: true,
            product_name: Some("Rohu".to_string()),
            amount: Some(300.0),
            created_at: Utc::now(),
            feedback_rating: None,
            feedback_text: None,
        }
    }

    fn alert(reason: AlertReason, resolved: bool) -> AlertDto {
        AlertDto {
            id: "a1".to_string(),
            order_id: "o1".to_string(),
            reason,
            description: String::new(),
            created_at: Utc::now(),
            resolved,
        }
    }

    #[test]
    fn pending_payment_offers_mark_paid() {
        let actions = order_actions(&order(OrderStatus::Created, PaymentStatus::Pending));
        assert_eq!(actions, vec![OrderAction::MarkPaid]);
    }

    #[test]
    fn paid_orders_offer_process_and_ship() {
        let actions = order_actions(&order(OrderStatus::Paid, PaymentStatus::Paid));
        assert_eq!(actions, vec![OrderAction::Process, OrderAction::Ship]);
    }

    #[test]
    fn in_process_orders_offer_ship_only() {
        let actions = order_actions(&order(OrderStatus::InProcess, PaymentStatus::Paid));
        assert_eq!(actions, vec![OrderAction::Ship]);
    }

    #[test]
    fn delivery_chain_advances_one_step_at_a_time() {
        assert_eq!(
            order_actions(&order(OrderStatus::Shipped, PaymentStatus::Paid)),
            vec![OrderAction::OutForDelivery]
        );
        assert_eq!(
            order_actions(&order(OrderStatus::OutForDelivery, PaymentStatus::Paid)),
            vec![OrderAction::Deliver]
        );
    }

    #[test]
    fn terminal_orders_offer_nothing() {
        assert!(order_actions(&order(OrderStatus::Delivered, PaymentStatus::Paid)).is_empty());
        assert!(order_actions(&order(OrderStatus::Cancelled, PaymentStatus::Paid)).is_empty());
    }

    #[test]
    fn cancel_is_reserved_for_unresolved_cancellation_requests() {
        assert!(alert_offers_cancel(&alert(AlertReason::CancellationRequest, false)));
        assert!(!alert_offers_cancel(&alert(AlertReason::CancellationRequest, true)));
        assert!(!alert_offers_cancel(&alert(AlertReason::PaymentOverdue, false)));
        assert!(!alert_offers_cancel(&alert(AlertReason::NegativeSentiment, false)));
    }

    #[test]
    fn failed_refresh_keeps_previous_snapshot() {
        let mut load = CollectionLoad::<u32>::default();
        load.start();
        load.finish(vec![1, 2, 3]);
        load.start();
        load.fail("Server error: 502".to_string());
        assert_eq!(load.items, vec![1, 2, 3]);
        assert_eq!(load.error.as_deref(), Some("Server error: 502"));
        assert!(!load.loading);
    }
}
