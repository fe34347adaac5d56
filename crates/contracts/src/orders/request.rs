use serde::{Deserialize, Serialize};

/// Body of `POST /api/orders/`.
///
/// `product_name` and `amount` are aggregated from the cart at submission
/// time and frozen server-side; the server never sees individual line items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    /// Customer name as entered in the checkout form.
    pub name: String,

    /// WhatsApp number with country code, e.g. "+919999999999".
    pub whatsapp_number: String,

    /// Display names of all cart entries, joined with ", " in cart order.
    pub product_name: String,

    /// Sum of normalized prices over the cart, in whole rupees.
    pub amount: u32,
}
