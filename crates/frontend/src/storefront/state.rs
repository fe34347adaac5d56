//! Checkout submission helpers.

use contracts::orders::CreateOrderRequest;

use crate::cart::Cart;

/// Aggregate the checkout form and cart into the creation request.
///
/// Product names and the total are frozen here, at submission time; the
/// server stores them as-is and nothing recomputes them from the cart later.
pub fn build_request(name: &str, whatsapp_number: &str, cart: &Cart) -> CreateOrderRequest {
    CreateOrderRequest {
        name: name.to_string(),
        whatsapp_number: whatsapp_number.to_string(),
        product_name: cart.product_names(),
        amount: cart.total(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Product;

    fn product(name: &'static str, price_num: u32) -> Product {
        Product {
            id: 0,
            name,
            category: "sea_water",
            price: "",
            image: "",
            price_num,
        }
    }

    #[test]
    fn aggregates_cart_into_request() {
        let mut cart = Cart::new();
        cart.add(product("Rohu", 300));
        cart.add(product("Pomfret", 450));

        let request = build_request("Asha", "+919999999999", &cart);
        assert_eq!(request.name, "Asha");
        assert_eq!(request.whatsapp_number, "+919999999999");
        assert_eq!(request.product_name, "Rohu, Pomfret");
        assert_eq!(request.amount, 750);
    }

    #[test]
    fn request_serializes_to_the_wire_shape() {
        let mut cart = Cart::new();
        cart.add(product("Rohu", 300));
        cart.add(product("Pomfret", 450));

        let body = serde_json::to_value(build_request("Asha", "+919999999999", &cart)).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "name": "Asha",
                "whatsapp_number": "+919999999999",
                "product_name": "Rohu, Pomfret",
                "amount": 750
            })
        );
    }
}
