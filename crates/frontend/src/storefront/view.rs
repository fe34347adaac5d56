use leptos::ev::SubmitEvent;
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::state::build_request;
use crate::cart::Cart;
use crate::catalog::all_products;
use crate::orders::api;

/// Confirmation shown after a successful checkout.
#[derive(Clone)]
struct OrderConfirmation {
    order_id: String,
    message: String,
}

#[component]
pub fn CreateOrderPage() -> impl IntoView {
    let cart = RwSignal::new(Cart::new());
    let (name, set_name) = signal(String::new());
    let (whatsapp, set_whatsapp) = signal(String::new());
    let (submitting, set_submitting) = signal(false);
    let (success, set_success) = signal(None::<OrderConfirmation>);
    let (error, set_error) = signal(None::<String>);

    let remove_from_cart = move |index: usize| {
        cart.update(|c| c.remove(index));
    };

    let place_order = move |ev: SubmitEvent| {
        ev.prevent_default();

        // validated locally, never reaches the network
        if cart.with_untracked(|c| c.is_empty()) {
            set_error.set(Some("Please add at least one product to the cart.".to_string()));
            return;
        }
        // one request at a time, no matter how fast the button is clicked
        if submitting.get_untracked() {
            return;
        }

        set_submitting.set(true);
        set_error.set(None);
        set_success.set(None);

        let request = cart.with_untracked(|c| {
            build_request(&name.get_untracked(), &whatsapp.get_untracked(), c)
        });
        let item_count = cart.with_untracked(|c| c.len());

        spawn_local(async move {
            match api::create_order(&request).await {
                Ok(order) => {
                    log!("Order {} created", order.id);
                    set_success.set(Some(OrderConfirmation {
                        order_id: order.id,
                        message: format!(
                            "Order placed successfully for {} items! WhatsApp confirmation sent.",
                            item_count
                        ),
                    }));
                    // full reset: the order now lives server-side only
                    cart.update(|c| c.clear());
                    set_name.set(String::new());
                    set_whatsapp.set(String::new());
                }
                Err(e) => {
                    // cart and form stay as they were so the customer can retry
                    set_error.set(Some(e));
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="storefront">
            {move || {
                success
                    .get()
                    .map(|s| view! {
                        <div class="alert alert--success">
                            <h3>{s.message}</h3>
                            <p>"Order ID: " {s.order_id}</p>
                        </div>
                    })
            }}

            {move || error.get().map(|err| view! { <div class="alert alert--error">{err}</div> })}

            <div class="storefront__layout">
                <div class="product-list">
                    <h2>"Our Catch of the Day"</h2>
                    <div class="product-grid">
                        {all_products()
                            .iter()
                            .map(|product| {
                                let image = product.image;
                                let product_name = product.name;
                                let price = product.price;
                                let category = product.category.replace('_', " ");
                                let for_cart = product.clone();
                                view! {
                                    <div class="product-card">
                                        <img class="product-card__image" src=image alt=product_name />
                                        <div class="product-card__body">
                                            <h3 class="product-card__name">{product_name}</h3>
                                            <p class="product-card__category">{category}</p>
                                            <div class="product-card__footer">
                                                <span class="product-card__price">{price}</span>
                                                <button
                                                    class="btn btn--secondary"
                                                    on:click=move |_| cart.update(|c| c.add(for_cart.clone()))
                                                >
                                                    "Add to Cart"
                                                </button>
                                            </div>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="cart-sidebar">
                    <div class="card">
                        <h2>"Your Cart (" {move || cart.with(|c| c.len())} ")"</h2>

                        {move || {
                            let entries = cart.with(|c| c.entries().to_vec());
                            if entries.is_empty() {
                                view! {
                                    <p class="cart__empty">"Your cart is empty. Add some fish!"</p>
                                }
                                .into_any()
                            } else {
                                view! {
                                    <div class="cart__items">
                                        {entries
                                            .into_iter()
                                            .enumerate()
                                            .map(|(index, item)| {
                                                view! {
                                                    <div class="cart__item">
                                                        <div>
                                                            <div class="cart__item-name">{item.name}</div>
                                                            <div class="cart__item-price">
                                                                "₹ " {item.price_num}
                                                            </div>
                                                        </div>
                                                        <button
                                                            class="cart__item-remove"
                                                            title="Remove"
                                                            on:click=move |_| remove_from_cart(index)
                                                        >
                                                            "x"
                                                        </button>
                                                    </div>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                }
                                .into_any()
                            }
                        }}

                        <div class="cart__total">
                            <span>"Total:"</span>
                            <span>"₹ " {move || cart.with(|c| c.total())}</span>
                        </div>

                        <form on:submit=place_order>
                            <div class="form-group">
                                <label>"Your Name"</label>
                                <input
                                    type="text"
                                    required=true
                                    placeholder="Enter full name"
                                    prop:value=move || name.get()
                                    on:input=move |ev| set_name.set(event_target_value(&ev))
                                />
                            </div>
                            <div class="form-group">
                                <label>"WhatsApp Number"</label>
                                <input
                                    type="tel"
                                    required=true
                                    placeholder="+91..."
                                    prop:value=move || whatsapp.get()
                                    on:input=move |ev| set_whatsapp.set(event_target_value(&ev))
                                />
                            </div>
                            <button
                                type="submit"
                                class="btn btn--primary btn--block"
                                disabled=move || submitting.get() || cart.with(|c| c.is_empty())
                            >
                                {move || if submitting.get() { "Processing..." } else { "Place Order" }}
                            </button>
                        </form>
                    </div>
                </div>
            </div>
        </div>
    }
}
