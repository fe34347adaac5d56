use contracts::orders::OrderDto;
use leptos::prelude::*;
use thaw::*;

use crate::admin::state::{order_actions, CollectionLoad, OrderAction};
use crate::shared::components::ui::Badge;
use crate::shared::date_utils::format_timestamp;

#[component]
pub fn OrdersTab(
    orders: RwSignal<CollectionLoad<OrderDto>>,
    on_action: Callback<(String, OrderAction)>,
    on_view_messages: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="card">
            <h2>"All Orders"</h2>

            {move || {
                orders
                    .with(|s| s.error.clone())
                    .map(|err| view! { <div class="alert alert--error">{err}</div> })
            }}

            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Customer"</TableHeaderCell>
                        <TableHeaderCell>"WhatsApp"</TableHeaderCell>
                        <TableHeaderCell>"Product"</TableHeaderCell>
                        <TableHeaderCell>"Amount"</TableHeaderCell>
                        <TableHeaderCell>"Created"</TableHeaderCell>
                        <TableHeaderCell>"Status"</TableHeaderCell>
                        <TableHeaderCell>"Payment"</TableHeaderCell>
                        <TableHeaderCell>"Sentiment"</TableHeaderCell>
                        <TableHeaderCell>"Feedback"</TableHeaderCell>
                        <TableHeaderCell>"Automation"</TableHeaderCell>
                        <TableHeaderCell>"Actions"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || {
                        let state = orders.get();
                        if state.loading && !state.loaded {
                            view! {
                                <TableRow>
                                    <TableCell attr:colspan="11" attr:style="padding: 40px; text-align: center;">
                                        <Flex justify=FlexJustify::Center align=FlexAlign::Center gap=FlexGap::Small>
                                            <Spinner />
                                            "Loading orders..."
                                        </Flex>
                                    </TableCell>
                                </TableRow>
                            }
                            .into_any()
                        } else if state.items.is_empty() {
                            view! {
                                <TableRow>
                                    <TableCell attr:colspan="11" attr:style="padding: 40px; text-align: center;">
                                        "No orders yet"
                                    </TableCell>
                                </TableRow>
                            }
                            .into_any()
                        } else {
                            state
                                .items
                                .into_iter()
                                .map(|order| order_row(order, on_action, on_view_messages))
                                .collect_view()
                                .into_any()
                        }
                    }}
                </TableBody>
            </Table>
        </div>
    }
}

fn order_row(
    order: OrderDto,
    on_action: Callback<(String, OrderAction)>,
    on_view_messages: Callback<String>,
) -> impl IntoView {
    let actions = order_actions(&order);
    let order_id = order.id.clone();
    let order_id_for_messages = order.id.clone();

    let product = order.product_name.clone().unwrap_or_else(|| "-".to_string());
    // Whole rupees, same rounding the storefront used to build the amount
    let amount = order
        .amount
        .map(|a| format!("₹ {}", a.round() as i64))
        .unwrap_or_else(|| "-".to_string());
    let created = format_timestamp(&order.created_at);

    let feedback = match (order.feedback_rating, order.feedback_text.clone()) {
        (None, None) => view! { <span>"-"</span> }.into_any(),
        (rating, text) => view! {
            <div class="feedback">
                {rating.map(|r| view! { <div class="feedback__stars">{"★".repeat(r as usize)}</div> })}
                {text.map(|t| {
                    let title = t.clone();
                    view! { <div class="feedback__text" title=title>{t}</div> }
                })}
            </div>
        }
        .into_any(),
    };

    view! {
        <TableRow>
            <TableCell>{order.user_name.clone()}</TableCell>
            <TableCell>
                <small>{order.whatsapp_number.clone()}</small>
            </TableCell>
            <TableCell>{product}</TableCell>
            <TableCell>{amount}</TableCell>
            <TableCell>
                <small>{created}</small>
            </TableCell>
            <TableCell>
                <Badge variant=order.status.badge_variant()>{order.status.as_str()}</Badge>
            </TableCell>
            <TableCell>
                <Badge variant=order.payment_status.badge_variant()>
                    {order.payment_status.as_str()}
                </Badge>
            </TableCell>
            <TableCell>
                <Badge variant=order.sentiment.badge_variant()>{order.sentiment.as_str()}</Badge>
            </TableCell>
            <TableCell>{feedback}</TableCell>
            <TableCell>
                {if order.automation_enabled {
                    view! { <Badge variant="success">"on"</Badge> }.into_any()
                } else {
                    view! { <Badge variant="neutral">"off"</Badge> }.into_any()
                }}
            </TableCell>
            <TableCell>
                <div class="table__actions">
                    {actions
                        .into_iter()
                        .map(|action| {
                            let id = order_id.clone();
                            view! {
                                <button
                                    class="btn btn--small"
                                    on:click=move |_| on_action.run((id.clone(), action))
                                >
                                    {action.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                    <button
                        class="btn btn--small btn--secondary"
                        on:click=move |_| on_view_messages.run(order_id_for_messages.clone())
                    >
                        "Messages"
                    </button>
                </div>
            </TableCell>
        </TableRow>
    }
}
