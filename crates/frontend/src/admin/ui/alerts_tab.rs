use contracts::admin::AlertDto;
use leptos::prelude::*;
use thaw::*;

use crate::admin::state::{alert_offers_cancel, CollectionLoad};
use crate::shared::components::ui::Badge;
use crate::shared::date_utils::format_timestamp;

#[component]
pub fn AlertsTab(
    alerts: RwSignal<CollectionLoad<AlertDto>>,
    on_resolve: Callback<String>,
    on_cancel_order: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="card">
            <h2>"System Alerts"</h2>

            {move || {
                alerts
                    .with(|s| s.error.clone())
                    .map(|err| view! { <div class="alert alert--error">{err}</div> })
            }}

            {move || {
                let state = alerts.get();
                if state.loading && !state.loaded {
                    view! {
                        <Flex justify=FlexJustify::Center align=FlexAlign::Center gap=FlexGap::Small>
                            <Spinner />
                            "Loading alerts..."
                        </Flex>
                    }
                    .into_any()
                } else if state.items.is_empty() {
                    view! { <div class="empty-state">"No alerts"</div> }.into_any()
                } else {
                    state
                        .items
                        .into_iter()
                        .map(|alert| alert_card(alert, on_resolve, on_cancel_order))
                        .collect_view()
                        .into_any()
                }
            }}
        </div>
    }
}

fn alert_card(
    alert: AlertDto,
    on_resolve: Callback<String>,
    on_cancel_order: Callback<String>,
) -> impl IntoView {
    let show_cancel = alert_offers_cancel(&alert);
    let resolved = alert.resolved;
    let alert_id = alert.id.clone();
    let order_id = alert.order_id.clone();
    let created = format_timestamp(&alert.created_at);
    let card_class = if resolved {
        "alert-card alert-card--resolved"
    } else {
        "alert-card alert-card--open"
    };

    view! {
        <div class=card_class>
            <div class="alert-card__body">
                <strong>{alert.reason.as_str()}</strong>
                <p class="alert-card__description">{alert.description}</p>
                <small>"Created: " {created}</small>
            </div>
            <div class="alert-card__actions">
                {show_cancel
                    .then(|| {
                        let order_id = order_id.clone();
                        view! {
                            <button
                                class="btn btn--danger"
                                on:click=move |_| on_cancel_order.run(order_id.clone())
                            >
                                "Cancel Order"
                            </button>
                        }
                    })}
                {(!resolved)
                    .then(|| {
                        let alert_id = alert_id.clone();
                        view! {
                            <button
                                class="btn btn--success"
                                on:click=move |_| on_resolve.run(alert_id.clone())
                            >
                                "Resolve"
                            </button>
                        }
                    })}
                {resolved.then(|| view! { <Badge variant="success">"Resolved"</Badge> })}
            </div>
        </div>
    }
}
