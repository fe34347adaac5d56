//! Admin dashboard: three independently refreshed collections behind tabs,
//! a 30-second poll owned by the view's lifetime, and mutation actions that
//! always re-fetch instead of patching local state.

use contracts::admin::{AlertDto, MessageLogDto};
use contracts::orders::OrderDto;
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::alerts_tab::AlertsTab;
use super::messages_tab::MessagesTab;
use super::orders_tab::OrdersTab;
use crate::admin::api;
use crate::admin::state::{AdminTab, CollectionLoad, OrderAction};
use crate::orders::api as orders_api;

/// Poll interval for the dashboard collections.
const REFRESH_INTERVAL_MS: u32 = 30_000;

/// How long the sync status line stays on screen.
const NOTICE_TIMEOUT_MS: u32 = 5_000;

fn confirm_dialog(message: &str) -> bool {
    web_sys::window()
        .map(|win| win.confirm_with_message(message).unwrap_or(false))
        .unwrap_or(false)
}

fn alert_dialog(message: &str) {
    if let Some(win) = web_sys::window() {
        let _ = win.alert_with_message(message);
    }
}

#[component]
pub fn AdminDashboard() -> impl IntoView {
    let orders = RwSignal::new(CollectionLoad::<OrderDto>::default());
    let messages = RwSignal::new(CollectionLoad::<MessageLogDto>::default());
    let alerts = RwSignal::new(CollectionLoad::<AlertDto>::default());
    let active_tab = RwSignal::new(AdminTab::Orders);
    let message_filter = RwSignal::new(None::<String>);
    let (syncing, set_syncing) = signal(false);
    let (notice, set_notice) = signal(None::<String>);

    // A torn-down dashboard must not apply late responses or keep polling.
    let disposed = StoredValue::new(false);
    on_cleanup(move || disposed.set_value(true));

    let load_orders = move || {
        orders.update(|s| s.start());
        spawn_local(async move {
            let result = api::fetch_orders(0, api::ORDERS_PAGE_LIMIT).await;
            if disposed.get_value() {
                return;
            }
            match result {
                Ok(items) => orders.update(|s| s.finish(items)),
                Err(e) => {
                    log!("Failed to load orders: {}", e);
                    orders.update(|s| s.fail(e));
                }
            }
        });
    };

    let load_messages = move || {
        messages.update(|s| s.start());
        let order_id = message_filter.get_untracked();
        spawn_local(async move {
            let result =
                api::fetch_messages(order_id.as_deref(), 0, api::MESSAGES_PAGE_LIMIT).await;
            if disposed.get_value() {
                return;
            }
            match result {
                Ok(items) => messages.update(|s| s.finish(items)),
                Err(e) => {
                    log!("Failed to load messages: {}", e);
                    messages.update(|s| s.fail(e));
                }
            }
        });
    };

    let load_alerts = move || {
        alerts.update(|s| s.start());
        spawn_local(async move {
            let result = api::fetch_alerts(None, 0, api::ALERTS_PAGE_LIMIT).await;
            if disposed.get_value() {
                return;
            }
            match result {
                Ok(items) => alerts.update(|s| s.finish(items)),
                Err(e) => {
                    log!("Failed to load alerts: {}", e);
                    alerts.update(|s| s.fail(e));
                }
            }
        });
    };

    // Three independent fetches: a failing endpoint only marks its own tab.
    // Every mutation funnels through this; the server snapshot is the only
    // state the dashboard ever shows.
    let load_data = move || {
        load_orders();
        load_messages();
        load_alerts();
    };

    // Initial load plus the poll. The loop checks the disposal flag each
    // tick, so leaving the page stops it at the next interval.
    Effect::new(move |_| {
        load_data();
        spawn_local(async move {
            loop {
                gloo_timers::future::TimeoutFuture::new(REFRESH_INTERVAL_MS).await;
                if disposed.get_value() {
                    break;
                }
                load_data();
            }
        });
    });

    let run_order_action = Callback::new(move |(order_id, action): (String, OrderAction)| {
        spawn_local(async move {
            let result = match action {
                OrderAction::MarkPaid => orders_api::update_payment(&order_id, true).await,
                OrderAction::Process => orders_api::mark_in_process(&order_id).await,
                OrderAction::Ship => orders_api::mark_shipped(&order_id).await,
                OrderAction::OutForDelivery => orders_api::mark_out_for_delivery(&order_id).await,
                OrderAction::Deliver => orders_api::mark_delivered(&order_id).await,
            };
            if disposed.get_value() {
                return;
            }
            match result {
                Ok(()) => load_data(),
                Err(e) => {
                    log!("{} failed for order {}: {}", action.label(), order_id, e);
                    alert_dialog(&format!("Failed to {}: {}", action.label(), e));
                }
            }
        });
    });

    let view_messages = Callback::new(move |order_id: String| {
        message_filter.set(Some(order_id));
        active_tab.set(AdminTab::Messages);
        load_messages();
    });

    let clear_message_filter = Callback::new(move |_: ()| {
        message_filter.set(None);
        load_messages();
    });

    let resolve_alert = Callback::new(move |alert_id: String| {
        spawn_local(async move {
            let result = api::resolve_alert(&alert_id).await;
            if disposed.get_value() {
                return;
            }
            match result {
                Ok(()) => load_data(),
                Err(e) => {
                    log!("Resolve failed for alert {}: {}", alert_id, e);
                    alert_dialog(&format!("Failed to resolve alert: {}", e));
                }
            }
        });
    });

    let cancel_order = Callback::new(move |order_id: String| {
        if !confirm_dialog(
            "Are you sure you want to cancel this order? The customer will be notified via WhatsApp.",
        ) {
            return;
        }
        spawn_local(async move {
            let result = api::cancel_order(&order_id).await;
            if disposed.get_value() {
                return;
            }
            match result {
                Ok(()) => {
                    load_data();
                    alert_dialog("Order cancelled and customer notified!");
                }
                Err(e) => {
                    log!("Cancel failed for order {}: {}", order_id, e);
                    alert_dialog(&format!("Failed to cancel order: {}", e));
                }
            }
        });
    });

    let sync = Callback::new(move |_: ()| {
        if syncing.get_untracked() {
            return;
        }
        set_syncing.set(true);
        spawn_local(async move {
            let result = api::sync_messages().await;
            if disposed.get_value() {
                return;
            }
            set_syncing.set(false);
            match result {
                Ok(response) => {
                    set_notice.set(Some(response.message));
                    load_data();
                    spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(NOTICE_TIMEOUT_MS).await;
                        if !disposed.get_value() {
                            set_notice.set(None);
                        }
                    });
                }
                Err(e) => {
                    log!("Message sync failed: {}", e);
                    alert_dialog(&format!("Failed to sync messages: {}", e));
                }
            }
        });
    });

    let orders_count = Signal::derive(move || orders.with(|s| s.items.len()));
    let messages_count = Signal::derive(move || messages.with(|s| s.items.len()));
    let open_alerts_count =
        Signal::derive(move || alerts.with(|s| s.items.iter().filter(|a| !a.resolved).count()));

    let tab_button = move |tab: AdminTab, label: &'static str, count: Signal<usize>| {
        view! {
            <button
                class=move || {
                    if active_tab.get() == tab {
                        "btn btn--primary"
                    } else {
                        "btn btn--secondary"
                    }
                }
                on:click=move |_| active_tab.set(tab)
            >
                {label} " (" {move || count.get()} ")"
            </button>
        }
    };

    view! {
        <div class="dashboard">
            <h1 class="dashboard__title">"Admin Dashboard"</h1>

            <div class="dashboard__tabs">
                {tab_button(AdminTab::Orders, "Orders", orders_count)}
                {tab_button(AdminTab::Messages, "Messages", messages_count)}
                {tab_button(AdminTab::Alerts, "Alerts", open_alerts_count)}
            </div>

            {move || match active_tab.get() {
                AdminTab::Orders => view! {
                    <OrdersTab
                        orders=orders
                        on_action=run_order_action
                        on_view_messages=view_messages
                    />
                }
                .into_any(),
                AdminTab::Messages => view! {
                    <MessagesTab
                        messages=messages
                        filter=message_filter
                        syncing=syncing
                        notice=notice
                        on_sync=sync
                        on_filter_cleared=clear_message_filter
                    />
                }
                .into_any(),
                AdminTab::Alerts => view! {
                    <AlertsTab
                        alerts=alerts
                        on_resolve=resolve_alert
                        on_cancel_order=cancel_order
                    />
                }
                .into_any(),
            }}
        </div>
    }
}
