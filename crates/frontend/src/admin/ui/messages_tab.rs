use contracts::admin::MessageLogDto;
use leptos::prelude::*;
use thaw::*;

use crate::admin::state::CollectionLoad;
use crate::shared::components::ui::Badge;
use crate::shared::date_utils::format_timestamp;

#[component]
pub fn MessagesTab(
    messages: RwSignal<CollectionLoad<MessageLogDto>>,
    /// Order id the log is narrowed to, if any.
    filter: RwSignal<Option<String>>,
    #[prop(into)] syncing: Signal<bool>,
    /// Transient status line from the last sync.
    #[prop(into)] notice: Signal<Option<String>>,
    on_sync: Callback<()>,
    on_filter_cleared: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="card">
            <div class="card__header">
                <h2>"Message Logs"</h2>
                <Flex align=FlexAlign::Center gap=FlexGap::Small>
                    {move || notice.get().map(|msg| view! { <span class="card__status">{msg}</span> })}
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| on_sync.run(())
                        disabled=syncing
                    >
                        {move || if syncing.get() { "Syncing..." } else { "Sync from WhatsApp" }}
                    </Button>
                </Flex>
            </div>

            {move || {
                filter
                    .get()
                    .map(|order_id| view! {
                        <div class="filter-chip">
                            "Messages for order " <code>{order_id}</code>
                            <button
                                class="filter-chip__clear"
                                on:click=move |_| on_filter_cleared.run(())
                            >
                                "Show all"
                            </button>
                        </div>
                    })
            }}

            {move || {
                messages
                    .with(|s| s.error.clone())
                    .map(|err| view! { <div class="alert alert--error">{err}</div> })
            }}

            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Time"</TableHeaderCell>
                        <TableHeaderCell>"Type"</TableHeaderCell>
                        <TableHeaderCell>"Direction"</TableHeaderCell>
                        <TableHeaderCell>"Message"</TableHeaderCell>
                        <TableHeaderCell>"Sentiment"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || {
                        let state = messages.get();
                        if state.loading && !state.loaded {
                            view! {
                                <TableRow>
                                    <TableCell attr:colspan="5" attr:style="padding: 40px; text-align: center;">
                                        <Flex justify=FlexJustify::Center align=FlexAlign::Center gap=FlexGap::Small>
                                            <Spinner />
                                            "Loading messages..."
                                        </Flex>
                                    </TableCell>
                                </TableRow>
                            }
                            .into_any()
                        } else if state.items.is_empty() {
                            view! {
                                <TableRow>
                                    <TableCell attr:colspan="5" attr:style="padding: 40px; text-align: center;">
                                        "No messages yet"
                                    </TableCell>
                                </TableRow>
                            }
                            .into_any()
                        } else {
                            state
                                .items
                                .into_iter()
                                .map(message_row)
                                .collect_view()
                                .into_any()
                        }
                    }}
                </TableBody>
            </Table>
        </div>
    }
}

fn message_row(msg: MessageLogDto) -> impl IntoView {
    let sent_at = format_timestamp(&msg.sent_at);
    let direction = if msg.is_incoming {
        view! { <Badge variant="primary">"In"</Badge> }.into_any()
    } else {
        view! { <Badge variant="neutral">"Out"</Badge> }.into_any()
    };
    let sentiment = match msg.sentiment {
        Some(sentiment) => view! {
            <Badge variant=sentiment.badge_variant()>{sentiment.as_str()}</Badge>
        }
        .into_any(),
        None => view! { <span>"-"</span> }.into_any(),
    };

    view! {
        <TableRow>
            <TableCell>
                <small>{sent_at}</small>
            </TableCell>
            <TableCell>
                <small>{msg.message_type.as_str()}</small>
            </TableCell>
            <TableCell>{direction}</TableCell>
            <TableCell>
                <div class="message-content">{msg.message_content}</div>
            </TableCell>
            <TableCell>{sentiment}</TableCell>
        </TableRow>
    }
}
