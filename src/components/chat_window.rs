//! A single floating chat panel: header, message history, and input row.

use leptos::prelude::*;

use crate::poll;
use crate::state::chat::ChatDockState;

/// One open conversation panel.
///
/// The parent dock renders one of these per `Open` conversation; minimize
/// collapses it to a bubble, close discards the conversation entirely. The
/// message list is re-rendered in full from the latest server snapshot and
/// kept scrolled to the newest message.
#[component]
pub fn ChatWindow(chat_id: i64) -> impl IntoView {
    let dock = expect_context::<RwSignal<ChatDockState>>();

    let messages_ref = NodeRef::<leptos::html::Div>::new();

    let username = move || {
        dock.get()
            .window(chat_id)
            .map(|w| w.username.clone())
            .unwrap_or_default()
    };
    let messages = move || {
        dock.get()
            .window(chat_id)
            .map(|w| w.messages.clone())
            .unwrap_or_default()
    };
    let draft = move || {
        dock.get()
            .window(chat_id)
            .map(|w| w.draft.clone())
            .unwrap_or_default()
    };

    // Pin the scroll position to the newest message after each re-render.
    Effect::new(move || {
        let _ = messages().len();

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let do_send = move || poll::send_draft(dock, chat_id);

    let on_send_click = move |_| do_send();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    let on_minimize = move |_| dock.update(|d| d.collapse(chat_id));
    let on_close = move |_| dock.update(|d| d.close(chat_id));

    let can_send = move || {
        dock.get()
            .window(chat_id)
            .is_some_and(|w| !w.draft.trim().is_empty())
    };

    view! {
        <div class="chat-window">
            <div class="chat-window__header">
                <span class="chat-window__title">{username}</span>
                <button class="chat-window__minimize" on:click=on_minimize title="Minimize">
                    "–"
                </button>
                <button class="chat-window__close" on:click=on_close title="Close">
                    "✕"
                </button>
            </div>

            <div class="chat-window__messages" node_ref=messages_ref>
                {move || {
                    let messages = messages();
                    if messages.is_empty() {
                        return view! {
                            <div class="chat-window__empty">"No messages yet"</div>
                        }
                            .into_any();
                    }

                    messages
                        .into_iter()
                        .map(|msg| {
                            view! {
                                <div
                                    class="chat-window__message"
                                    class:chat-window__message--sent=msg.is_sender
                                    class:chat-window__message--received=!msg.is_sender
                                >
                                    <span class="chat-window__text">{msg.message}</span>
                                    <span class="chat-window__time">{msg.time}</span>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                        .into_any()
                }}
            </div>

            <div class="chat-window__input-row">
                <input
                    class="chat-window__input"
                    type="text"
                    placeholder="Write a message..."
                    prop:value=draft
                    on:input=move |ev| {
                        dock.update(|d| d.set_draft(chat_id, event_target_value(&ev)));
                    }
                    on:keydown=on_keydown
                />
                <button
                    class="btn btn--primary chat-window__send"
                    on:click=on_send_click
                    disabled=move || !can_send()
                >
                    "Send"
                </button>
            </div>
        </div>
    }
}
