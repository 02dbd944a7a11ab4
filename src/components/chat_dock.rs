//! Floating chat dock: seller-message launcher, open panels, and bubbles.

use leptos::prelude::*;

use crate::components::chat_window::ChatWindow;
use crate::poll;
use crate::state::chat::{ChatDockState, WindowState, bubble_initial, bubble_offset_px};

/// Bottom-corner chat dock.
///
/// Renders the launcher button with its unread badge, the thread list when
/// the launcher is open, one [`ChatWindow`] per open conversation, and one
/// bubble per collapsed conversation. Everything is keyed by `chat_id` off
/// [`ChatDockState`], so a conversation can never appear twice.
#[component]
pub fn ChatDock() -> impl IntoView {
    let dock = expect_context::<RwSignal<ChatDockState>>();

    let badge_visible = move || dock.get().badge_visible;
    let unread_total = move || dock.get().unread_total.to_string();
    let launcher_open = move || dock.get().launcher_open;

    let open_ids = move || {
        dock.get()
            .windows
            .iter()
            .filter(|w| w.state == WindowState::Open)
            .map(|w| w.chat_id)
            .collect::<Vec<_>>()
    };

    let bubbles = move || {
        dock.get()
            .bubbles()
            .iter()
            .map(|w| (w.chat_id, w.username.clone(), w.slot))
            .collect::<Vec<_>>()
    };

    let on_toggle_launcher = move |_| dock.update(|d| d.launcher_open = !d.launcher_open);

    view! {
        <div class="chat-dock">
            <button class="chat-dock__launcher" on:click=on_toggle_launcher title="Messages">
                <svg viewBox="0 0 20 20" aria-hidden="true">
                    <rect x="3" y="3" width="14" height="10" rx="2" />
                    <path d="M7 13 L7 17 L11 13" />
                </svg>
                <Show when=badge_visible>
                    <span class="chat-dock__count">{unread_total}</span>
                </Show>
            </button>

            <Show when=launcher_open>
                <div class="chat-dock__threads">
                    {move || {
                        let threads = dock.get().threads;
                        if threads.is_empty() {
                            return view! {
                                <div class="chat-dock__empty">"No messages"</div>
                            }
                                .into_any();
                        }

                        threads
                            .into_iter()
                            .map(|t| {
                                let chat_id = t.chat_id;
                                let user = t.user.clone();
                                let on_open = move |_| {
                                    poll::open_conversation(dock, chat_id, &user);
                                    dock.update(|d| d.launcher_open = false);
                                };
                                view! {
                                    <button class="chat-dock__thread" on:click=on_open>
                                        <span class="chat-dock__thread-user">{t.user}</span>
                                        <span class="chat-dock__thread-preview">{t.message}</span>
                                        <span class="chat-dock__thread-time">{t.time}</span>
                                        <Show when=move || { t.unread_count > 0 }>
                                            <span class="chat-dock__thread-unread">
                                                {t.unread_count.to_string()}
                                            </span>
                                        </Show>
                                    </button>
                                }
                            })
                            .collect::<Vec<_>>()
                            .into_any()
                    }}
                </div>
            </Show>

            <div class="chat-dock__windows">
                <For each=open_ids key=|id| *id children=move |id| {
                    view! { <ChatWindow chat_id=id/> }
                }/>
            </div>

            <For
                each=bubbles
                key=|(id, _, _)| *id
                children=move |(chat_id, username, slot)| {
                    let label = bubble_initial(&username).to_string();
                    let offset = format!("{}px", bubble_offset_px(slot));
                    view! {
                        <button
                            class="chat-dock__bubble"
                            style:right=offset
                            title=username
                            on:click=move |_| poll::expand_conversation(dock, chat_id)
                        >
                            {label}
                        </button>
                    }
                }
            />
        </div>
    }
}
