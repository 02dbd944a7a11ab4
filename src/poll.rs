//! Centralized polling and network orchestration.
//!
//! Every recurring fetch loop in the page is spawned from this module, with
//! its interval declared next to it: the page-level cart, notification, and
//! seller-message pollers, and one message poller per open conversation.
//! Components never start timers themselves.
//!
//! Per-conversation loops are cancelled through the generation guard in
//! [`ChatDockState`]: the loop captures the generation returned by
//! `open`/`expand` and exits before its next fetch once the guard no longer
//! matches. Page-level loops run for the lifetime of the page.
//!
//! There is no retry or backoff anywhere: a failed fetch logs one line,
//! leaves the last rendered state in place, and the next tick is the retry.

use leptos::prelude::{RwSignal, Update};
#[cfg(feature = "hydrate")]
use leptos::prelude::WithUntracked;

use crate::state::cart::CartState;
use crate::state::chat::ChatDockState;
use crate::state::notifications::NotificationState;

/// Message refresh interval for an open conversation.
pub const CHAT_POLL_MS: u64 = 3000;
/// Page-level refresh interval for cart, notifications, and seller messages.
pub const PAGE_POLL_MS: u64 = 5000;

/// Start the page-level pollers. Called once from the root component.
pub fn start_page_pollers(
    cart: RwSignal<CartState>,
    notifications: RwSignal<NotificationState>,
    dock: RwSignal<ChatDockState>,
) {
    #[cfg(feature = "hydrate")]
    {
        crate::util::notify::request_permission();

        leptos::task::spawn_local(async move {
            loop {
                refresh_cart(cart).await;
                sleep_ms(PAGE_POLL_MS).await;
            }
        });

        leptos::task::spawn_local(async move {
            loop {
                refresh_notifications(notifications).await;
                sleep_ms(PAGE_POLL_MS).await;
            }
        });

        leptos::task::spawn_local(async move {
            loop {
                refresh_seller_threads(dock).await;
                sleep_ms(PAGE_POLL_MS).await;
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (cart, notifications, dock);
    }
}

/// Open a conversation panel and start its message poller.
///
/// Safe to call repeatedly: re-opening an already open conversation neither
/// duplicates the panel nor starts a second loop.
pub fn open_conversation(dock: RwSignal<ChatDockState>, chat_id: i64, username: &str) {
    let started = dock
        .try_update(|d| d.open(chat_id, username))
        .flatten();
    if let Some(generation) = started {
        spawn_message_poll(dock, chat_id, generation);
    }
}

/// Expand a collapsed conversation and restart its message poller.
pub fn expand_conversation(dock: RwSignal<ChatDockState>, chat_id: i64) {
    let started = dock.try_update(|d| d.expand(chat_id)).flatten();
    if let Some(generation) = started {
        spawn_message_poll(dock, chat_id, generation);
    }
}

/// Send the current draft for a conversation.
///
/// A blank draft is a silent no-op: no request is made. On success the draft
/// is cleared and the message list refetched — the refetch, not a local
/// append, is the source of truth. On failure the draft stays untouched.
pub fn send_draft(dock: RwSignal<ChatDockState>, chat_id: i64) {
    let Some(text) = dock.try_update(|d| d.draft_to_send(chat_id)).flatten() else {
        return;
    };

    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            match crate::net::api::send_chat_message(chat_id, &text).await {
                Ok(()) => {
                    dock.update(|d| d.clear_draft(chat_id));
                    refresh_chat_messages(dock, chat_id).await;
                }
                Err(e) => {
                    leptos::logging::warn!("chat send failed for {chat_id}: {e}");
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = text;
    }
}

/// Mark one notification as read, then refresh the list.
pub fn mark_read(notifications: RwSignal<NotificationState>, notification_id: i64) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            match crate::net::api::mark_notification_read(notification_id).await {
                Ok(()) => refresh_notifications(notifications).await,
                Err(e) => {
                    leptos::logging::warn!("mark-read failed for {notification_id}: {e}");
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (notifications, notification_id);
    }
}

/// Mark every notification as read, then refresh the list.
pub fn mark_all_read(notifications: RwSignal<NotificationState>) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            match crate::net::api::mark_all_notifications_read().await {
                Ok(()) => refresh_notifications(notifications).await,
                Err(e) => {
                    leptos::logging::warn!("mark-all-read failed: {e}");
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = notifications;
    }
}

/// Refetch one conversation's message list and re-render it in full.
///
/// On failure the previously rendered list stays in place.
#[cfg(feature = "hydrate")]
pub async fn refresh_chat_messages(dock: RwSignal<ChatDockState>, chat_id: i64) {
    match crate::net::api::fetch_chat_messages(chat_id).await {
        Some(resp) => dock.update(|d| d.apply_messages(chat_id, resp.messages)),
        None => {
            leptos::logging::warn!("chat message fetch failed for {chat_id}");
        }
    }
}

/// Spawn the recurring message poll for one conversation.
///
/// The loop fetches immediately, then once per [`CHAT_POLL_MS`] for as long
/// as the generation guard matches. Collapse, close, or a later re-open all
/// advance the guard, so the loop exits before issuing another fetch.
fn spawn_message_poll(dock: RwSignal<ChatDockState>, chat_id: i64, generation: u64) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            refresh_chat_messages(dock, chat_id).await;
            loop {
                sleep_ms(CHAT_POLL_MS).await;
                let alive = dock.with_untracked(|d| d.poll_alive(chat_id, generation));
                if !alive {
                    break;
                }
                refresh_chat_messages(dock, chat_id).await;
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (dock, chat_id, generation);
    }
}

#[cfg(feature = "hydrate")]
async fn refresh_cart(cart: RwSignal<CartState>) {
    match crate::net::api::fetch_cart_count().await {
        Some(resp) => cart.update(|c| c.apply_count(resp.count)),
        None => {
            leptos::logging::warn!("cart count fetch failed");
            cart.update(CartState::apply_error);
        }
    }
}

#[cfg(feature = "hydrate")]
async fn refresh_notifications(notifications: RwSignal<NotificationState>) {
    match crate::net::api::fetch_notifications().await {
        Some(resp) => {
            let fresh = notifications
                .try_update(|n| n.apply_fetch(resp))
                .unwrap_or_default();
            for item in fresh {
                crate::util::notify::show(&item.title, &item.message);
            }
        }
        None => {
            leptos::logging::warn!("notification fetch failed");
            notifications.update(NotificationState::apply_error);
        }
    }
}

#[cfg(feature = "hydrate")]
async fn refresh_seller_threads(dock: RwSignal<ChatDockState>) {
    match crate::net::api::fetch_seller_messages().await {
        Some(resp) => dock.update(|d| d.apply_threads(resp)),
        None => {
            leptos::logging::warn!("seller message fetch failed");
            dock.update(ChatDockState::apply_threads_error);
        }
    }
}

#[cfg(feature = "hydrate")]
async fn sleep_ms(ms: u64) {
    gloo_timers::future::sleep(std::time::Duration::from_millis(ms)).await;
}
