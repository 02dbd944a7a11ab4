//! Floating chat dock state: the set of open/collapsed conversations.
//!
//! LIFECYCLE
//! =========
//! Each conversation is keyed by `chat_id` and is either `Open` (full panel)
//! or `Collapsed` (circular bubble). A closed conversation has no record at
//! all — closing discards every bit of local state, and reopening starts a
//! fresh conversation.
//!
//! The dock owns one record per `chat_id`, so the rendered DOM can never
//! contain duplicate panels or bubbles for the same conversation.
//!
//! POLL CANCELLATION
//! =================
//! Every message-polling loop captures the window's `poll_gen` at spawn time
//! and calls [`ChatDockState::poll_alive`] before each fetch. `collapse`,
//! `close`, and re-`open` all advance the generation, so a stale loop exits
//! on its next tick without issuing another request. No DOM probing, no
//! external cancellation token.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::net::types::{ChatMessage, SellerMessagesResponse, SellerThread};

/// Horizontal offset of the first bubble slot, in pixels from the right edge.
pub const BUBBLE_BASE_PX: u32 = 20;
/// Horizontal spacing between adjacent bubble slots, in pixels.
pub const BUBBLE_SPACING_PX: u32 = 64;

/// Visible state of one conversation. Closed conversations have no record.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WindowState {
    #[default]
    Open,
    Collapsed,
}

/// One live conversation: panel or bubble, plus its messages and draft.
#[derive(Clone, Debug)]
pub struct ChatWindow {
    pub chat_id: i64,
    pub username: String,
    pub state: WindowState,
    pub messages: Vec<ChatMessage>,
    pub draft: String,
    /// Bubble slot while collapsed; meaningless while open.
    pub slot: usize,
    /// Generation guard for the message-polling loop.
    pub poll_gen: u64,
}

/// State for the whole chat dock: launcher list plus live conversations.
#[derive(Clone, Debug, Default)]
pub struct ChatDockState {
    pub windows: Vec<ChatWindow>,
    pub threads: Vec<SellerThread>,
    pub unread_total: u32,
    pub badge_visible: bool,
    pub launcher_open: bool,
    next_gen: u64,
}

impl ChatDockState {
    pub fn window(&self, chat_id: i64) -> Option<&ChatWindow> {
        self.windows.iter().find(|w| w.chat_id == chat_id)
    }

    fn window_mut(&mut self, chat_id: i64) -> Option<&mut ChatWindow> {
        self.windows.iter_mut().find(|w| w.chat_id == chat_id)
    }

    fn fresh_gen(&mut self) -> u64 {
        self.next_gen += 1;
        self.next_gen
    }

    /// Open a conversation panel.
    ///
    /// Returns `Some(generation)` when a new polling loop must be started
    /// (fresh open, or a collapsed window expanding). Returns `None` when the
    /// panel is already open — re-opening an open conversation is a no-op.
    pub fn open(&mut self, chat_id: i64, username: &str) -> Option<u64> {
        if let Some(existing) = self.window(chat_id) {
            if existing.state == WindowState::Open {
                return None;
            }
            let r#gen = self.fresh_gen();
            let w = self.window_mut(chat_id)?;
            w.state = WindowState::Open;
            w.poll_gen = r#gen;
            return Some(r#gen);
        }

        let r#gen = self.fresh_gen();
        self.windows.push(ChatWindow {
            chat_id,
            username: username.to_owned(),
            state: WindowState::Open,
            messages: Vec::new(),
            draft: String::new(),
            slot: 0,
            poll_gen: r#gen,
        });
        Some(r#gen)
    }

    /// Collapse an open panel to a bubble. No-op unless currently open.
    ///
    /// The bubble takes the lowest slot not occupied by another bubble, so
    /// the row stays compact after earlier bubbles are removed. Advancing the
    /// generation cancels the panel's polling loop.
    pub fn collapse(&mut self, chat_id: i64) {
        let slot = self.lowest_free_slot(chat_id);
        let r#gen = self.fresh_gen();
        if let Some(w) = self.window_mut(chat_id) {
            if w.state == WindowState::Open {
                w.state = WindowState::Collapsed;
                w.slot = slot;
                w.poll_gen = r#gen;
            }
        }
    }

    /// Expand a collapsed conversation back to a full panel.
    ///
    /// Same contract as [`open`](Self::open): returns the generation for the
    /// new polling loop, or `None` if there is nothing to expand.
    pub fn expand(&mut self, chat_id: i64) -> Option<u64> {
        let username = self.window(chat_id)?.username.clone();
        self.open(chat_id, &username)
    }

    /// Close a conversation and discard all of its state. Idempotent.
    pub fn close(&mut self, chat_id: i64) {
        self.windows.retain(|w| w.chat_id != chat_id);
    }

    /// Whether the polling loop spawned with `r#gen` should issue another fetch.
    pub fn poll_alive(&self, chat_id: i64, r#gen: u64) -> bool {
        self.window(chat_id)
            .is_some_and(|w| w.state == WindowState::Open && w.poll_gen == r#gen)
    }

    /// Replace a conversation's message list with a fresh server snapshot.
    pub fn apply_messages(&mut self, chat_id: i64, messages: Vec<ChatMessage>) {
        if let Some(w) = self.window_mut(chat_id) {
            w.messages = messages;
        }
    }

    pub fn set_draft(&mut self, chat_id: i64, text: String) {
        if let Some(w) = self.window_mut(chat_id) {
            w.draft = text;
        }
    }

    /// The draft text to send, or `None` when it is blank after trimming.
    /// Does not mutate: the draft is cleared only after a successful send.
    pub fn draft_to_send(&self, chat_id: i64) -> Option<String> {
        let trimmed = self.window(chat_id)?.draft.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_owned())
        }
    }

    pub fn clear_draft(&mut self, chat_id: i64) {
        if let Some(w) = self.window_mut(chat_id) {
            w.draft.clear();
        }
    }

    /// Apply a seller-messages poll result to the launcher list and badge.
    pub fn apply_threads(&mut self, resp: SellerMessagesResponse) {
        self.unread_total = resp.unread_count;
        self.threads = resp.messages;
        self.badge_visible = self.unread_total > 0;
    }

    /// A failed seller-messages poll hides the badge but keeps the last
    /// rendered thread list in place.
    pub fn apply_threads_error(&mut self) {
        self.badge_visible = false;
    }

    /// Bubbles to render, ordered by slot for a stable DOM order.
    pub fn bubbles(&self) -> Vec<&ChatWindow> {
        let mut collapsed: Vec<&ChatWindow> = self
            .windows
            .iter()
            .filter(|w| w.state == WindowState::Collapsed)
            .collect();
        collapsed.sort_by_key(|w| w.slot);
        collapsed
    }

    /// Lowest bubble slot not occupied by another collapsed conversation.
    fn lowest_free_slot(&self, chat_id: i64) -> usize {
        let taken: Vec<usize> = self
            .windows
            .iter()
            .filter(|w| w.state == WindowState::Collapsed && w.chat_id != chat_id)
            .map(|w| w.slot)
            .collect();
        (0..).find(|slot| !taken.contains(slot)).unwrap_or(0)
    }
}

/// Bubble label: first letter of the username, uppercased.
pub fn bubble_initial(username: &str) -> char {
    username
        .chars()
        .next()
        .and_then(|c| c.to_uppercase().next())
        .unwrap_or('?')
}

/// Horizontal offset for a bubble slot, in pixels from the right edge.
pub fn bubble_offset_px(slot: usize) -> u32 {
    #[allow(clippy::cast_possible_truncation)]
    let slot = slot as u32;
    BUBBLE_BASE_PX + slot * BUBBLE_SPACING_PX
}
