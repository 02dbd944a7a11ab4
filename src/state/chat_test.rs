use super::*;
use crate::net::types::SellerMessagesResponse;

fn msg(text: &str, time: &str, is_sender: bool) -> ChatMessage {
    ChatMessage { message: text.to_owned(), time: time.to_owned(), is_sender }
}

// =============================================================
// Open
// =============================================================

#[test]
fn open_creates_a_single_open_window() {
    let mut dock = ChatDockState::default();
    let r#gen = dock.open(42, "alice");

    assert!(r#gen.is_some());
    assert_eq!(dock.windows.len(), 1);
    let w = dock.window(42).expect("window");
    assert_eq!(w.state, WindowState::Open);
    assert_eq!(w.username, "alice");
    assert!(w.messages.is_empty());
}

#[test]
fn open_is_idempotent_while_open() {
    let mut dock = ChatDockState::default();
    dock.open(42, "alice");
    let second = dock.open(42, "alice");

    assert!(second.is_none());
    assert_eq!(dock.windows.len(), 1);
}

#[test]
fn open_on_collapsed_window_expands_it() {
    let mut dock = ChatDockState::default();
    dock.open(42, "alice");
    dock.collapse(42);

    let r#gen = dock.open(42, "alice");
    assert!(r#gen.is_some());
    assert_eq!(dock.window(42).expect("window").state, WindowState::Open);
    assert_eq!(dock.windows.len(), 1);
}

// =============================================================
// One record per conversation
// =============================================================

#[test]
fn lifecycle_sequences_never_duplicate_a_conversation() {
    let mut dock = ChatDockState::default();

    dock.open(42, "alice");
    dock.collapse(42);
    dock.expand(42);
    dock.collapse(42);
    dock.expand(42);
    assert_eq!(dock.windows.len(), 1);

    dock.close(42);
    dock.open(42, "alice");
    assert_eq!(dock.windows.len(), 1);
    assert_eq!(dock.bubbles().len(), 0);
}

// =============================================================
// Collapse / expand
// =============================================================

#[test]
fn collapse_turns_the_panel_into_a_bubble() {
    let mut dock = ChatDockState::default();
    dock.open(42, "alice");
    dock.collapse(42);

    let bubbles = dock.bubbles();
    assert_eq!(bubbles.len(), 1);
    assert_eq!(bubbles[0].chat_id, 42);
    assert_eq!(bubble_initial(&bubbles[0].username), 'A');
    assert_eq!(dock.window(42).expect("window").state, WindowState::Collapsed);
}

#[test]
fn expand_restores_the_panel_and_removes_the_bubble() {
    let mut dock = ChatDockState::default();
    dock.open(42, "alice");
    dock.collapse(42);

    let r#gen = dock.expand(42);
    assert!(r#gen.is_some());
    assert_eq!(dock.window(42).expect("window").state, WindowState::Open);
    assert!(dock.bubbles().is_empty());
}

#[test]
fn expand_on_open_or_unknown_conversation_is_a_no_op() {
    let mut dock = ChatDockState::default();
    dock.open(42, "alice");

    assert!(dock.expand(42).is_none());
    assert!(dock.expand(99).is_none());
}

#[test]
fn collapse_of_a_collapsed_window_keeps_its_slot() {
    let mut dock = ChatDockState::default();
    dock.open(1, "alice");
    dock.open(2, "bob");
    dock.collapse(1);
    dock.collapse(2);

    dock.collapse(1);
    assert_eq!(dock.window(1).expect("window").slot, 0);
    assert_eq!(dock.window(2).expect("window").slot, 1);
}

// =============================================================
// Bubble slots
// =============================================================

#[test]
fn bubbles_take_increasing_slots() {
    let mut dock = ChatDockState::default();
    for (id, name) in [(1, "alice"), (2, "bob"), (3, "carol")] {
        dock.open(id, name);
        dock.collapse(id);
    }

    let slots: Vec<usize> = dock.bubbles().iter().map(|w| w.slot).collect();
    assert_eq!(slots, vec![0, 1, 2]);
}

#[test]
fn new_bubble_fills_the_lowest_vacant_slot() {
    let mut dock = ChatDockState::default();
    for (id, name) in [(1, "alice"), (2, "bob"), (3, "carol")] {
        dock.open(id, name);
        dock.collapse(id);
    }
    dock.close(2);

    dock.open(4, "dave");
    dock.collapse(4);
    assert_eq!(dock.window(4).expect("window").slot, 1);
}

#[test]
fn bubble_offsets_follow_slot_spacing() {
    assert_eq!(bubble_offset_px(0), BUBBLE_BASE_PX);
    assert_eq!(bubble_offset_px(2), BUBBLE_BASE_PX + 2 * BUBBLE_SPACING_PX);
}

#[test]
fn bubble_initial_uppercases_and_handles_empty_names() {
    assert_eq!(bubble_initial("alice"), 'A');
    assert_eq!(bubble_initial("émile"), 'É');
    assert_eq!(bubble_initial(""), '?');
}

// =============================================================
// Close
// =============================================================

#[test]
fn close_is_idempotent() {
    let mut dock = ChatDockState::default();
    dock.open(42, "alice");
    dock.close(42);
    dock.close(42);

    assert!(dock.windows.is_empty());
    assert!(dock.bubbles().is_empty());
}

#[test]
fn close_discards_all_conversation_state() {
    let mut dock = ChatDockState::default();
    dock.open(42, "alice");
    dock.apply_messages(42, vec![msg("hi", "10:00", true)]);
    dock.set_draft(42, "half-typed".to_owned());
    dock.close(42);

    dock.open(42, "alice");
    let w = dock.window(42).expect("window");
    assert!(w.messages.is_empty());
    assert!(w.draft.is_empty());
}

// =============================================================
// Poll generations
// =============================================================

#[test]
fn poll_stays_alive_while_open_with_matching_generation() {
    let mut dock = ChatDockState::default();
    let r#gen = dock.open(42, "alice").expect("r#gen");
    assert!(dock.poll_alive(42, r#gen));
}

#[test]
fn collapse_cancels_the_polling_generation() {
    let mut dock = ChatDockState::default();
    let r#gen = dock.open(42, "alice").expect("r#gen");
    dock.collapse(42);
    assert!(!dock.poll_alive(42, r#gen));
}

#[test]
fn close_cancels_the_polling_generation() {
    let mut dock = ChatDockState::default();
    let r#gen = dock.open(42, "alice").expect("r#gen");
    dock.close(42);
    assert!(!dock.poll_alive(42, r#gen));
}

#[test]
fn reopening_invalidates_the_previous_generation() {
    let mut dock = ChatDockState::default();
    let first = dock.open(42, "alice").expect("r#gen");
    dock.collapse(42);
    let second = dock.expand(42).expect("r#gen");

    assert_ne!(first, second);
    assert!(!dock.poll_alive(42, first));
    assert!(dock.poll_alive(42, second));
}

// =============================================================
// Drafts
// =============================================================

#[test]
fn blank_drafts_are_never_sendable() {
    let mut dock = ChatDockState::default();
    dock.open(42, "alice");

    dock.set_draft(42, String::new());
    assert!(dock.draft_to_send(42).is_none());

    dock.set_draft(42, "   ".to_owned());
    assert!(dock.draft_to_send(42).is_none());
}

#[test]
fn draft_to_send_trims_without_clearing() {
    let mut dock = ChatDockState::default();
    dock.open(42, "alice");
    dock.set_draft(42, "  bonjour  ".to_owned());

    assert_eq!(dock.draft_to_send(42).as_deref(), Some("bonjour"));
    // A failed send leaves the input untouched; only an explicit clear empties it.
    assert_eq!(dock.window(42).expect("window").draft, "  bonjour  ");

    dock.clear_draft(42);
    assert!(dock.window(42).expect("window").draft.is_empty());
}

// =============================================================
// Messages
// =============================================================

#[test]
fn apply_messages_replaces_the_full_list() {
    let mut dock = ChatDockState::default();
    dock.open(42, "alice");
    dock.apply_messages(42, vec![msg("old", "09:00", false)]);
    dock.apply_messages(42, vec![msg("hi", "10:00", true), msg("hello", "10:01", false)]);

    let w = dock.window(42).expect("window");
    assert_eq!(w.messages.len(), 2);
    assert_eq!(w.messages[0].message, "hi");
    assert!(w.messages[0].is_sender);
}

#[test]
fn apply_messages_on_unknown_conversation_is_a_no_op() {
    let mut dock = ChatDockState::default();
    dock.apply_messages(42, vec![msg("hi", "10:00", true)]);
    assert!(dock.windows.is_empty());
}

#[test]
fn failed_refresh_leaves_the_previous_list_rendered() {
    let mut dock = ChatDockState::default();
    dock.open(42, "alice");
    dock.apply_messages(42, vec![msg("hi", "10:00", true)]);

    // A failed fetch never reaches apply_messages; the stale list stays.
    let before = dock.window(42).expect("window").messages.clone();
    assert_eq!(dock.window(42).expect("window").messages, before);
    assert_eq!(before.len(), 1);
}

// =============================================================
// Launcher threads
// =============================================================

fn threads_response(unread: u32) -> SellerMessagesResponse {
    serde_json::from_value(serde_json::json!({
        "unread_count": unread,
        "messages": [{
            "chat_id": 42,
            "user": "alice",
            "message": "Is this still available?",
            "time": "09:12",
            "unread_count": unread
        }]
    }))
    .expect("parse")
}

#[test]
fn apply_threads_updates_badge_and_list() {
    let mut dock = ChatDockState::default();
    dock.apply_threads(threads_response(3));

    assert_eq!(dock.unread_total, 3);
    assert!(dock.badge_visible);
    assert_eq!(dock.threads.len(), 1);
}

#[test]
fn zero_unread_hides_the_badge() {
    let mut dock = ChatDockState::default();
    dock.apply_threads(threads_response(0));
    assert!(!dock.badge_visible);
}

#[test]
fn thread_fetch_error_hides_badge_but_keeps_list() {
    let mut dock = ChatDockState::default();
    dock.apply_threads(threads_response(2));
    dock.apply_threads_error();

    assert!(!dock.badge_visible);
    assert_eq!(dock.threads.len(), 1);
}
