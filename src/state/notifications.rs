//! Notification bell state: unread badge, dropdown list, and detection of
//! newly arrived items for native browser notifications.

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

use crate::net::types::{NotificationItem, NotificationsResponse};

/// State for the notification bell and its dropdown.
#[derive(Clone, Debug, Default)]
pub struct NotificationState {
    pub items: Vec<NotificationItem>,
    pub unread_count: u32,
    pub badge_visible: bool,
    pub dropdown_open: bool,
    /// Unread count from the previous successful poll; used to detect new
    /// arrivals. Zero means "no baseline yet" and suppresses alerts so a
    /// fresh page load does not replay old notifications.
    previous_unread: u32,
}

impl NotificationState {
    /// Apply a successful poll result.
    ///
    /// Returns the notifications that arrived since the previous poll, for
    /// the caller to surface as native browser notifications. The first poll
    /// after page load establishes the baseline and returns nothing.
    pub fn apply_fetch(&mut self, resp: NotificationsResponse) -> Vec<NotificationItem> {
        let fresh = if resp.unread_count > self.previous_unread && self.previous_unread > 0 {
            #[allow(clippy::cast_possible_truncation)]
            let new_count = (resp.unread_count - self.previous_unread) as usize;
            resp.notifications
                .iter()
                .filter(|n| !n.is_read)
                .take(new_count)
                .cloned()
                .collect()
        } else {
            Vec::new()
        };

        self.previous_unread = resp.unread_count;
        self.unread_count = resp.unread_count;
        self.badge_visible = resp.unread_count > 0;
        self.items = resp.notifications;
        fresh
    }

    /// A failed poll hides the badge and keeps the last rendered list.
    pub fn apply_error(&mut self) {
        self.badge_visible = false;
    }

    pub fn toggle_dropdown(&mut self) {
        self.dropdown_open = !self.dropdown_open;
    }
}
