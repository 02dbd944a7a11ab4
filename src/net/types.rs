//! Wire types for the storefront JSON API.
//!
//! Shapes mirror the server responses exactly; fields the UI does not read
//! are still deserialized so a payload change shows up as a parse failure
//! rather than silently dropped data.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

/// `GET /cart/api/count/` response.
#[derive(Clone, Copy, Debug, serde::Deserialize)]
pub struct CartCountResponse {
    pub count: u32,
}

/// `GET /orders/api/notifications/` response.
#[derive(Clone, Debug, serde::Deserialize)]
pub struct NotificationsResponse {
    pub notifications: Vec<NotificationItem>,
    pub unread_count: u32,
}

/// A single notification entry in the bell dropdown.
#[derive(Clone, Debug, serde::Deserialize)]
pub struct NotificationItem {
    pub id: i64,
    pub title: String,
    pub message: String,
    pub created_at: String,
    pub is_read: bool,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub click_url: Option<String>,
}

/// `GET /orders/api/seller-messages/` response.
#[derive(Clone, Debug, serde::Deserialize)]
pub struct SellerMessagesResponse {
    pub unread_count: u32,
    pub messages: Vec<SellerThread>,
}

/// One conversation summary in the seller-message launcher list.
#[derive(Clone, Debug, serde::Deserialize)]
pub struct SellerThread {
    pub chat_id: i64,
    pub user: String,
    pub message: String,
    pub time: String,
    pub unread_count: u32,
}

/// `GET /orders/api/chat-messages/?chat_id={id}` response.
#[derive(Clone, Debug, serde::Deserialize)]
pub struct ChatMessagesResponse {
    pub messages: Vec<ChatMessage>,
}

/// A single message inside a chat window. Render-only; never mutated locally.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize)]
pub struct ChatMessage {
    pub message: String,
    pub time: String,
    pub is_sender: bool,
}

/// `POST /orders/api/chat-send/` request body.
#[derive(Clone, Debug, serde::Serialize)]
pub struct ChatSendRequest {
    pub chat_id: i64,
    pub message: String,
}

/// Generic `{ "success": bool }` acknowledgement for mutating calls.
#[derive(Clone, Copy, Debug, serde::Deserialize)]
pub struct AckResponse {
    pub success: bool,
}
