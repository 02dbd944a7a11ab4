//! REST API helpers for the storefront endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Read calls return `Option` — a failed poll leaves the last rendered state
//! in place and the caller logs one line. Mutating calls return
//! `Result<(), ApiError>` and are aborted locally (no request sent) when the
//! anti-forgery token is missing from the page.

#![allow(clippy::unused_async)]

use super::types::{
    CartCountResponse, ChatMessagesResponse, NotificationsResponse, SellerMessagesResponse,
};

/// Failure modes for mutating API calls.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApiError {
    /// Anti-forgery token absent from the hosting page; no request was sent.
    MissingCredential,
    /// Request reached the server but came back with a non-OK status.
    Status(u16),
    /// Request failed before a response arrived.
    Network(String),
    /// Server answered `{ "success": false }`.
    Rejected,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingCredential => write!(f, "anti-forgery token not found"),
            Self::Status(code) => write!(f, "request failed with status {code}"),
            Self::Network(e) => write!(f, "network error: {e}"),
            Self::Rejected => write!(f, "server rejected the request"),
        }
    }
}

/// Fetch the current cart item count.
pub async fn fetch_cart_count() -> Option<CartCountResponse> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/cart/api/count/").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Fetch the notification list and unread count.
pub async fn fetch_notifications() -> Option<NotificationsResponse> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/orders/api/notifications/").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Fetch the seller conversation summaries for the launcher list.
pub async fn fetch_seller_messages() -> Option<SellerMessagesResponse> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/orders/api/seller-messages/").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Fetch the full message list for one conversation.
pub async fn fetch_chat_messages(chat_id: i64) -> Option<ChatMessagesResponse> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("/orders/api/chat-messages/?chat_id={chat_id}");
        get_json(&url).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = chat_id;
        None
    }
}

/// Mark a single notification as read.
///
/// # Errors
///
/// Returns an [`ApiError`] when the token is missing, the request fails, or
/// the server does not acknowledge success.
pub async fn mark_notification_read(notification_id: i64) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("/orders/api/mark-read/{notification_id}/");
        post_ack(&url).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = notification_id;
        Err(ApiError::MissingCredential)
    }
}

/// Mark every notification as read.
///
/// # Errors
///
/// Same failure modes as [`mark_notification_read`].
pub async fn mark_all_notifications_read() -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_ack("/orders/api/mark-all-read/").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::MissingCredential)
    }
}

/// Send a chat message. The caller is responsible for rejecting blank text
/// before calling; this function assumes `message` is non-empty.
///
/// # Errors
///
/// Returns an [`ApiError`] when the token is missing, the request fails, or
/// the server does not acknowledge success.
pub async fn send_chat_message(chat_id: i64, message: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let token = crate::util::csrf::token().ok_or(ApiError::MissingCredential)?;
        let body = super::types::ChatSendRequest { chat_id, message: message.to_owned() };

        let resp = gloo_net::http::Request::post("/orders/api/chat-send/")
            .header("X-CSRFToken", &token)
            .json(&body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        check_ack(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (chat_id, message);
        Err(ApiError::MissingCredential)
    }
}

/// GET a JSON payload, returning `None` on any failure.
#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> Option<T> {
    let resp = gloo_net::http::Request::get(url).send().await.ok()?;
    if !resp.ok() {
        return None;
    }
    resp.json::<T>().await.ok()
}

/// POST with the anti-forgery token and no body, expecting `{ success }`.
#[cfg(feature = "hydrate")]
async fn post_ack(url: &str) -> Result<(), ApiError> {
    let token = crate::util::csrf::token().ok_or(ApiError::MissingCredential)?;

    let resp = gloo_net::http::Request::post(url)
        .header("X-CSRFToken", &token)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    check_ack(resp).await
}

#[cfg(feature = "hydrate")]
async fn check_ack(resp: gloo_net::http::Response) -> Result<(), ApiError> {
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    let ack: super::types::AckResponse = resp
        .json()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if ack.success { Ok(()) } else { Err(ApiError::Rejected) }
}
