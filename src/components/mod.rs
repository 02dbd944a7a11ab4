//! Storefront UI components.

pub mod cart_badge;
pub mod chat_dock;
pub mod chat_window;
pub mod notification_bell;
