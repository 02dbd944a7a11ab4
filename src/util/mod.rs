//! Browser utility helpers shared across components.

pub mod csrf;
pub mod notify;
