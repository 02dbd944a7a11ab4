//! Native browser notifications for newly arrived unread items.
//!
//! Permission is requested once at startup; display is a no-op unless the
//! user has granted it. Requires a browser environment.

/// Ask for notification permission if the user has not decided yet.
pub fn request_permission() {
    #[cfg(feature = "hydrate")]
    {
        if web_sys::Notification::permission() == web_sys::NotificationPermission::Default {
            let _ = web_sys::Notification::request_permission();
        }
    }
}

/// Show a native notification with the given title and body.
///
/// Silently does nothing when permission was denied or never granted.
pub fn show(title: &str, body: &str) {
    #[cfg(feature = "hydrate")]
    {
        if web_sys::Notification::permission() != web_sys::NotificationPermission::Granted {
            return;
        }
        let options = web_sys::NotificationOptions::new();
        options.set_body(body);
        options.set_icon("/static/favicon.ico");
        let _ = web_sys::Notification::new_with_options(title, &options);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (title, body);
    }
}
