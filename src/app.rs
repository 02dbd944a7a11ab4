//! Root application component with state contexts and poller startup.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};

use crate::components::cart_badge::CartBadge;
use crate::components::chat_dock::ChatDock;
use crate::components::notification_bell::NotificationBell;
use crate::state::cart::CartState;
use crate::state::chat::ChatDockState;
use crate::state::notifications::NotificationState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root component for the storefront widget layer.
///
/// The product pages themselves are server-rendered; this layer owns the
/// live widgets on top of them: cart badge, notification bell, and the
/// floating chat dock. It provides all shared state contexts and starts the
/// page-level pollers once.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let cart = RwSignal::new(CartState::default());
    let notifications = RwSignal::new(NotificationState::default());
    let dock = RwSignal::new(ChatDockState::default());

    provide_context(cart);
    provide_context(notifications);
    provide_context(dock);

    crate::poll::start_page_pollers(cart, notifications, dock);

    view! {
        <Stylesheet id="leptos" href="/pkg/monmagasin-ui.css"/>
        <Title text="MonMagasin"/>

        <div class="storefront-widgets">
            <div class="storefront-widgets__navbar">
                <CartBadge/>
                <NotificationBell/>
            </div>
            <ChatDock/>
        </div>
    }
}
