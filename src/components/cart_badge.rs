//! Navbar cart link with an item-count badge.

use leptos::prelude::*;

use crate::state::cart::CartState;

/// Cart icon linking to the cart page; the count badge hides when the cart
/// is empty or the last count fetch failed.
#[component]
pub fn CartBadge() -> impl IntoView {
    let cart = expect_context::<RwSignal<CartState>>();

    let visible = move || cart.get().badge_visible;
    let count = move || cart.get().count.to_string();

    view! {
        <a class="cart-badge" href="/cart/" title="Cart">
            <svg viewBox="0 0 20 20" aria-hidden="true">
                <path d="M3 4 L5 4 L7 13 L16 13 L18 6 L6 6" />
                <circle cx="8" cy="16" r="1.5" />
                <circle cx="15" cy="16" r="1.5" />
            </svg>
            <Show when=visible>
                <span class="cart-badge__count">{count}</span>
            </Show>
        </a>
    }
}
