//! Notification bell with unread badge and a mark-as-read dropdown.

use leptos::prelude::*;

use crate::poll;
use crate::state::notifications::NotificationState;

/// Bell icon toggling a dropdown of recent notifications.
///
/// Clicking an entry marks it read and follows its link if it has one;
/// "Mark all read" clears the whole list. Both actions refetch the list on
/// success rather than patching it locally.
#[component]
pub fn NotificationBell() -> impl IntoView {
    let notifications = expect_context::<RwSignal<NotificationState>>();

    let badge_visible = move || notifications.get().badge_visible;
    let unread = move || notifications.get().unread_count.to_string();
    let dropdown_open = move || notifications.get().dropdown_open;

    let on_toggle = move |_| notifications.update(NotificationState::toggle_dropdown);
    let on_mark_all = move |_| poll::mark_all_read(notifications);

    view! {
        <div class="notification-bell">
            <button class="notification-bell__button" on:click=on_toggle title="Notifications">
                <svg viewBox="0 0 20 20" aria-hidden="true">
                    <path d="M10 2 C7 2 5 4 5 7 L5 11 L3 14 L17 14 L15 11 L15 7 C15 4 13 2 10 2 Z" />
                    <path d="M8 16 C8 17 9 18 10 18 C11 18 12 17 12 16" />
                </svg>
                <Show when=badge_visible>
                    <span class="notification-bell__count">{unread}</span>
                </Show>
            </button>

            <Show when=dropdown_open>
                <div class="notification-bell__dropdown">
                    <div class="notification-bell__header">
                        <span>"Notifications"</span>
                        <button class="notification-bell__mark-all" on:click=on_mark_all>
                            "Mark all read"
                        </button>
                    </div>
                    <ul class="notification-bell__list">
                        {move || {
                            let items = notifications.get().items;
                            if items.is_empty() {
                                return view! {
                                    <li class="notification-bell__empty">"No notifications"</li>
                                }
                                    .into_any();
                            }

                            items
                                .into_iter()
                                .map(|item| {
                                    let id = item.id;
                                    let href = item.click_url.clone().unwrap_or_else(|| "#".to_owned());
                                    view! {
                                        <li>
                                            <a
                                                class="notification-bell__item"
                                                class:notification-bell__item--unread=!item.is_read
                                                href=href
                                                on:click=move |_| poll::mark_read(notifications, id)
                                            >
                                                <div class="notification-bell__title">{item.title}</div>
                                                <div class="notification-bell__message">{item.message}</div>
                                                <div class="notification-bell__time">{item.created_at}</div>
                                            </a>
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()
                                .into_any()
                        }}
                    </ul>
                </div>
            </Show>
        </div>
    }
}
