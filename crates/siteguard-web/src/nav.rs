//! Navigation bar with notifications popover
//!
//! Always mounted; reflects the current route by exact path comparison and
//! owns the only piece of view state in the app, the popover open flag.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};
use siteguard_types::{NavItem, NotificationSummary};

use crate::components::icons::{BellIcon, LiveIcon, NavGlyph};
use crate::config::UiConfig;
use crate::state::DashboardState;

/// Top navigation bar: product title, section links, notifications bell and
/// the live-monitor shortcut
#[component]
pub fn NavBar() -> impl IntoView {
    let config = expect_context::<UiConfig>();
    let state = expect_context::<DashboardState>();
    let navigate = use_navigate();

    // Popover open/closed state is local, binary, and owned solely by this
    // component. Closing an already-closed popover is a no-op.
    let notifications_open = RwSignal::new(false);

    let badge_count = move || state.notifications.get().len();
    let live_path = config.live_monitor_path();

    view! {
        <header class="navbar">
            <span class="navbar-title">{config.title.clone()}</span>

            <nav class="navbar-links" aria-label="Sections">
                <For
                    each=move || state.nav_items.get()
                    key=|item| item.path
                    children=move |item| view! { <NavLink item/> }
                />
            </nav>

            <button
                class="navbar-bell"
                aria-label="Notifications"
                on:click=move |_| notifications_open.update(|open| *open = !*open)
            >
                <BellIcon/>
                <Show when={move || badge_count() > 0}>
                    <span class="badge badge-error">{badge_count}</span>
                </Show>
            </button>

            <Show when=move || notifications_open.get()>
                <NotificationsPopover
                    entries=state.notifications
                    on_close=move || notifications_open.set(false)
                />
            </Show>

            <button
                class="navbar-live"
                on:click=move |_| navigate(&live_path, NavigateOptions::default())
            >
                <LiveIcon/>
                "Live Monitor"
            </button>
        </header>
    }
}

/// One navigation link. Highlighted when its path equals the current route
/// exactly; no item matching the route means no highlight.
#[component]
fn NavLink(
    /// Entry to render
    item: NavItem,
) -> impl IntoView {
    let location = use_location();
    let path = item.path;
    let active = move || location.pathname.get() == path;

    view! {
        <a
            href=item.path
            class="nav-link"
            class:active=active
            aria-current=move || if active() { Some("page") } else { None }
        >
            <NavGlyph icon=item.icon/>
            {item.label}
        </a>
    }
}

/// Transient panel anchored to the bell button listing notification entries.
/// Activating an entry or clicking outside closes it.
#[component]
fn NotificationsPopover(
    /// Notification feed to display; renders gracefully when empty
    entries: RwSignal<Vec<NotificationSummary>>,
    /// Invoked on entry click or click-away
    on_close: impl Fn() + Clone + Send + 'static,
) -> impl IntoView {
    let close_backdrop = on_close.clone();

    view! {
        <div class="popover-backdrop" on:click=move |_| close_backdrop()></div>
        <div class="popover" role="menu" aria-label="Notifications">
            <For
                each=move || entries.get()
                key=|entry| entry.title.clone()
                children=move |entry| {
                    let close = on_close.clone();
                    view! {
                        <button class="popover-item" role="menuitem" on:click=move |_| close() >
                            <span class="popover-item-title">{entry.title.clone()}</span>
                            <span class="popover-item-detail">{entry.detail.clone()}</span>
                        </button>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn popover_toggle_is_idempotent() {
        let owner = Owner::new();
        owner.set();

        let open = RwSignal::new(false);

        // Closing an already-closed popover is a no-op
        open.set(false);
        assert!(!open.get_untracked());

        open.update(|o| *o = !*o);
        assert!(open.get_untracked());

        open.set(false);
        open.set(false);
        assert!(!open.get_untracked());
    }
}
