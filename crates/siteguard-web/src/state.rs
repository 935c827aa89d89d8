//! Application state management
//!
//! One context object holds the injected dashboard data as signals. Nothing
//! in this scope mutates the snapshot after mount; the signals exist so a
//! live data source can later swap the snapshot without touching the views.

use leptos::prelude::*;
use siteguard_types::{DashboardSnapshot, NavItem, NotificationSummary};

/// Shared dashboard state provided via context
#[derive(Debug, Clone, Copy)]
pub struct DashboardState {
    /// The rendered dashboard dataset
    pub snapshot: RwSignal<DashboardSnapshot>,
    /// Entries shown in the notifications popover
    pub notifications: RwSignal<Vec<NotificationSummary>>,
    /// Navigation bar entries
    pub nav_items: RwSignal<Vec<NavItem>>,
}

impl DashboardState {
    /// Create state from an injected dataset
    #[must_use]
    pub fn new(snapshot: DashboardSnapshot, notifications: Vec<NotificationSummary>) -> Self {
        Self {
            snapshot: RwSignal::new(snapshot),
            notifications: RwSignal::new(notifications),
            nav_items: RwSignal::new(NavItem::default_items().to_vec()),
        }
    }

    /// State seeded with the static demonstration dataset
    #[must_use]
    pub fn sample() -> Self {
        Self::new(
            DashboardSnapshot::sample(),
            DashboardSnapshot::sample_notifications(),
        )
    }
}
