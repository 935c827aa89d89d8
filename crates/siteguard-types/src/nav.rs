//! Navigation and notification records
//!
//! The navigation bar renders whatever item list it is handed; the fixed
//! four-section layout lives here as data, not inside the component.

use serde::{Deserialize, Serialize};

/// Glyph reference for a navigation entry
///
/// The web crate maps each variant to an inline SVG; the mapping is total so
/// a new variant cannot render unstyled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavIcon {
    /// Grid glyph for the dashboard landing page
    Dashboard,
    /// Map-pin glyph for the sites list
    Sites,
    /// Warning-triangle glyph for the alerts view
    Alerts,
    /// Chart glyph for the analytics view
    Analytics,
    /// Camera glyph for the live monitor shortcut
    Live,
}

/// One entry in the navigation bar
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    /// Route path, compared for exact equality against the current route
    pub path: &'static str,
    /// Visible link text
    pub label: &'static str,
    /// Glyph shown before the label
    pub icon: NavIcon,
}

impl NavItem {
    /// The fixed four-section navigation layout
    #[must_use]
    pub const fn default_items() -> [Self; 4] {
        [
            Self {
                path: "/",
                label: "Dashboard",
                icon: NavIcon::Dashboard,
            },
            Self {
                path: "/sites",
                label: "Sites",
                icon: NavIcon::Sites,
            },
            Self {
                path: "/alerts",
                label: "Alerts",
                icon: NavIcon::Alerts,
            },
            Self {
                path: "/analytics",
                label: "Analytics",
                icon: NavIcon::Analytics,
            },
        ]
    }
}

/// A title/detail pair shown in the notifications popover
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationSummary {
    /// Short headline
    pub title: String,
    /// One-line detail text
    pub detail: String,
}

impl NotificationSummary {
    /// Convenience constructor
    #[must_use]
    pub fn new(title: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            detail: detail.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_items_cover_four_sections() {
        let items = NavItem::default_items();
        let paths: Vec<_> = items.iter().map(|i| i.path).collect();
        assert_eq!(paths, ["/", "/sites", "/alerts", "/analytics"]);
    }

    #[test]
    fn default_item_paths_are_unique() {
        let items = NavItem::default_items();
        for (i, a) in items.iter().enumerate() {
            for b in items.iter().skip(i + 1) {
                assert_ne!(a.path, b.path);
            }
        }
    }
}
