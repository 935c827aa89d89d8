//! Dashboard configuration
//!
//! The host page can inject configuration via `<meta name="siteguard:…">`
//! tags or a `window.__SITEGUARD_CONFIG__` object; everything falls back to
//! built-in defaults so the app also runs from a bare `index.html`.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

/// Default product title shown in the navigation bar
pub const DEFAULT_TITLE: &str = "🏗️ SiteGuard";
/// Default camera feed the live-monitor shortcut opens
pub const DEFAULT_LIVE_FEED: &str = "1";

/// Runtime UI configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiConfig {
    /// Product title shown in the navigation bar
    pub title: String,
    /// Feed identifier for the live-monitor shortcut (`/live/{feed}`)
    pub live_feed: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            live_feed: DEFAULT_LIVE_FEED.to_string(),
        }
    }
}

impl UiConfig {
    /// Load configuration from the host page (priority order):
    /// 1. `<meta name="siteguard:…">` tags (server-injected)
    /// 2. `window.__SITEGUARD_CONFIG__` object (JavaScript injection)
    /// 3. Built-in defaults
    #[must_use]
    pub fn load() -> Self {
        #[allow(unused_mut)]
        let mut config = Self::default();

        // DOM access only exists in the browser; native builds (tests) keep
        // the defaults.
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                if let Some(title) = get_meta_content(&document, "siteguard:title") {
                    if !title.is_empty() {
                        config.title = title;
                    }
                }
                if let Some(feed) = get_meta_content(&document, "siteguard:live-feed") {
                    if !feed.is_empty() {
                        config.live_feed = feed;
                    }
                }
            }

            if let Some(title) = get_js_config("title") {
                config.title = title;
            }
            if let Some(feed) = get_js_config("live_feed") {
                config.live_feed = feed;
            }
        }

        config
    }

    /// Route path the live-monitor shortcut navigates to
    #[must_use]
    pub fn live_monitor_path(&self) -> String {
        format!("/live/{}", self.live_feed)
    }
}

/// Get content from a `<meta name="…">` tag
#[cfg(target_arch = "wasm32")]
fn get_meta_content(document: &web_sys::Document, name: &str) -> Option<String> {
    let selector = format!("meta[name=\"{name}\"]");
    document
        .query_selector(&selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web_sys::HtmlMetaElement>().ok())
        .map(|meta| meta.content())
}

/// Get a value from `window.__SITEGUARD_CONFIG__`
#[cfg(target_arch = "wasm32")]
fn get_js_config(key: &str) -> Option<String> {
    let window = web_sys::window()?;
    let config = js_sys::Reflect::get(&window, &"__SITEGUARD_CONFIG__".into()).ok()?;

    if config.is_undefined() || config.is_null() {
        return None;
    }

    let value = js_sys::Reflect::get(&config, &key.into()).ok()?;
    value.as_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_config() {
        let config = UiConfig::default();
        assert_eq!(config.title, DEFAULT_TITLE);
        assert_eq!(config.live_feed, "1");
    }

    #[test]
    fn live_monitor_path_uses_configured_feed() {
        let config = UiConfig {
            title: DEFAULT_TITLE.to_string(),
            live_feed: "north-tower-3".to_string(),
        };
        assert_eq!(config.live_monitor_path(), "/live/north-tower-3");
    }
}
