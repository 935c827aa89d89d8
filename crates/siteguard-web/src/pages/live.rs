//! Live monitor page showing a single camera feed

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

/// Live camera monitor page component
#[component]
pub fn LiveMonitor() -> impl IntoView {
    let params = use_params_map();
    let feed = move || params.read().get("feed").unwrap_or_else(|| "1".to_string());

    view! {
        <div class="live-page">
            <h2>{move || format!("Live Monitor - Feed {}", feed())}</h2>
            <div class="card card-wide">
                <div class="live-frame">
                    <p class="muted">"Camera stream will appear here once the video gateway is connected"</p>
                </div>
            </div>
        </div>
    }
}
