//! Alerts page for browsing and acknowledging safety alerts

use leptos::prelude::*;

/// Alert browser page component
#[component]
pub fn Alerts() -> impl IntoView {
    view! {
        <div class="alerts-page">
            <h2>"Alerts"</h2>
            <div class="card card-wide">
                <h3>"Alert History"</h3>
                <p class="muted">"Alert history with filtering will appear here once the alerts backend is connected"</p>
            </div>
        </div>
    }
}
