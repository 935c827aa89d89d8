//! Sites page listing monitored construction sites

use leptos::prelude::*;

/// Sites overview page component
#[component]
pub fn Sites() -> impl IntoView {
    view! {
        <div class="sites-page">
            <h2>"Sites"</h2>
            <div class="page-grid">
                <div class="card">
                    <h3>"Monitored Sites"</h3>
                    <p class="muted">"Site list will appear here once the monitoring backend is connected"</p>
                </div>
                <div class="card">
                    <h3>"Site Map"</h3>
                    <p class="muted">"Site locations will appear here"</p>
                </div>
            </div>
        </div>
    }
}
