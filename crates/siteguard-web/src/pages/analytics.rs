//! Analytics page for long-range safety reporting

use leptos::prelude::*;

/// Analytics page component
#[component]
pub fn Analytics() -> impl IntoView {
    view! {
        <div class="analytics-page">
            <h2>"Analytics"</h2>
            <div class="page-grid">
                <div class="card">
                    <h3>"Compliance Trends"</h3>
                    <p class="muted">"Long-range compliance charts will appear here"</p>
                </div>
                <div class="card">
                    <h3>"Incident Reports"</h3>
                    <p class="muted">"Downloadable incident reports will appear here"</p>
                </div>
            </div>
        </div>
    }
}
