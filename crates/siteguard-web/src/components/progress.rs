//! Linear progress indicator

use leptos::prelude::*;

/// Horizontal bar filled to `percent` of its width
#[component]
pub fn LinearProgress(
    /// Fill percentage, 0–100
    percent: u8,
) -> impl IntoView {
    let width = percent.min(100);

    view! {
        <div
            class="progress-track"
            role="progressbar"
            aria-valuenow=width
            aria-valuemin="0"
            aria-valuemax="100"
        >
            <div class="progress-fill" style=format!("width: {width}%")></div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_builds_at_bounds() {
        let owner = Owner::new();
        owner.set();

        let _ = view! { <LinearProgress percent=0/> };
        let _ = view! { <LinearProgress percent=94/> };
        let _ = view! { <LinearProgress percent=100/> };
    }
}
