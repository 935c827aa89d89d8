//! Severity chip

use leptos::prelude::*;
use siteguard_types::Severity;

/// Small colored label showing an alert's severity. The class mapping is
/// total, so an unrecognized severity renders with the neutral chip.
#[component]
pub fn SeverityChip(
    /// Severity to render
    severity: Severity,
) -> impl IntoView {
    view! {
        <span class=severity.chip_class()>{severity.label()}</span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chip_builds_for_every_severity() {
        let owner = Owner::new();
        owner.set();

        for severity in [
            Severity::Critical,
            Severity::High,
            Severity::Medium,
            Severity::Other,
        ] {
            let _ = view! { <SeverityChip severity/> };
        }
    }
}
