//! Integration tests covering the invariants the dashboard view relies on

#![allow(clippy::unwrap_used)]

use siteguard_types::{
    ComplianceBreakdown, DashboardSnapshot, NavItem, Severity, Weekday,
};

#[test]
fn end_to_end_sample_scenario() {
    // With complianceScore = 94 the progress bar fills to 94%, the donut
    // shows {94, 6} and the stat card displays "94%".
    let snapshot = DashboardSnapshot::sample();
    assert_eq!(snapshot.summary.compliance_score, 94);

    let [compliant, violations] = snapshot.compliance().unwrap().slices();
    assert_eq!((compliant.value, violations.value), (94, 6));

    let card_value = format!("{}%", snapshot.summary.compliance_score);
    assert_eq!(card_value, "94%");
}

#[test]
fn severity_styling_scenario() {
    // A "critical" alert renders with the error chip; an unrecognized
    // severity falls back to the neutral chip instead of failing.
    assert_eq!(Severity::parse("critical").chip_class(), "chip chip-error");
    assert_eq!(Severity::parse("unknown").chip_class(), "chip chip-default");
}

#[test]
fn navigation_highlight_is_exact_match() {
    let items = NavItem::default_items();
    let current = "/alerts";

    let active: Vec<_> = items.iter().filter(|i| i.path == current).collect();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].label, "Alerts");

    // No item matches an unknown route: no highlight, not an error.
    let none: Vec<_> = items.iter().filter(|i| i.path == "/live/1").collect();
    assert!(none.is_empty());
}

#[test]
fn weekly_chart_always_has_seven_ordered_categories() {
    let snapshot = DashboardSnapshot::sample();
    assert_eq!(snapshot.weekly.len(), 7);
    for (point, expected) in snapshot.weekly.iter().zip(Weekday::ALL) {
        assert_eq!(point.day, expected);
        assert!(point.compliance <= 100);
    }
}

#[test]
fn breakdown_never_disagrees_with_its_score() {
    for score in 0..=100u8 {
        let [compliant, violations] = ComplianceBreakdown::from_score(score).unwrap().slices();
        assert_eq!(compliant.value, score);
        assert_eq!(u16::from(compliant.value) + u16::from(violations.value), 100);
    }
}
