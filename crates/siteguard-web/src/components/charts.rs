//! SVG chart components
//!
//! The donut and the dual-axis weekly bar chart are drawn with plain SVG so
//! the dashboard carries no JavaScript charting dependency. Geometry is
//! computed in small helper functions that the tests exercise directly.

use leptos::prelude::*;
use siteguard_types::{ComplianceBreakdown, WeeklyDataPoint};

/// Bar color for the incidents series
const INCIDENTS_COLOR: &str = "#f44336";
/// Bar color for the compliance series
const COMPLIANCE_COLOR: &str = "#4caf50";

// Donut geometry
const DONUT_SIZE: f64 = 200.0;
const DONUT_RADIUS: f64 = 70.0;
const DONUT_STROKE: f64 = 22.0;

// Bar chart geometry
const CHART_WIDTH: f64 = 720.0;
const CHART_HEIGHT: f64 = 300.0;
const MARGIN_LEFT: f64 = 42.0;
const MARGIN_RIGHT: f64 = 42.0;
const MARGIN_TOP: f64 = 12.0;
const MARGIN_BOTTOM: f64 = 48.0;
const PLOT_WIDTH: f64 = CHART_WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
const PLOT_HEIGHT: f64 = CHART_HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
const BAR_WIDTH: f64 = 22.0;
const BAR_GAP: f64 = 6.0;

/// One arc of the donut ring, expressed as a dash pattern on a circle
#[derive(Debug, Clone, Copy, PartialEq)]
struct DonutSegment {
    name: &'static str,
    value: u8,
    color: &'static str,
    /// Visible dash length along the circumference
    length: f64,
    /// Dash offset placing this segment after the previous ones
    offset: f64,
}

/// Split the ring circumference across the breakdown slices
fn donut_segments(breakdown: ComplianceBreakdown, circumference: f64) -> Vec<DonutSegment> {
    let mut consumed = 0.0;
    breakdown
        .slices()
        .into_iter()
        .map(|slice| {
            let length = circumference * f64::from(slice.value) / 100.0;
            let segment = DonutSegment {
                name: slice.name,
                value: slice.value,
                color: slice.color,
                length,
                offset: -consumed,
            };
            consumed += length;
            segment
        })
        .collect()
}

/// Bar height for `value` on an axis running 0..=`axis_max`
fn scaled_height(value: f64, axis_max: f64) -> f64 {
    if axis_max <= 0.0 {
        return 0.0;
    }
    (value / axis_max).clamp(0.0, 1.0) * PLOT_HEIGHT
}

/// Left-axis maximum: the weekly incident peak, never below 1 so a quiet
/// week still gets a usable scale
fn incident_axis_max(points: &[WeeklyDataPoint]) -> u32 {
    points.iter().map(|p| p.incidents).max().unwrap_or(0).max(1)
}

/// X coordinate of the center of category `index` out of `count`
fn category_center(index: usize, count: usize) -> f64 {
    let count = count.max(1) as f64;
    let slot = PLOT_WIDTH / count;
    MARGIN_LEFT + slot * (index as f64 + 0.5)
}

/// Ring-shaped proportional chart for the compliance breakdown
///
/// Both slices come from the same derived breakdown, so the donut cannot
/// disagree with the progress bar next to it.
#[component]
pub fn ComplianceDonut(
    /// Derived compliant/violation split
    breakdown: ComplianceBreakdown,
) -> impl IntoView {
    let center = DONUT_SIZE / 2.0;
    let circumference = std::f64::consts::TAU * DONUT_RADIUS;
    let segments = donut_segments(breakdown, circumference);

    view! {
        <svg
            class="donut-chart"
            viewBox=format!("0 0 {DONUT_SIZE} {DONUT_SIZE}")
            role="img"
            aria-label=format!("Compliance donut: {}% compliant", breakdown.score())
        >
            <circle
                cx=center.to_string()
                cy=center.to_string()
                r=DONUT_RADIUS.to_string()
                fill="none"
                stroke="#eceff1"
                stroke-width=DONUT_STROKE.to_string()
            />
            {segments.into_iter().map(|segment| view! {
                <circle
                    cx=center.to_string()
                    cy=center.to_string()
                    r=DONUT_RADIUS.to_string()
                    fill="none"
                    stroke=segment.color
                    stroke-width=DONUT_STROKE.to_string()
                    stroke-dasharray=format!("{} {}", segment.length, circumference - segment.length)
                    stroke-dashoffset=segment.offset.to_string()
                    transform=format!("rotate(-90 {center} {center})")
                >
                    <title>{format!("{}: {}%", segment.name, segment.value)}</title>
                </circle>
            }).collect::<Vec<_>>()}
            <text x=center.to_string() y=(center + 6.0).to_string() class="donut-label" text-anchor="middle">
                {format!("{}%", breakdown.score())}
            </text>
        </svg>
    }
}

/// Dual-axis weekly bar chart: incidents (left axis, red) against compliance
/// percentage (right axis, green), categories fixed Monday through Sunday
#[component]
pub fn WeeklyTrendChart(
    /// Seven trend points in weekday order
    points: Vec<WeeklyDataPoint>,
) -> impl IntoView {
    let count = points.len();
    let left_max = incident_axis_max(&points);
    let baseline = MARGIN_TOP + PLOT_HEIGHT;

    let bars = points
        .iter()
        .enumerate()
        .map(|(index, point)| {
            let center = category_center(index, count);
            let incident_h = scaled_height(f64::from(point.incidents), f64::from(left_max));
            let compliance_h = scaled_height(f64::from(point.compliance), 100.0);

            view! {
                <g class="bar-group">
                    <rect
                        x=(center - BAR_WIDTH - BAR_GAP / 2.0).to_string()
                        y=(baseline - incident_h).to_string()
                        width=BAR_WIDTH.to_string()
                        height=incident_h.to_string()
                        fill=INCIDENTS_COLOR
                    >
                        <title>{format!("{}: {} incidents", point.day.label(), point.incidents)}</title>
                    </rect>
                    <rect
                        x=(center + BAR_GAP / 2.0).to_string()
                        y=(baseline - compliance_h).to_string()
                        width=BAR_WIDTH.to_string()
                        height=compliance_h.to_string()
                        fill=COMPLIANCE_COLOR
                    >
                        <title>{format!("{}: {}% compliance", point.day.label(), point.compliance)}</title>
                    </rect>
                    <text x=center.to_string() y=(baseline + 18.0).to_string() class="axis-label" text-anchor="middle">
                        {point.day.label()}
                    </text>
                </g>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <svg
            class="trend-chart"
            viewBox=format!("0 0 {CHART_WIDTH} {CHART_HEIGHT}")
            role="img"
            aria-label="Weekly incidents and compliance"
        >
            <line
                x1=MARGIN_LEFT.to_string()
                y1=baseline.to_string()
                x2=(CHART_WIDTH - MARGIN_RIGHT).to_string()
                y2=baseline.to_string()
                class="axis-line"
            />
            // Left axis: incident counts
            <text x=(MARGIN_LEFT - 8.0).to_string() y=(MARGIN_TOP + 10.0).to_string() class="axis-label" text-anchor="end">
                {left_max.to_string()}
            </text>
            <text x=(MARGIN_LEFT - 8.0).to_string() y=baseline.to_string() class="axis-label" text-anchor="end">
                "0"
            </text>
            // Right axis: compliance percentage, fixed 0-100
            <text x=(CHART_WIDTH - MARGIN_RIGHT + 8.0).to_string() y=(MARGIN_TOP + 10.0).to_string() class="axis-label">
                "100"
            </text>
            <text x=(CHART_WIDTH - MARGIN_RIGHT + 8.0).to_string() y=baseline.to_string() class="axis-label">
                "0"
            </text>
            {bars}
            <g class="chart-legend">
                <rect x=(MARGIN_LEFT).to_string() y=(CHART_HEIGHT - 14.0).to_string() width="12" height="12" fill=INCIDENTS_COLOR/>
                <text x=(MARGIN_LEFT + 18.0).to_string() y=(CHART_HEIGHT - 4.0).to_string() class="axis-label">"Incidents"</text>
                <rect x=(MARGIN_LEFT + 110.0).to_string() y=(CHART_HEIGHT - 14.0).to_string() width="12" height="12" fill=COMPLIANCE_COLOR/>
                <text x=(MARGIN_LEFT + 128.0).to_string() y=(CHART_HEIGHT - 4.0).to_string() class="axis-label">"Compliance %"</text>
            </g>
        </svg>
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use siteguard_types::DashboardSnapshot;

    #[test]
    fn donut_segments_cover_the_full_ring() {
        let breakdown = ComplianceBreakdown::from_score(94).unwrap();
        let circumference = std::f64::consts::TAU * DONUT_RADIUS;
        let segments = donut_segments(breakdown, circumference);

        assert_eq!(segments.len(), 2);
        let total: f64 = segments.iter().map(|s| s.length).sum();
        assert!((total - circumference).abs() < 1e-9);

        // Second segment starts where the first ends
        assert_eq!(segments[1].offset, -segments[0].length);
    }

    #[test]
    fn donut_segments_follow_slice_order_and_colors() {
        let breakdown = ComplianceBreakdown::from_score(94).unwrap();
        let segments = donut_segments(breakdown, 100.0);
        assert_eq!(segments[0].name, "Compliant");
        assert_eq!(segments[0].value, 94);
        assert_eq!(segments[1].name, "Violations");
        assert_eq!(segments[1].value, 6);
        assert!((segments[0].length - 94.0).abs() < 1e-9);
        assert!((segments[1].length - 6.0).abs() < 1e-9);
    }

    #[test]
    fn bar_heights_scale_linearly_and_stay_in_plot() {
        assert_eq!(scaled_height(0.0, 3.0), 0.0);
        assert_eq!(scaled_height(3.0, 3.0), PLOT_HEIGHT);
        assert_eq!(scaled_height(1.5, 3.0), PLOT_HEIGHT / 2.0);
        // Out-of-range values clamp instead of escaping the plot area
        assert_eq!(scaled_height(10.0, 3.0), PLOT_HEIGHT);
        assert_eq!(scaled_height(5.0, 0.0), 0.0);
    }

    #[test]
    fn incident_axis_never_collapses() {
        assert_eq!(incident_axis_max(&[]), 1);
        let quiet: Vec<_> = DashboardSnapshot::sample()
            .weekly
            .into_iter()
            .map(|mut p| {
                p.incidents = 0;
                p
            })
            .collect();
        assert_eq!(incident_axis_max(&quiet), 1);
        assert_eq!(incident_axis_max(&DashboardSnapshot::sample().weekly), 3);
    }

    #[test]
    fn category_centers_are_ordered_left_to_right() {
        let centers: Vec<_> = (0..7).map(|i| category_center(i, 7)).collect();
        for pair in centers.windows(2) {
            assert!(pair[0] < pair[1]);
        }
        assert!(centers[0] > MARGIN_LEFT);
        assert!(centers[6] < CHART_WIDTH - MARGIN_RIGHT);
    }

    #[test]
    fn chart_components_build_from_sample_data() {
        let owner = Owner::new();
        owner.set();

        let snapshot = DashboardSnapshot::sample();
        let _ = view! { <ComplianceDonut breakdown=snapshot.compliance().unwrap()/> };
        let _ = view! { <WeeklyTrendChart points=snapshot.weekly/> };
    }
}
