//! Dashboard page: stat cards, compliance overview, recent alerts and the
//! weekly trend chart, all rendered from the injected snapshot

use leptos::prelude::*;
use siteguard_types::{AlertRecord, DashboardSnapshot};

use crate::components::icons::{CameraIcon, ShieldIcon, WarningIcon, WorkerIcon};
use crate::components::{ComplianceDonut, LinearProgress, SeverityChip, StatCard, WeeklyTrendChart};
use crate::state::DashboardState;

/// Main dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = expect_context::<DashboardState>();

    view! {
        <div class="dashboard">
            <h2>"Safety Dashboard"</h2>
            {move || {
                let snapshot = state.snapshot.get();
                view! {
                    <StatCards snapshot=snapshot.clone()/>
                    <div class="dashboard-grid">
                        <ComplianceOverview snapshot=snapshot.clone()/>
                        <RecentAlerts alerts=snapshot.recent_alerts.clone()/>
                    </div>
                    <WeeklyTrends snapshot/>
                }
            }}
        </div>
    }
}

/// The four top-line stat cards
#[component]
fn StatCards(snapshot: DashboardSnapshot) -> impl IntoView {
    let summary = snapshot.summary;

    view! {
        <div class="stats-grid">
            <StatCard
                title="Active Sites"
                value=summary.total_sites.to_string()
                accent="accent-primary"
                trend="+2 this month"
            >
                <CameraIcon/>
            </StatCard>
            <StatCard
                title="Workers On-Site"
                value=summary.workers_on_site.to_string()
                accent="accent-info"
            >
                <WorkerIcon/>
            </StatCard>
            <StatCard
                title="Active Alerts"
                value=summary.active_alerts.to_string()
                accent="accent-warning"
            >
                <WarningIcon/>
            </StatCard>
            <StatCard
                title="Compliance Score"
                value=format!("{}%", summary.compliance_score)
                accent="accent-success"
                trend="+2% this week"
            >
                <ShieldIcon/>
            </StatCard>
        </div>
    }
}

/// Progress bar and donut, both fed from the same derived breakdown
#[component]
fn ComplianceOverview(snapshot: DashboardSnapshot) -> impl IntoView {
    let score = snapshot.summary.compliance_score;

    view! {
        <div class="card">
            <h3>"Safety Compliance Overview"</h3>
            <div class="compliance-progress">
                <div class="compliance-progress-bar">
                    <span class="muted">"Overall Compliance"</span>
                    <LinearProgress percent=score/>
                </div>
                <span class="compliance-score">{format!("{score}%")}</span>
            </div>
            {match snapshot.compliance() {
                Ok(breakdown) => view! { <ComplianceDonut breakdown/> }.into_any(),
                Err(err) => {
                    log::error!("invalid compliance score in snapshot: {err}");
                    view! { <p class="muted">"Compliance data unavailable"</p> }.into_any()
                }
            }}
        </div>
    }
}

/// Recent alerts in given order; renders gracefully with zero entries
#[component]
fn RecentAlerts(alerts: Vec<AlertRecord>) -> impl IntoView {
    view! {
        <div class="card">
            <h3>"Recent Alerts"</h3>
            <ul class="alert-list">
                {alerts.into_iter().map(|alert| view! {
                    <AlertRow alert/>
                }).collect::<Vec<_>>()}
            </ul>
        </div>
    }
}

/// One alert entry: severity-colored indicator, type, chip, description, time
#[component]
fn AlertRow(alert: AlertRecord) -> impl IntoView {
    view! {
        <li class="alert-row">
            <span class="alert-indicator" style=format!("color: {}", alert.severity.indicator_color())>
                <WarningIcon/>
            </span>
            <div class="alert-content">
                <div class="alert-heading">
                    <span class="alert-type">{alert.kind}</span>
                    <SeverityChip severity=alert.severity/>
                </div>
                <p class="alert-description">{alert.description}</p>
                <span class="alert-time muted">{alert.time}</span>
            </div>
        </li>
    }
}

/// Full-width weekly trends card
#[component]
fn WeeklyTrends(snapshot: DashboardSnapshot) -> impl IntoView {
    view! {
        <div class="card card-wide">
            <h3>"Weekly Safety Trends"</h3>
            <WeeklyTrendChart points=snapshot.weekly/>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use siteguard_types::Severity;

    #[test]
    fn dashboard_sections_build_from_sample_data() {
        let owner = Owner::new();
        owner.set();

        let snapshot = DashboardSnapshot::sample();
        let _ = view! { <StatCards snapshot=snapshot.clone()/> };
        let _ = view! { <ComplianceOverview snapshot=snapshot.clone()/> };
        let _ = view! { <RecentAlerts alerts=snapshot.recent_alerts.clone()/> };
        let _ = view! { <WeeklyTrends snapshot/> };
    }

    #[test]
    fn alert_list_builds_when_empty() {
        let owner = Owner::new();
        owner.set();

        let _ = view! { <RecentAlerts alerts=Vec::new()/> };
    }

    #[test]
    fn alert_row_builds_for_unrecognized_severity() {
        let owner = Owner::new();
        owner.set();

        let alert = AlertRecord {
            id: 99,
            kind: "Sensor Fault".to_string(),
            description: "Camera 7 offline".to_string(),
            severity: Severity::parse("unknown"),
            time: "just now".to_string(),
        };
        let _ = view! { <AlertRow alert/> };
    }
}
