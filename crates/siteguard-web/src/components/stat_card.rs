//! Stat card for overview metrics

use super::icons::TrendUpIcon;
use leptos::prelude::*;

/// Small panel showing one labeled metric, an icon and an optional trend
/// caption. No trend value means no caption at all, not an empty one.
#[component]
pub fn StatCard(
    /// Metric label, e.g. "Workers On-Site"
    title: &'static str,
    /// Pre-formatted metric value, e.g. "127" or "94%"
    value: String,
    /// Accent class, e.g. "accent-success"
    #[prop(optional)]
    accent: Option<&'static str>,
    /// Trend caption, e.g. "+2% this week"
    #[prop(optional)]
    trend: Option<&'static str>,
    /// Large icon rendered on the right
    children: Children,
) -> impl IntoView {
    let class = accent.map_or_else(
        || "stat-card".to_string(),
        |accent| format!("stat-card {accent}"),
    );

    view! {
        <div class=class>
            <div class="stat-body">
                <span class="stat-label">{title}</span>
                <span class="stat-value">{value}</span>
                {trend.map(|trend| view! {
                    <span class="stat-trend">
                        <TrendUpIcon/>
                        {trend}
                    </span>
                })}
            </div>
            <div class="stat-icon">{children()}</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stat_card_builds_with_and_without_trend() {
        let owner = Owner::new();
        owner.set();

        let _ = view! {
            <StatCard title="Compliance Score" value="94%".to_string() trend="+2% this week">
                "icon"
            </StatCard>
        };
        let _ = view! {
            <StatCard title="Workers On-Site" value="127".to_string()>
                "icon"
            </StatCard>
        };
    }
}
