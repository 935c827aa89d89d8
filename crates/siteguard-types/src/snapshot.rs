//! Injectable dashboard dataset
//!
//! The UI renders whatever snapshot it is handed. `sample()` carries the
//! static demonstration dataset so the dashboard has content before a live
//! data source exists; swapping it for API data is a data change, not a view
//! change.

use crate::dashboard::{
    AlertRecord, ComplianceBreakdown, DashboardSummary, Weekday, WeeklyDataPoint,
};
use crate::nav::NotificationSummary;
use crate::severity::Severity;
use serde::{Deserialize, Serialize};

/// Everything the dashboard page needs to render one frame
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    /// Stat-card counters and the compliance score
    pub summary: DashboardSummary,
    /// Seven trend points, Monday through Sunday
    pub weekly: Vec<WeeklyDataPoint>,
    /// Recent alerts, most recent first
    pub recent_alerts: Vec<AlertRecord>,
}

impl DashboardSnapshot {
    /// Compliance breakdown derived from the summary score.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored score exceeds 100.
    pub const fn compliance(&self) -> crate::Result<ComplianceBreakdown> {
        ComplianceBreakdown::from_score(self.summary.compliance_score)
    }

    /// The static demonstration dataset
    #[must_use]
    pub fn sample() -> Self {
        Self {
            summary: DashboardSummary {
                total_sites: 5,
                active_cameras: 24,
                workers_on_site: 127,
                active_alerts: 3,
                compliance_score: 94,
                today_incidents: 2,
            },
            weekly: vec![
                weekly(Weekday::Mon, 2, 96),
                weekly(Weekday::Tue, 1, 98),
                weekly(Weekday::Wed, 3, 92),
                weekly(Weekday::Thu, 1, 97),
                weekly(Weekday::Fri, 2, 94),
                weekly(Weekday::Sat, 0, 100),
                weekly(Weekday::Sun, 1, 95),
            ],
            recent_alerts: vec![
                AlertRecord {
                    id: 1,
                    kind: "Fall Detection".to_string(),
                    description: "Worker detected near unprotected edge - Zone 3".to_string(),
                    severity: Severity::Critical,
                    time: "2 minutes ago".to_string(),
                },
                AlertRecord {
                    id: 2,
                    kind: "Fence Breach".to_string(),
                    description: "Safety barrier damaged in perimeter section A".to_string(),
                    severity: Severity::High,
                    time: "15 minutes ago".to_string(),
                },
                AlertRecord {
                    id: 3,
                    kind: "Workforce Safety".to_string(),
                    description: "Multiple workers without safety harnesses".to_string(),
                    severity: Severity::High,
                    time: "1 hour ago".to_string(),
                },
            ],
        }
    }

    /// The static notification feed shown in the navigation bar popover
    #[must_use]
    pub fn sample_notifications() -> Vec<NotificationSummary> {
        vec![
            NotificationSummary::new("Fall Risk Detected", "Zone 3 - Worker near unprotected edge"),
            NotificationSummary::new("Fence Breach Alert", "Safety barrier damaged in section A"),
            NotificationSummary::new("Workforce Safety", "Multiple workers without harnesses"),
        ]
    }
}

const fn weekly(day: Weekday, incidents: u32, compliance: u8) -> WeeklyDataPoint {
    WeeklyDataPoint {
        day,
        incidents,
        compliance,
    }
}
