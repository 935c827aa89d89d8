//! Dashboard display records
//!
//! Summary counters, the compliance breakdown, weekly trend points and alert
//! records. The compliance breakdown is the one place with an invariant to
//! defend: the two donut slices must always sum to 100 and agree with the
//! summary score, so the violation slice is derived rather than stored.

use crate::error::ModelError;
use crate::severity::Severity;
use serde::{Deserialize, Serialize};

/// Fill color for the compliant donut slice
pub const COMPLIANT_COLOR: &str = "#4caf50";
/// Fill color for the violation donut slice
pub const VIOLATION_COLOR: &str = "#f44336";

/// Top-level safety counters shown in the stat cards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSummary {
    /// Number of monitored construction sites
    pub total_sites: u32,
    /// Cameras currently streaming
    pub active_cameras: u32,
    /// Workers currently on site
    pub workers_on_site: u32,
    /// Alerts that have not been resolved
    pub active_alerts: u32,
    /// Overall compliance percentage, 0–100
    pub compliance_score: u8,
    /// Incidents recorded today
    pub today_incidents: u32,
}

/// One named slice of the compliance donut
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ComplianceSlice {
    /// Slice label shown in the tooltip
    pub name: &'static str,
    /// Percentage value, 0–100
    pub value: u8,
    /// Fixed display color
    pub color: &'static str,
}

/// Compliant/violation split derived from a single score
///
/// Constructing this from the score is the only way to obtain slices, which
/// keeps the donut numerically consistent with the progress bar and the stat
/// card that all render the same underlying percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct ComplianceBreakdown {
    score: u8,
}

impl TryFrom<u8> for ComplianceBreakdown {
    type Error = ModelError;

    fn try_from(score: u8) -> Result<Self, Self::Error> {
        Self::from_score(score)
    }
}

impl From<ComplianceBreakdown> for u8 {
    fn from(breakdown: ComplianceBreakdown) -> Self {
        breakdown.score
    }
}

impl ComplianceBreakdown {
    /// Build a breakdown from a compliance percentage.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidScore`] if `score` exceeds 100.
    pub const fn from_score(score: u8) -> Result<Self, ModelError> {
        if score > 100 {
            return Err(ModelError::InvalidScore { score });
        }
        Ok(Self { score })
    }

    /// The compliance percentage this breakdown was derived from
    #[must_use]
    pub const fn score(self) -> u8 {
        self.score
    }

    /// Percentage of observations in violation, always `100 - score`
    #[must_use]
    pub const fn violation(self) -> u8 {
        100 - self.score
    }

    /// The two donut slices, compliant first. Values sum to exactly 100.
    #[must_use]
    pub const fn slices(self) -> [ComplianceSlice; 2] {
        [
            ComplianceSlice {
                name: "Compliant",
                value: self.score,
                color: COMPLIANT_COLOR,
            },
            ComplianceSlice {
                name: "Violations",
                value: self.violation(),
                color: VIOLATION_COLOR,
            },
        ]
    }
}

/// Day of week, ordered Monday through Sunday
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weekday {
    /// Monday
    Mon,
    /// Tuesday
    Tue,
    /// Wednesday
    Wed,
    /// Thursday
    Thu,
    /// Friday
    Fri,
    /// Saturday
    Sat,
    /// Sunday
    Sun,
}

impl Weekday {
    /// All weekdays in display order
    pub const ALL: [Self; 7] = [
        Self::Mon,
        Self::Tue,
        Self::Wed,
        Self::Thu,
        Self::Fri,
        Self::Sat,
        Self::Sun,
    ];

    /// Three-letter label used as the chart category
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Mon => "Mon",
            Self::Tue => "Tue",
            Self::Wed => "Wed",
            Self::Thu => "Thu",
            Self::Fri => "Fri",
            Self::Sat => "Sat",
            Self::Sun => "Sun",
        }
    }
}

/// One bar-chart category: incidents and compliance for a single day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyDataPoint {
    /// Chart category
    pub day: Weekday,
    /// Incident count for the day
    pub incidents: u32,
    /// Compliance percentage for the day, 0–100
    pub compliance: u8,
}

/// A single entry in the recent-alerts list
///
/// Ordered most-recent-first by construction; `time` is a pre-rendered
/// relative string because no live clock exists in this scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertRecord {
    /// Unique alert id
    pub id: u32,
    /// Alert category, e.g. "Fall Detection"
    #[serde(rename = "type")]
    pub kind: String,
    /// Free-text description of the event
    pub description: String,
    /// Urgency classification
    pub severity: Severity,
    /// Relative time text, e.g. "2 minutes ago"
    pub time: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn breakdown_rejects_out_of_range_scores() {
        assert_eq!(
            ComplianceBreakdown::from_score(101),
            Err(ModelError::InvalidScore { score: 101 })
        );
        assert_eq!(
            ComplianceBreakdown::from_score(255),
            Err(ModelError::InvalidScore { score: 255 })
        );
    }

    #[test]
    fn breakdown_derives_violation_slice() {
        let breakdown = ComplianceBreakdown::from_score(94).unwrap();
        let [compliant, violations] = breakdown.slices();

        assert_eq!(compliant.name, "Compliant");
        assert_eq!(compliant.value, 94);
        assert_eq!(compliant.color, COMPLIANT_COLOR);

        assert_eq!(violations.name, "Violations");
        assert_eq!(violations.value, 6);
        assert_eq!(violations.color, VIOLATION_COLOR);
    }

    #[test]
    fn boundary_scores_are_valid() {
        assert_eq!(ComplianceBreakdown::from_score(0).unwrap().violation(), 100);
        assert_eq!(ComplianceBreakdown::from_score(100).unwrap().violation(), 0);
    }

    proptest! {
        #[test]
        fn slices_always_sum_to_100(score in 0u8..=100) {
            let breakdown = ComplianceBreakdown::from_score(score).unwrap();
            let [compliant, violations] = breakdown.slices();
            prop_assert_eq!(u32::from(compliant.value) + u32::from(violations.value), 100);
            prop_assert_eq!(violations.value, 100 - score);
        }
    }

    #[test]
    fn weekdays_are_seven_in_fixed_order() {
        let labels: Vec<_> = Weekday::ALL.iter().map(|d| d.label()).collect();
        assert_eq!(labels, ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]);
    }

    #[test]
    fn alert_record_serializes_kind_as_type() {
        let alert = AlertRecord {
            id: 1,
            kind: "Fall Detection".to_string(),
            description: "Worker detected near unprotected edge - Zone 3".to_string(),
            severity: Severity::Critical,
            time: "2 minutes ago".to_string(),
        };
        let json = serde_json::to_value(&alert).unwrap();
        assert_eq!(json["type"], "Fall Detection");
        assert_eq!(json["severity"], "critical");

        let back: AlertRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back, alert);
    }
}
