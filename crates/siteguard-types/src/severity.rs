//! Alert severity and its style mappings
//!
//! Every mapping here is total: an unrecognized severity renders with the
//! neutral style instead of failing or leaving a value unstyled.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Categorical urgency label attached to an alert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Severity {
    /// Immediate danger to life, reddest styling
    Critical,
    /// Serious hazard requiring prompt action
    High,
    /// Noteworthy but not urgent
    Medium,
    /// Anything else, including labels this build does not know about
    Other,
}

impl From<String> for Severity {
    fn from(label: String) -> Self {
        Self::parse(&label)
    }
}

impl From<Severity> for String {
    fn from(severity: Severity) -> Self {
        severity.label().to_string()
    }
}

impl Severity {
    /// Parse a severity label. Total: unknown labels map to [`Severity::Other`].
    #[must_use]
    pub fn parse(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "critical" => Self::Critical,
            "high" => Self::High,
            "medium" => Self::Medium,
            _ => Self::Other,
        }
    }

    /// CSS class for the severity chip next to an alert title
    #[must_use]
    pub const fn chip_class(self) -> &'static str {
        match self {
            Self::Critical => "chip chip-error",
            Self::High => "chip chip-warning",
            Self::Medium => "chip chip-info",
            Self::Other => "chip chip-default",
        }
    }

    /// Fill color for the severity indicator glyph in the alert list
    #[must_use]
    pub const fn indicator_color(self) -> &'static str {
        match self {
            Self::Critical => "#f44336",
            Self::High => "#ff9800",
            Self::Medium => "#2196f3",
            Self::Other => "#9e9e9e",
        }
    }

    /// Lowercase label used for chip text
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("critical", Severity::Critical)]
    #[case("high", Severity::High)]
    #[case("medium", Severity::Medium)]
    #[case("CRITICAL", Severity::Critical)]
    #[case(" high ", Severity::High)]
    #[case("low", Severity::Other)]
    #[case("unknown", Severity::Other)]
    #[case("", Severity::Other)]
    fn parse_is_total(#[case] label: &str, #[case] expected: Severity) {
        assert_eq!(Severity::parse(label), expected);
    }

    #[rstest]
    #[case(Severity::Critical, "chip chip-error")]
    #[case(Severity::High, "chip chip-warning")]
    #[case(Severity::Medium, "chip chip-info")]
    #[case(Severity::Other, "chip chip-default")]
    fn chip_class_covers_every_variant(#[case] severity: Severity, #[case] class: &str) {
        assert_eq!(severity.chip_class(), class);
    }

    #[test]
    fn every_style_is_non_empty() {
        for severity in [
            Severity::Critical,
            Severity::High,
            Severity::Medium,
            Severity::Other,
        ] {
            assert!(!severity.chip_class().is_empty());
            assert!(severity.indicator_color().starts_with('#'));
            assert!(!severity.label().is_empty());
        }
    }

    #[test]
    fn unknown_json_severity_deserializes_to_other() {
        let severity: Severity = serde_json::from_str("\"fall_risk\"").unwrap();
        assert_eq!(severity, Severity::Other);
    }

    #[test]
    fn known_json_severity_round_trips() {
        let json = serde_json::to_string(&Severity::Critical).unwrap();
        assert_eq!(json, "\"critical\"");
        let back: Severity = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Severity::Critical);
    }
}
