//! Reusable UI components for the dashboard

pub mod charts;
pub mod chip;
pub mod icons;
pub mod progress;
pub mod stat_card;

pub use charts::{ComplianceDonut, WeeklyTrendChart};
pub use chip::SeverityChip;
pub use progress::LinearProgress;
pub use stat_card::StatCard;
