//! Pure display types for the SiteGuard dashboard
//!
//! Everything in this crate is a plain, serializable record with no I/O and
//! no framework dependency. The web crate renders these records; a future
//! backend can produce them over the wire without reshaping.

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

pub mod dashboard;
pub mod error;
pub mod nav;
pub mod severity;
pub mod snapshot;

// Re-export commonly used types
pub use dashboard::{
    AlertRecord, ComplianceBreakdown, ComplianceSlice, DashboardSummary, Weekday, WeeklyDataPoint,
};
pub use error::ModelError;
pub use nav::{NavIcon, NavItem, NotificationSummary};
pub use severity::Severity;
pub use snapshot::DashboardSnapshot;

/// Result type alias using [`ModelError`]
pub type Result<T> = std::result::Result<T, ModelError>;
