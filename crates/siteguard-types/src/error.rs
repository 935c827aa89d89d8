//! Error types for SiteGuard display records

use thiserror::Error;

/// Errors produced when constructing validated display records
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// A compliance score outside the 0–100 percentage range
    #[error("compliance score {score} is out of range (expected 0..=100)")]
    InvalidScore {
        /// The rejected score value
        score: u8,
    },
}
