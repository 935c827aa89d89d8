//! Page components for the web interface

pub mod alerts;
pub mod analytics;
pub mod dashboard;
pub mod live;
pub mod not_found;
pub mod sites;
