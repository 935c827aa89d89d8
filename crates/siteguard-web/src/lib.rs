//! SiteGuard Web Interface
//!
//! A client-side rendered dashboard for construction-site safety monitoring.
//! Compiles to WebAssembly; all data in this scope is injected at mount time.

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

pub mod app;
pub mod components;
pub mod config;
pub mod nav;
pub mod pages;
pub mod state;

// Re-export the main entry points
pub use app::App;
pub use config::UiConfig;
pub use state::DashboardState;
