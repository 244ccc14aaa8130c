//! `Planning Center` API integration.
//!
//! Provides the authenticated HTTP client for `Planning Center` Online and
//! the data types its Services API responses are parsed into. The rest of
//! the crate talks to the API only through the [`PcoTransport`] seam.

/// API client for `Planning Center` Online requests
pub mod api;
/// Data types representing `Planning Center` resources
pub mod types;

// Re-export key components
pub use api::{PcoTransport, PlanningCenterClient};
