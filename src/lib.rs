//! `techbridge` - `Planning Center` to Discord scheduling bridge.
//!
//! Resolves, for a given calendar date, which service is scheduled in
//! `Planning Center` Online, which people are assigned as audio/video
//! technicians for it, and the Discord IDs stored in their profile notes.
//! The resolution pipeline is exposed through a small set of read-only
//! HTTP endpoints consumed by a chat bot.

// Re-export public modules for use in integration tests and as a library
pub mod config;
pub mod error;
pub mod pipeline;
pub mod planning_center;
pub mod server;
