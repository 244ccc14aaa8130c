//! Application configuration.
//!
//! Handles loading configuration from environment variables and .env files.

use chrono::{FixedOffset, Offset, Utc};
use dotenv::dotenv;
use std::env;

use crate::error::Result;

/// The organization's local UTC offset in hours (no daylight-saving shift).
const DEFAULT_UTC_OFFSET_HOURS: i32 = -6;

/// Configuration for the application.
#[derive(Debug, Clone)]
pub struct Config {
    /// The application name
    app_name: String,
    /// The application version
    app_version: String,
    /// `Planning Center` Online application ID
    pub pco_app_id: String,
    /// `Planning Center` Online secret
    pub pco_secret: String,
    /// Fixed local UTC offset in hours for date defaults and start times
    pub utc_offset_hours: i32,
    /// Address the HTTP endpoints bind to
    pub bind_host: String,
    /// Port the HTTP endpoints bind to
    pub bind_port: u16,
}

impl Config {
    /// Get the application name.
    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Get the application version.
    #[must_use]
    pub fn app_version(&self) -> &str {
        &self.app_version
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: env!("CARGO_PKG_NAME").to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            pco_app_id: String::new(),
            pco_secret: String::new(),
            utc_offset_hours: DEFAULT_UTC_OFFSET_HOURS,
            bind_host: "0.0.0.0".to_string(),
            bind_port: 8000,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    #[allow(clippy::unnecessary_wraps)] // Returns Result for forward-compatible API
    pub fn load() -> Result<Self> {
        // Try to load .env file if present
        dotenv().ok();

        let mut config = Self::default();

        // Try to load Planning Center credentials from environment
        if let Ok(app_id) = env::var("PCO_APP_ID") {
            config.pco_app_id = app_id;
        }

        if let Ok(secret) = env::var("PCO_SECRET") {
            config.pco_secret = secret;
        }

        // Local offset can be configured via environment; reject offsets
        // chrono cannot represent and keep the default instead
        if let Ok(hours) = env::var("UTC_OFFSET_HOURS") {
            if let Ok(hours) = hours.parse::<i32>() {
                if hours.checked_mul(3600).and_then(FixedOffset::east_opt).is_some() {
                    config.utc_offset_hours = hours;
                }
            }
        }

        if let Ok(host) = env::var("BIND_HOST") {
            config.bind_host = host;
        }

        if let Ok(port) = env::var("BIND_PORT") {
            if let Ok(port) = port.parse::<u16>() {
                config.bind_port = port;
            }
        }

        Ok(config)
    }

    /// Build a config with explicit `Planning Center` credentials,
    /// bypassing the environment (used by tests and tooling).
    #[must_use]
    pub fn with_credentials(app_id: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            pco_app_id: app_id.into(),
            pco_secret: secret.into(),
            ..Self::default()
        }
    }

    /// Check if `Planning Center` is configured
    pub const fn has_planning_center_credentials(&self) -> bool {
        !self.pco_app_id.is_empty() && !self.pco_secret.is_empty()
    }

    /// The organization's local offset as a chrono [`FixedOffset`].
    pub fn utc_offset(&self) -> FixedOffset {
        // utc_offset_hours is validated at load time; fall back to UTC if a
        // hand-constructed Config carries an unrepresentable value
        self.utc_offset_hours
            .checked_mul(3600)
            .and_then(FixedOffset::east_opt)
            .unwrap_or_else(|| Utc.fix())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn default_offset_is_central() {
        let config = Config::default();
        assert_eq!(config.utc_offset_hours, -6);
        assert_eq!(config.utc_offset().local_minus_utc(), -6 * 3600);
    }

    #[test]
    fn out_of_range_offset_falls_back_to_utc() {
        let config = Config { utc_offset_hours: 999, ..Config::default() };
        assert_eq!(config.utc_offset().local_minus_utc(), 0);
    }

    #[test]
    fn missing_credentials_detected() {
        let config = Config::default();
        assert!(!config.has_planning_center_credentials());
    }
}
