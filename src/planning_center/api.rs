//! HTTP client for the `Planning Center` Services API.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration as StdDuration;

use crate::config::Config;
use crate::error::{Error, Result};

const BASE_URL: &str = "https://api.planningcenteronline.com/services/v2";

/// Read-only access to the scheduling platform.
///
/// Every external lookup in the resolution pipeline goes through this trait,
/// so tests can substitute a canned transport for the real client. Paths are
/// relative to the Services API root (e.g. `/service_types`).
#[async_trait]
pub trait PcoTransport: Send + Sync {
    /// Perform an authenticated GET request and return the parsed JSON body.
    ///
    /// Errors map onto the failure taxonomy: [`Error::Network`] for
    /// transport failures and timeouts, [`Error::PlanningCenter`] for
    /// non-success HTTP statuses, [`Error::Parse`] for bodies that are not
    /// valid JSON. Callers apply their own degrade policy on top.
    async fn fetch_json(&self, path: &str, query: &[(&str, &str)]) -> Result<Value>;
}

/// Client for accessing the `Planning Center` Online Services API.
#[derive(Clone)]
pub struct PlanningCenterClient {
    app_id: String,
    secret: String,
    base_url: String,
    client: Client,
}

impl PlanningCenterClient {
    /// Create a new `Planning Center` client from config
    pub fn new(config: &Config) -> Self {
        Self {
            app_id: config.pco_app_id.clone(),
            secret: config.pco_secret.clone(),
            base_url: BASE_URL.to_string(),
            client: Client::builder()
                .timeout(StdDuration::from_secs(30))
                .build()
                .unwrap_or_default(),
        }
    }

    /// Override the API base URL (used by tests against a local mock server)
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Check if credentials are configured
    fn is_configured(&self) -> bool {
        !self.app_id.is_empty() && !self.secret.is_empty()
    }
}

#[async_trait]
impl PcoTransport for PlanningCenterClient {
    async fn fetch_json(&self, path: &str, query: &[(&str, &str)]) -> Result<Value> {
        if !self.is_configured() {
            return Err(Error::config(
                "Planning Center client not configured",
                "Set PCO_APP_ID and PCO_SECRET environment variables",
            ));
        }

        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, "querying Planning Center");

        let resp = self.client
            .get(&url)
            .basic_auth(&self.app_id, Some(&self.secret))
            .header("Content-Type", "application/json")
            .query(query)
            .send()
            .await
            .map_err(|e| Error::Network(format!("Request to {} failed: {}", path, e)))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Error::pco_status(
                format!("Request to {} returned {}", path, status),
                status.as_u16(),
            ));
        }

        resp.json().await
            .map_err(|e| Error::parse(format!("Invalid JSON from {}: {}", path, e), Some(path.to_string())))
    }
}
