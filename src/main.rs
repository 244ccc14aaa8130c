//! `techbridge` - `Planning Center` to Discord scheduling bridge.

use anyhow::Result;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use techbridge::config::Config;
use techbridge::planning_center::PlanningCenterClient;
use techbridge::server;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("techbridge=info")),
        )
        .init();

    let config = Config::load()?;
    tracing::info!("{} {} starting", config.app_name(), config.app_version());

    if !config.has_planning_center_credentials() {
        // Every upstream lookup will fail authentication and the endpoints
        // will serve empty results until credentials are provided
        tracing::warn!("PCO_APP_ID / PCO_SECRET not set; Planning Center lookups will fail");
    }

    let client = Arc::new(PlanningCenterClient::new(&config));
    server::run_server(&config, client).await
}
