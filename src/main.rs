use anyhow::Context;
use tracing::info;

use travelmonth::{AppConfig, AppState, telemetry, web};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("Failed to load configuration")?;
    telemetry::init_logging(&config.logging)?;

    info!(
        "Starting travelmonth {} (knowledge API: {})",
        travelmonth::VERSION,
        config.search.base_url
    );

    let state = AppState::from_config(&config).context("Failed to create attraction client")?;
    web::run(&config, state).await.context("Web server stopped")?;

    Ok(())
}
