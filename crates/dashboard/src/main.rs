use anyhow::{Context, Result};
use dashboard::{handler::AppRouter, state::AppState};
use dotenv::dotenv;
use shared::{config::Config, utils::init_logger};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let config = Config::init().context("Failed to load configuration")?;

    let _guard = init_logger("dashboard", config.is_dev, config.enable_file_log);

    info!("🔗 Backend API at {}", config.api_base_url);

    let port = config.port;

    let state = AppState::new(&config).context("Failed to create AppState")?;

    AppRouter::serve(port, state)
        .await
        .context("Failed to start server")?;

    info!("Shutting down servers...");

    Ok(())
}
