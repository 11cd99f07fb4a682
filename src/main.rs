use anyhow::Result;
use memshort::{config, server, telemetry};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = config::load_from_env()?;
    telemetry::init(&config)?;
    config.print_summary();

    if let Err(e) = server::run(config).await {
        tracing::error!(error = %e, "Failed to execute server");
        return Err(e);
    }

    tracing::info!("all systems offline");
    Ok(())
}
