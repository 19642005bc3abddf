use anyhow::Result;
use car_price_dashboard::{config, model, server};
use tracing::{error, info};

/// Validates that a log level string is valid
fn validate_log_level(level: &str) -> Result<()> {
    level
        .parse::<tracing_subscriber::filter::LevelFilter>()
        .map_err(|_| {
            anyhow::anyhow!(
                "Invalid log level: '{}'. Valid levels: error, warn, info, debug, trace",
                level
            )
        })?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (before logging setup)
    let config = match config::load().await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Environment variable overrides config
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| config.server.logs.level.clone());

    if let Err(e) = validate_log_level(&log_level) {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_level)),
        )
        .json()
        .init();

    info!(
        "Starting car price dashboard with log level: {}",
        log_level
    );

    // The model is loaded exactly once; the server cannot start without it.
    let model = match model::load_model(&config.dashboard.model_path).await {
        Ok(artifact) => model::ModelHandle::new(artifact),
        Err(e) => {
            error!(path = %config.dashboard.model_path, "Failed to load model: {}", e);
            std::process::exit(1);
        }
    };

    server::run(config, model).await?;

    Ok(())
}
