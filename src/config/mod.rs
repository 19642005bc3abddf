mod types;

pub use types::*;

use crate::Result;
use std::{env, io::ErrorKind};
use tracing::debug;

const DEFAULT_CONFIG_PATH: &str = "config.yaml";

pub async fn load() -> Result<Config> {
    match env::var("CONFIG_PATH") {
        Ok(config_path) => load_from(&config_path).await,
        Err(_) => match load_from(DEFAULT_CONFIG_PATH).await {
            Err(crate::Error::Io(e)) if e.kind() == ErrorKind::NotFound => {
                debug!(
                    "No {} found, using built-in defaults",
                    DEFAULT_CONFIG_PATH
                );
                Ok(Config::default())
            }
            other => other,
        },
    }
}

pub async fn load_from(config_path: &str) -> Result<Config> {
    debug!("Loading configuration from: {}", config_path);

    let config_str = tokio::fs::read_to_string(config_path).await?;
    parse(&config_str)
}

pub fn parse(config_str: &str) -> Result<Config> {
    // An empty document deserializes to `()` in serde_yaml, not to an empty map.
    if config_str.trim().is_empty() {
        return Ok(Config::default());
    }
    let config: Config = serde_yaml::from_str(config_str)?;
    Ok(config)
}
