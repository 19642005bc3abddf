use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub dashboard: DashboardConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub logs: LogsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogsConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default = "default_title")]
    pub title: String,
    /// Serialized regression artifact, read once at startup.
    #[serde(default = "default_model_path")]
    pub model_path: String,
    /// CSV shown under "Dataset"; re-read on every render.
    #[serde(default = "default_dataset_path")]
    pub dataset_path: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            logs: LogsConfig::default(),
        }
    }
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            model_path: default_model_path(),
            dataset_path: default_dataset_path(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_title() -> String {
    "Car Price Prediction Dashboard".to_string()
}

fn default_model_path() -> String {
    "model.json".to_string()
}

fn default_dataset_path() -> String {
    "CarPrice_Assignment.csv".to_string()
}
