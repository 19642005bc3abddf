use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Model load error: {0}")]
    ModelLoad(String),

    #[error("Model error: {0}")]
    Model(String),

    #[error("Feature shape mismatch: model expects {expected} features, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    #[error("Dataset error: {0}")]
    Dataset(#[from] csv::Error),

    #[error("Malformed dataset: {0}")]
    MalformedDataset(String),

    #[error("Invalid state transition: {current} -> {requested}")]
    InvalidTransition { current: String, requested: String },

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Address parse error: {0}")]
    AddrParse(#[from] std::net::AddrParseError),
}

impl Error {
    pub fn model_load(msg: impl Into<String>) -> Self {
        Self::ModelLoad(msg.into())
    }

    pub fn model(msg: impl Into<String>) -> Self {
        Self::Model(msg.into())
    }

    pub fn malformed_dataset(msg: impl Into<String>) -> Self {
        Self::MalformedDataset(msg.into())
    }
}
