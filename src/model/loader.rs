use super::{ModelArtifact, RegressionModel};
use crate::{Error, Result};
use std::path::Path;
use tracing::info;

/// Reads and deserializes a model artifact. The artifact's shape is not
/// checked here; a mismatch surfaces on the first `predict` call.
pub async fn load_model<P: AsRef<Path>>(path: P) -> Result<ModelArtifact> {
    let path = path.as_ref();

    info!(path = %path.display(), "Loading regression model");

    let bytes = tokio::fs::read(path).await.map_err(|e| {
        Error::model_load(format!("failed to read {}: {}", path.display(), e))
    })?;

    let artifact: ModelArtifact = serde_json::from_slice(&bytes).map_err(|e| {
        Error::model_load(format!("{} is not a valid model artifact: {}", path.display(), e))
    })?;

    info!(
        path = %path.display(),
        n_features = ?artifact.n_features(),
        "Model loaded successfully"
    );

    Ok(artifact)
}
