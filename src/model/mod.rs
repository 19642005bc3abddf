//! Regression model loading and inference.
//!
//! The dashboard treats the model as an opaque `predict(features) -> price`
//! function. Concrete model families live in [`artifact`]; callers only ever
//! see [`RegressionModel`] through a [`ModelHandle`].

mod artifact;
mod loader;

pub use artifact::{Aggregation, LinearModel, ModelArtifact, Tree, TreeEnsembleModel, TreeNode};
pub use loader::load_model;

use crate::Result;
use std::{fmt, sync::Arc};

pub trait RegressionModel: Send + Sync {
    /// Runs inference on a single feature row.
    fn predict(&self, features: &[f64]) -> Result<f64>;

    /// Number of features the model was trained on, when the artifact records it.
    fn n_features(&self) -> Option<usize>;
}

/// Shared, read-only handle to the model loaded at startup.
#[derive(Clone)]
pub struct ModelHandle {
    inner: Arc<dyn RegressionModel>,
}

impl ModelHandle {
    pub fn new(model: impl RegressionModel + 'static) -> Self {
        Self {
            inner: Arc::new(model),
        }
    }

    pub fn model(&self) -> &dyn RegressionModel {
        self.inner.as_ref()
    }
}

impl fmt::Debug for ModelHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelHandle")
            .field("n_features", &self.inner.n_features())
            .finish()
    }
}
