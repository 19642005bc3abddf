use super::RegressionModel;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// On-disk model formats, discriminated by the `kind` field.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModelArtifact {
    Linear(LinearModel),
    TreeEnsemble(TreeEnsembleModel),
}

impl RegressionModel for ModelArtifact {
    fn predict(&self, features: &[f64]) -> Result<f64> {
        match self {
            Self::Linear(model) => model.predict(features),
            Self::TreeEnsemble(model) => model.predict(features),
        }
    }

    fn n_features(&self) -> Option<usize> {
        match self {
            Self::Linear(model) => model.n_features(),
            Self::TreeEnsemble(model) => model.n_features(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearModel {
    pub coefficients: Vec<f64>,
    #[serde(default)]
    pub intercept: f64,
}

impl RegressionModel for LinearModel {
    fn predict(&self, features: &[f64]) -> Result<f64> {
        if features.len() != self.coefficients.len() {
            return Err(Error::ShapeMismatch {
                expected: self.coefficients.len(),
                actual: features.len(),
            });
        }

        Ok(self
            .coefficients
            .iter()
            .zip(features)
            .fold(self.intercept, |acc, (w, x)| acc + w * x))
    }

    fn n_features(&self) -> Option<usize> {
        Some(self.coefficients.len())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Aggregation {
    /// Boosted ensembles: leaf values are added to the base score.
    #[default]
    Sum,
    /// Forests: leaf values are averaged, then added to the base score.
    Mean,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeEnsembleModel {
    pub n_features: usize,
    #[serde(default)]
    pub base_score: f64,
    #[serde(default)]
    pub aggregation: Aggregation,
    pub trees: Vec<Tree>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tree {
    /// Flattened nodes; index 0 is the root.
    pub nodes: Vec<TreeNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TreeNode {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        value: f64,
    },
}

impl Tree {
    pub fn evaluate(&self, features: &[f64]) -> Result<f64> {
        let mut index = 0;
        // A well-formed tree reaches a leaf in at most `nodes.len()` steps.
        for _ in 0..=self.nodes.len() {
            let node = self
                .nodes
                .get(index)
                .ok_or_else(|| Error::model(format!("tree node {index} out of range")))?;

            match node {
                TreeNode::Leaf { value } => return Ok(*value),
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    let x = features.get(*feature).ok_or_else(|| {
                        Error::model(format!(
                            "split on feature {feature} but only {} features given",
                            features.len()
                        ))
                    })?;
                    index = if *x <= *threshold { *left } else { *right };
                }
            }
        }

        Err(Error::model("tree contains a cycle"))
    }
}

impl RegressionModel for TreeEnsembleModel {
    fn predict(&self, features: &[f64]) -> Result<f64> {
        if features.len() != self.n_features {
            return Err(Error::ShapeMismatch {
                expected: self.n_features,
                actual: features.len(),
            });
        }

        let mut total = 0.0;
        for tree in &self.trees {
            total += tree.evaluate(features)?;
        }

        let combined = match self.aggregation {
            Aggregation::Sum => total,
            Aggregation::Mean if self.trees.is_empty() => 0.0,
            Aggregation::Mean => total / self.trees.len() as f64,
        };

        Ok(self.base_score + combined)
    }

    fn n_features(&self) -> Option<usize> {
        Some(self.n_features)
    }
}
