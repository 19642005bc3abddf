//! Price prediction from the sidebar inputs.

use crate::{Result, input::FeatureInput, model::RegressionModel};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Ordered `(horsepower, curb weight, highway mpg)` row fed to the model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector(pub [f64; 3]);

impl FeatureVector {
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

impl From<&FeatureInput> for FeatureVector {
    fn from(input: &FeatureInput) -> Self {
        Self([
            input.horsepower as f64,
            input.curb_weight as f64,
            input.highway_mpg as f64,
        ])
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub predicted_price: f64,
    pub company_name: String,
}

impl PredictionResult {
    pub fn message(&self) -> String {
        format!(
            "Predicted Price for {}: ${:.2}",
            self.company_name, self.predicted_price
        )
    }
}

/// Predicts a price for the given widget state.
///
/// Only horsepower, curb weight and highway mpg reach the model. Engine type,
/// body style, fuel type, city mpg, peak rpm, height, width, length, wheelbase
/// and symboling are collected by the form but ignored here. This mirrors the
/// dashboard this service replaces, whose model was trained on those three
/// features only; whether the other inputs were meant to be used is unknown,
/// so they are kept on the form and left out of the computation.
///
/// The model output is returned unchanged, paired with the company name.
pub fn predict_price(model: &dyn RegressionModel, input: &FeatureInput) -> Result<PredictionResult> {
    let features = FeatureVector::from(input);
    debug!(features = ?features.0, "Running price prediction");

    let predicted_price = model.predict(features.as_slice())?;

    Ok(PredictionResult {
        predicted_price,
        company_name: input.company_name.clone(),
    })
}
