use car_price_dashboard::{Result, model::RegressionModel};
use mockall::mock;

// Mock regression model for asserting what the predictor sends to it
mock! {
    pub Model {}

    impl RegressionModel for Model {
        fn predict(&self, features: &[f64]) -> Result<f64>;
        fn n_features(&self) -> Option<usize>;
    }
}

/// Model that returns the sum of its inputs
#[derive(Debug, Default)]
pub struct SumModel;

impl RegressionModel for SumModel {
    fn predict(&self, features: &[f64]) -> Result<f64> {
        Ok(features.iter().sum())
    }

    fn n_features(&self) -> Option<usize> {
        None
    }
}
