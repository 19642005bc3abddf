use car_price_dashboard::{
    input::{BodyStyle, EngineType, FeatureInput, FuelType},
    model::{ModelArtifact, ModelHandle, load_model},
    server::{AppState, router},
};
use axum::Router;
use std::path::PathBuf;
use tempfile::TempDir;

/// Header and first rows of the car price dataset
pub const SAMPLE_DATASET_CSV: &str = "\
car_ID,symboling,CarName,fueltype,carbody,enginetype,horsepower,curbweight,highwaympg,price
1,3,alfa-romero giulia,gas,convertible,dohc,111,2548,27,13495
2,3,alfa-romero stelvio,gas,convertible,dohc,111,2548,27,16500
3,1,alfa-romero Quadrifoglio,gas,hatchback,ohcv,154,2823,26,16500
4,2,audi 100 ls,gas,sedan,ohc,102,2337,30,13950
";

/// Linear artifact that adds its three inputs
pub const IDENTITY_SUM_MODEL_JSON: &str = r#"{
  "kind": "linear",
  "coefficients": [1.0, 1.0, 1.0],
  "intercept": 0.0
}"#;

/// Linear artifact trained on two features; breaks on the three-feature row
pub const TWO_FEATURE_MODEL_JSON: &str = r#"{
  "kind": "linear",
  "coefficients": [1.0, 1.0],
  "intercept": 0.0
}"#;

pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Write `content` to `name` inside `dir` and return the full path
pub fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("Failed to write test file");
    path
}

pub async fn load_artifact(dir: &TempDir, json: &str) -> ModelArtifact {
    let path = write_file(dir, "model.json", json);
    load_model(&path).await.expect("Failed to load test model")
}

/// Router over the identity-sum model and the sample dataset
pub async fn create_test_app(dir: &TempDir) -> Router {
    create_test_app_with_model(dir, IDENTITY_SUM_MODEL_JSON).await
}

pub async fn create_test_app_with_model(dir: &TempDir, model_json: &str) -> Router {
    let model = ModelHandle::new(load_artifact(dir, model_json).await);
    let dataset_path = write_file(dir, "CarPrice_Assignment.csv", SAMPLE_DATASET_CSV);
    router(AppState::new(
        model,
        dataset_path,
        "Car Price Prediction Dashboard",
    ))
}

/// Fully populated input, as in the end-to-end scenario
pub fn sample_input() -> FeatureInput {
    FeatureInput {
        company_name: "Toyota".to_string(),
        engine_type: EngineType::Ohc,
        body_style: BodyStyle::Sedan,
        fuel_type: FuelType::Gas,
        highway_mpg: 27,
        city_mpg: 21,
        peak_rpm: 5000,
        horsepower: 111,
        curb_weight: 2548,
        height: 48.8,
        width: 64.1,
        length: 168.8,
        wheelbase: 88.6,
        symboling: 3,
    }
}
