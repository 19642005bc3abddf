use super::types::{DatasetResponse, ErrorResponse, PredictionResponse};
use crate::{
    dashboard::{RenderCycle, render_error_page, render_page},
    dataset::load_dataset,
    input::FeatureInput,
    model::ModelHandle,
    predictor::predict_price,
};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, Json},
};
use std::{collections::HashMap, path::PathBuf, sync::Arc};
use tracing::{error, info};

#[derive(Clone, Debug)]
pub struct AppState {
    pub model: ModelHandle,
    pub dataset_path: Arc<PathBuf>,
    pub title: Arc<str>,
}

impl AppState {
    pub fn new(model: ModelHandle, dataset_path: impl Into<PathBuf>, title: &str) -> Self {
        Self {
            model,
            dataset_path: Arc::new(dataset_path.into()),
            title: Arc::from(title),
        }
    }
}

/// One render cycle: read widget state from the query string, predict if the
/// button was pressed, then re-read the dataset.
pub async fn dashboard(
    State(state): State<AppState>,
    Query(form): Query<HashMap<String, String>>,
) -> Result<Html<String>, (StatusCode, Html<String>)> {
    let mut cycle = RenderCycle::new(FeatureInput::from_form(&form));

    if form.contains_key("predict") {
        let outcome = cycle
            .trigger_prediction(state.model.model())
            .map(|result| result.message());
        match outcome {
            Ok(message) => {
                info!(cycle = %cycle.id(), "{}", message);
            }
            Err(e) => {
                error!(cycle = %cycle.id(), "Prediction failed: {}", e);
                return Err(error_page(&state, format!("Prediction failed: {e}")));
            }
        }
    }

    let dataset = match load_dataset(state.dataset_path.as_path()).await {
        Ok(dataset) => dataset,
        Err(e) => {
            error!(
                cycle = %cycle.id(),
                path = %state.dataset_path.display(),
                "Failed to load dataset: {}",
                e
            );
            return Err(error_page(&state, format!("Failed to load dataset: {e}")));
        }
    };

    Ok(Html(render_page(&state.title, &cycle, &dataset)))
}

pub async fn predict(
    State(state): State<AppState>,
    Json(input): Json<FeatureInput>,
) -> Result<Json<PredictionResponse>, (StatusCode, Json<ErrorResponse>)> {
    let input = input.clamped();
    info!("Received prediction request for company: {}", input.company_name);

    match predict_price(state.model.model(), &input) {
        Ok(result) => Ok(Json(result.into())),
        Err(e) => {
            error!("Prediction failed for {}: {}", input.company_name, e);
            Err(json_error(format!("Prediction error: {e}")))
        }
    }
}

pub async fn dataset(
    State(state): State<AppState>,
) -> Result<Json<DatasetResponse>, (StatusCode, Json<ErrorResponse>)> {
    match load_dataset(state.dataset_path.as_path()).await {
        Ok(table) => Ok(Json(table.into())),
        Err(e) => {
            error!(
                path = %state.dataset_path.display(),
                "Failed to load dataset: {}",
                e
            );
            Err(json_error(format!("Dataset error: {e}")))
        }
    }
}

fn error_page(state: &AppState, message: String) -> (StatusCode, Html<String>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Html(render_error_page(&state.title, &message)),
    )
}

fn json_error(message: String) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse { error: message }),
    )
}
