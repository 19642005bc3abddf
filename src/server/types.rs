use crate::{dataset::DatasetTable, predictor::PredictionResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub predicted_price: f64,
    pub company_name: String,
    pub message: String,
}

impl From<PredictionResult> for PredictionResponse {
    fn from(result: PredictionResult) -> Self {
        Self {
            message: result.message(),
            predicted_price: result.predicted_price,
            company_name: result.company_name,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DatasetResponse {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl From<DatasetTable> for DatasetResponse {
    fn from(table: DatasetTable) -> Self {
        Self {
            headers: table.headers,
            rows: table.rows,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
