pub mod config;
pub mod dashboard;
pub mod dataset;
pub mod error;
pub mod input;
pub mod model;
pub mod predictor;
pub mod server;

pub use error::{Error, Result};
