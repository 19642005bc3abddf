pub mod handlers;
pub mod types;

use crate::{Result, config::Config, model::ModelHandle};
use axum::{
    Router,
    routing::{get, post},
};
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;
use tracing::info;

pub use handlers::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::dashboard))
        .route("/api/predict", post(handlers::predict))
        .route("/api/dataset", get(handlers::dataset))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(config: Config, model: ModelHandle) -> Result<()> {
    let app_state = AppState::new(
        model,
        config.dashboard.dataset_path.clone(),
        &config.dashboard.title,
    );

    let app = router(app_state);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting dashboard on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
