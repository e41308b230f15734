mod explain;
mod health;
mod metrics;

pub use explain::explain_handler;
pub use health::health_handler;
pub use metrics::metrics_handler;

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::state::AppState;

// creating the router with routes, open to any origin
pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_handler))
        .route("/explain", post(explain_handler))
        .route("/api/explain", post(explain_handler)) // path used by the calculator front end
        .route("/metrics", get(metrics_handler))
        .layer(cors)
        .with_state(state)
}
