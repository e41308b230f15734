use axum::{Json, extract::State, extract::rejection::JsonRejection};
use std::sync::Arc;

use crate::error::ApiError;
use crate::metrics::{MALFORMED_TOTAL, REQUEST_TOTAL};
use crate::models::{ExplainRequest, ExplainResponse};
use crate::state::AppState;

pub async fn explain_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ExplainRequest>, JsonRejection>,
) -> Result<Json<ExplainResponse>, ApiError> {
    REQUEST_TOTAL.inc();

    let Json(request) = payload.map_err(|rejection| {
        MALFORMED_TOTAL.inc();
        tracing::warn!(error = %rejection.body_text(), "unreadable explain request");
        ApiError::Malformed(rejection.body_text())
    })?;

    let explanation = state.service.explain(&request).await?;
    Ok(Json(ExplainResponse { explanation }))
}
