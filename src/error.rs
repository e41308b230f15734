use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::models::ErrorResponse;

// errors that reach the caller of /explain, generation failures become fallback text
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid scenario")]
    InvalidScenario,

    #[error("{0}")]
    Malformed(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidScenario => StatusCode::BAD_REQUEST,
            ApiError::Malformed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("generation service returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("parse error: {0}")]
    Decode(String),

    #[error("generation service returned no text")]
    Empty,
}
