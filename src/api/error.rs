//! HTTP error mapping.

use crate::order_actor::OrderError;
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Order(#[from] OrderError),

    #[error("Malformed payload: {0}")]
    MalformedPayload(String),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::MalformedPayload(rejection.body_text())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::MalformedPayload(e.to_string())
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MalformedPayload(_) => StatusCode::BAD_REQUEST,
            ApiError::Order(OrderError::ValidationError(_)) => StatusCode::BAD_REQUEST,
            ApiError::Order(OrderError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Order(OrderError::InvalidTransition { .. }) => StatusCode::CONFLICT,
            ApiError::Order(OrderError::ActorCommunicationError(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, "Request failed");
        }

        (status, Json(ErrorResponse { error: self.to_string() })).into_response()
    }
}
