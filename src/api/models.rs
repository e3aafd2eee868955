use crate::storage::{SlothPayload, SlothStore};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub store: SlothStore,
}

/// Request body wrapper for create/update: `{"sloth": {...}}`
#[derive(Debug, Deserialize)]
pub struct SlothEnvelope {
    #[serde(default)]
    pub sloth: SlothPayload,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub total_sloths: i64,
}

/// Body of a 404 response: `{"msg": "There's no sloth with an id of <id>"}`
#[derive(Debug, Serialize)]
pub struct NotFoundResponse {
    pub msg: String,
}

/// Body of a 400 response, shaped like the driver error object the
/// storage layer reports.
#[derive(Debug, Serialize)]
pub struct DriverErrorResponse {
    pub name: String,
    pub message: String,
}

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("There's no sloth with an id of {0}")]
    NotFound(i64),
    #[error("{0}")]
    BadRequest(String),
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound(_) => (
                StatusCode::NOT_FOUND,
                Json(NotFoundResponse {
                    msg: self.to_string(),
                }),
            )
                .into_response(),
            // Storage errors are passed through as the response body with a
            // 400 status; no transient/permanent distinction is made.
            AppError::BadRequest(_) | AppError::Database(_) => (
                StatusCode::BAD_REQUEST,
                Json(DriverErrorResponse {
                    name: "error".to_string(),
                    message: self.to_string(),
                }),
            )
                .into_response(),
        }
    }
}
