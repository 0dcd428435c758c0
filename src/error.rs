//! # error
//!
//! Centralised application error type.
//!
//! Every handler returns `Result<_, AppError>`.  Axum's `IntoResponse` impl
//! converts these into structured JSON error bodies so the dashboard always
//! gets a machine-readable response even on failure.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// The request payload was syntactically correct but semantically invalid.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An upstream CSV fetch failed.  Fatal to the whole refresh cycle —
    /// feed fetches never raise this, they degrade to empty item lists.
    #[error("Fetch failed: {0}")]
    Fetch(String),

    /// A required CSV column could not be resolved against any alias.
    /// Carries the full header set so the user can fix their sheet.
    #[error("Missing required columns [{missing}]; available headers: [{available}]")]
    MissingColumns { missing: String, available: String },

    /// Catch-all for unexpected failures.
    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Build a `MissingColumns` error from the unresolved alias groups and
    /// the headers that were actually present.
    pub fn missing_columns(missing: &[&str], available: &[String]) -> Self {
        AppError::MissingColumns {
            missing: missing.join(", "),
            available: available.join(", "),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Fetch(msg) => (StatusCode::BAD_GATEWAY, msg.clone()),
            AppError::MissingColumns { .. } => {
                (StatusCode::UNPROCESSABLE_ENTITY, self.to_string())
            }
            AppError::Internal(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Internal error: {err}"),
            ),
        };

        let body = Json(json!({
            "ok":    false,
            "error": message,
        }));

        (status, body).into_response()
    }
}
