use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use gatepass_core::error::CoreError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and sqlx errors for anything the
/// store surfaces directly. Implements [`IntoResponse`] to produce
/// consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `gatepass_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<validator::ValidationErrors> for AppError {
    /// Flatten validation failures into a single `InvalidInput` message,
    /// one clause per offending field.
    fn from(errors: validator::ValidationErrors) -> Self {
        let message = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{field} is invalid"))
                })
            })
            .collect::<Vec<_>>()
            .join(", ");
        AppError::Core(CoreError::InvalidInput(message))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            // Fixed variant-to-status mapping; scanning clients key off
            // the `code` field, not the status.
            AppError::Core(core) => match core {
                CoreError::InvalidInput(_) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", core.to_string())
                }
                CoreError::NotFound { .. } => {
                    (StatusCode::NOT_FOUND, "NOT_FOUND", core.to_string())
                }
                CoreError::DuplicateCode(_) => {
                    (StatusCode::CONFLICT, "DUPLICATE_CODE", core.to_string())
                }
                CoreError::AlreadyDone(_) => {
                    (StatusCode::BAD_REQUEST, "ALREADY_DONE", core.to_string())
                }
                CoreError::Unexpected(msg) => {
                    tracing::error!(error = %msg, "Unexpected core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                    )
                }
            },

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - `RowNotFound` maps to 404.
/// - Unique constraint violations (constraint name starting with `uq_`) map
///   to 409. The create handler translates the pass-code index into
///   `DuplicateCode` before reaching this path; this is the backstop for
///   any other unique index added later.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        sqlx::Error::Database(db_err) => {
            // PostgreSQL unique constraint violation: error code 23505
            if db_err.code().as_deref() == Some("23505") {
                let constraint = db_err.constraint().unwrap_or("unknown");
                if constraint.starts_with("uq_") {
                    return (
                        StatusCode::CONFLICT,
                        "CONFLICT",
                        format!("Duplicate value violates unique constraint: {constraint}"),
                    );
                }
            }
            tracing::error!(error = %db_err, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
    }
}
