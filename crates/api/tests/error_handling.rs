//! Tests for `AppError` → HTTP response mapping.
//!
//! These tests verify that each `AppError` variant produces the correct
//! HTTP status code, error code, and message. They do NOT need an HTTP
//! server -- they call `IntoResponse` directly on `AppError` values.

use axum::response::IntoResponse;
use http_body_util::BodyExt;

use gatepass_api::error::AppError;
use gatepass_core::error::CoreError;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (axum::http::StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

// ---------------------------------------------------------------------------
// Test: CoreError::NotFound maps to 404 with NOT_FOUND code
// ---------------------------------------------------------------------------

#[tokio::test]
async fn not_found_error_returns_404() {
    let err = AppError::Core(CoreError::pass_not_found_by_id(42));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Pass not found with id: 42");
}

// ---------------------------------------------------------------------------
// Test: CoreError::InvalidInput maps to 400 with VALIDATION_ERROR code
// ---------------------------------------------------------------------------

#[tokio::test]
async fn invalid_input_error_returns_400() {
    let err = AppError::Core(CoreError::InvalidInput("Pass code is required".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "Pass code is required");
}

// ---------------------------------------------------------------------------
// Test: CoreError::DuplicateCode maps to 409 with DUPLICATE_CODE code
// ---------------------------------------------------------------------------

#[tokio::test]
async fn duplicate_code_error_returns_409() {
    let err = AppError::Core(CoreError::DuplicateCode("PASS-001".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::CONFLICT);
    assert_eq!(json["code"], "DUPLICATE_CODE");
    assert_eq!(json["error"], "Pass code already exists: PASS-001");
}

// ---------------------------------------------------------------------------
// Test: CoreError::AlreadyDone maps to 400 with ALREADY_DONE code
// ---------------------------------------------------------------------------

#[tokio::test]
async fn already_done_error_returns_400() {
    let err = AppError::Core(CoreError::AlreadyDone("Entry already verified"));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "ALREADY_DONE");
    assert_eq!(json["error"], "Entry already verified");
}

// ---------------------------------------------------------------------------
// Test: CoreError::Unexpected maps to sanitized 500
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unexpected_error_returns_sanitized_500() {
    let err = AppError::Core(CoreError::Unexpected("connection pool exhausted".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    // Internal diagnostic detail never reaches the caller.
    assert_eq!(json["error"], "An internal error occurred");
}

// ---------------------------------------------------------------------------
// Test: sqlx RowNotFound maps to 404
// ---------------------------------------------------------------------------

#[tokio::test]
async fn sqlx_row_not_found_returns_404() {
    let err = AppError::Database(sqlx::Error::RowNotFound);

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
}

// ---------------------------------------------------------------------------
// Test: other sqlx errors map to sanitized 500
// ---------------------------------------------------------------------------

#[tokio::test]
async fn sqlx_generic_error_returns_sanitized_500() {
    let err = AppError::Database(sqlx::Error::PoolTimedOut);

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "An internal error occurred");
}
