//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use vows_core::validate::Violations;

/// An error returned by an API handler.
///
/// Nothing here is fatal: a store failure poisons only the triggering
/// request, and a validation failure is rendered as per-field messages for
/// the form to show inline.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("validation failed")]
  Validation(Violations),

  #[error("bad request: {0}")]
  BadRequest(String),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    match self {
      ApiError::Validation(violations) => (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(json!({ "errors": violations })),
      )
        .into_response(),
      ApiError::BadRequest(m) => {
        (StatusCode::BAD_REQUEST, Json(json!({ "error": m }))).into_response()
      }
      ApiError::Store(e) => (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": e.to_string() })),
      )
        .into_response(),
    }
  }
}
