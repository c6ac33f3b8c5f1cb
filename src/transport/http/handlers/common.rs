use crate::domain::LookupError;
use crate::transport::http::types::{ErrorResponse, CACHE_CONTROL_VALUE};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
        .into_response()
}

/// Renders a lookup result: 200 with a cacheable JSON body, or the error's status.
pub fn lookup_response<T: Serialize>(result: Result<T, LookupError>) -> Response {
    match result {
        Ok(body) => (
            StatusCode::OK,
            [(header::CACHE_CONTROL, CACHE_CONTROL_VALUE)],
            Json(body),
        )
            .into_response(),
        Err(err) => {
            if matches!(err, LookupError::Cancelled | LookupError::DeadlineExceeded) {
                tracing::warn!(error = %err, "lookup did not complete");
            }
            error_response(err.status(), err.public_message())
        }
    }
}
