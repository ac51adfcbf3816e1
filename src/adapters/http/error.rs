//! API error type and the JSON error body shared by every endpoint.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::application::RiskServiceError;
use crate::domain::foundation::ValidationError;

/// Standard error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Additional details (optional).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl ErrorResponse {
    /// Create a new error response.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Create an error response with details.
    pub fn with_details(code: impl Into<String>, message: impl Into<String>, details: Value) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details),
        }
    }
}

/// API error type that converts service and boundary errors to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    /// Error raised by an application handler.
    Service(RiskServiceError),
    /// Malformed request that never reached a handler.
    BadRequest { message: String, details: Option<Value> },
    /// Caller asked for an audience it is not allowed to read.
    Forbidden(String),
}

impl ApiError {
    pub fn forbidden(message: impl Into<String>) -> Self {
        ApiError::Forbidden(message.into())
    }

    fn parts(&self) -> (StatusCode, ErrorResponse) {
        match self {
            ApiError::Service(err) => service_parts(err),
            ApiError::BadRequest { message, details } => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    code: "BAD_REQUEST".to_string(),
                    message: message.clone(),
                    details: details.clone(),
                },
            ),
            ApiError::Forbidden(message) => (
                StatusCode::FORBIDDEN,
                ErrorResponse::new("FORBIDDEN", message.clone()),
            ),
        }
    }
}

fn service_parts(err: &RiskServiceError) -> (StatusCode, ErrorResponse) {
    match err {
        RiskServiceError::InvalidInput(e) => (
            StatusCode::BAD_REQUEST,
            ErrorResponse::with_details("BAD_REQUEST", e.to_string(), json!({ "field": e.field() })),
        ),
        RiskServiceError::SweepTooLarge { points, limit } => (
            StatusCode::BAD_REQUEST,
            ErrorResponse::with_details(
                "BAD_REQUEST",
                err.to_string(),
                json!({ "points": points, "limit": limit }),
            ),
        ),
        RiskServiceError::EntityNotFound(_) => (
            StatusCode::NOT_FOUND,
            ErrorResponse::new("NOT_FOUND", err.to_string()),
        ),
        RiskServiceError::LookupTimedOut(_) => (
            StatusCode::GATEWAY_TIMEOUT,
            ErrorResponse::new("TIMEOUT", err.to_string()),
        ),
        // store details stay in the logs
        RiskServiceError::Store(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            ErrorResponse::new("INTERNAL_ERROR", "Entity store is unavailable"),
        ),
    }
}

impl From<RiskServiceError> for ApiError {
    fn from(err: RiskServiceError) -> Self {
        ApiError::Service(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::Service(RiskServiceError::InvalidInput(err))
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest {
            message: rejection.body_text(),
            details: None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = self.parts();
        if status.is_client_error() {
            tracing::warn!(status = status.as_u16(), code = %body.code, message = %body.message, "Request rejected");
        }
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::EntityId;
    use crate::ports::EntityStoreError;
    use std::time::Duration;

    fn status_and_code(err: ApiError) -> (StatusCode, String) {
        let (status, body) = err.parts();
        (status, body.code)
    }

    #[test]
    fn validation_maps_to_400_with_field() {
        let err = ApiError::from(ValidationError::non_finite("tempC"));
        let (status, body) = err.parts();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.code, "BAD_REQUEST");
        assert_eq!(body.details, Some(json!({ "field": "tempC" })));
    }

    #[test]
    fn service_errors_map_to_statuses() {
        assert_eq!(
            status_and_code(RiskServiceError::EntityNotFound(EntityId::new("P-1").unwrap()).into()),
            (StatusCode::NOT_FOUND, "NOT_FOUND".to_string())
        );
        assert_eq!(
            status_and_code(RiskServiceError::LookupTimedOut(Duration::from_millis(5)).into()),
            (StatusCode::GATEWAY_TIMEOUT, "TIMEOUT".to_string())
        );
        assert_eq!(
            status_and_code(
                RiskServiceError::Store(EntityStoreError::IoError("disk".to_string())).into()
            ),
            (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR".to_string())
        );
        assert_eq!(
            status_and_code(RiskServiceError::SweepTooLarge { points: 9, limit: 1 }.into()),
            (StatusCode::BAD_REQUEST, "BAD_REQUEST".to_string())
        );
    }

    #[test]
    fn store_error_message_does_not_leak_details() {
        let err: ApiError =
            RiskServiceError::Store(EntityStoreError::IoError("/etc/secret".to_string())).into();
        let (_, body) = err.parts();
        assert!(!body.message.contains("/etc/secret"));
    }

    #[test]
    fn forbidden_maps_to_403() {
        assert_eq!(
            status_and_code(ApiError::forbidden("nope")),
            (StatusCode::FORBIDDEN, "FORBIDDEN".to_string())
        );
    }

    #[test]
    fn error_response_omits_empty_details() {
        let json = serde_json::to_value(ErrorResponse::new("NOT_FOUND", "gone")).unwrap();
        assert_eq!(json, json!({ "code": "NOT_FOUND", "message": "gone" }));
    }
}
