use std::fmt::Display;

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use service::accounts::filter::FilterError;
use service::errors::{FieldErrors, StoreError};

/// Terminal error response of a handler or middleware.
///
/// Rendered as `{"status": title, "error": detail, "errors": {field: msg}}`;
/// `error` and `errors` are left out when empty.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub title: &'static str,
    pub detail: Option<String>,
    pub errors: FieldErrors,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    status: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<&'a FieldErrors>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, title: &'static str, detail: Option<String>) -> Self {
        Self { status, title, detail, errors: FieldErrors::new() }
    }

    pub fn bad_request() -> Self {
        Self::new(StatusCode::BAD_REQUEST, "Bad request.", None)
    }

    pub fn not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND, "Resource not found.", None)
    }

    pub fn unauthorized() -> Self {
        Self::new(StatusCode::UNAUTHORIZED, "Unauthorized.", None)
    }

    pub fn forbidden() -> Self {
        Self::new(StatusCode::FORBIDDEN, "Forbidden.", None)
    }

    pub fn invalid_request(err: impl Display) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "Invalid request.", Some(err.to_string()))
    }

    pub fn validation(errors: FieldErrors) -> Self {
        Self {
            errors,
            ..Self::new(
                StatusCode::UNPROCESSABLE_ENTITY,
                "Validation error.",
                Some(StoreError::Validation(FieldErrors::new()).to_string()),
            )
        }
    }

    pub fn invalid_filter(err: &FilterError) -> Self {
        let mut errors = FieldErrors::new();
        errors.insert(err.param.clone(), err.reason.clone());
        Self { errors, ..Self::invalid_request(err) }
    }
}

impl From<StoreError> for JsonApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Validation(errors) => Self::validation(errors),
            other => Self::invalid_request(other),
        }
    }
}

impl From<JsonRejection> for JsonApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::invalid_request(rejection.body_text())
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            status: self.title,
            error: self.detail.as_deref(),
            errors: (!self.errors.is_empty()).then_some(&self.errors),
        };
        (self.status, Json(body)).into_response()
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("store initialisation failed: {0}")]
    Store(String),
    #[error(transparent)]
    Any(#[from] anyhow::Error),
}
