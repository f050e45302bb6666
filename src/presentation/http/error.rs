use crate::application::{
    ApplicationResult, error::ApplicationError, validation::FieldError,
};
use crate::domain::errors::DomainError;
use axum::{
    Json,
    http::{HeaderValue, StatusCode, header::WWW_AUTHENTICATE},
    response::{IntoResponse, Response},
};
use chrono::Utc;
use serde::Serialize;
use std::any::Any;
use utoipa::ToSchema;

const GENERIC_FAILURE: &str = "the request could not be processed";

#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    message: String,
    errors: Vec<FieldError>,
}

impl HttpError {
    pub fn from_error(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Validation(errors) => {
                tracing::warn!(
                    occurred_at = %Utc::now().to_rfc3339(),
                    errors = %errors,
                    "request failed validation"
                );
                let mut http = Self::new(
                    StatusCode::BAD_REQUEST,
                    "one or more validation errors occurred".into(),
                );
                http.errors = errors.into_vec();
                http
            }
            ApplicationError::MalformedIdentifier(msg) => Self::new(StatusCode::BAD_REQUEST, msg),
            ApplicationError::NotFound(msg) => Self::new(StatusCode::NOT_FOUND, msg),
            ApplicationError::Rejected(msg) => Self::new(StatusCode::BAD_REQUEST, msg),
            ApplicationError::Unauthorized(msg) => Self::new(StatusCode::UNAUTHORIZED, msg),
            ApplicationError::Infrastructure(msg) => Self::unexpected(&msg),
            ApplicationError::Domain(domain_err) => Self::from_domain(domain_err),
        }
    }

    fn from_domain(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) | DomainError::Conflict(msg) => {
                Self::new(StatusCode::BAD_REQUEST, msg)
            }
            DomainError::Persistence(msg) => Self::unexpected(&msg),
        }
    }

    /// Logs the real cause and hides it from the caller behind a plain 400.
    pub fn unexpected(detail: &str) -> Self {
        tracing::error!(
            occurred_at = %Utc::now().to_rfc3339(),
            error = detail,
            "unexpected failure while handling request"
        );
        Self::new(StatusCode::BAD_REQUEST, GENERIC_FAILURE.into())
    }

    fn new(status: StatusCode, message: String) -> Self {
        Self {
            status,
            message,
            errors: Vec::new(),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let payload = ErrorResponse {
            error: self
                .status
                .canonical_reason()
                .unwrap_or("error")
                .to_string(),
            message: self.message,
            errors: self.errors,
        };
        let mut response = (self.status, Json(payload)).into_response();
        if self.status == StatusCode::UNAUTHORIZED {
            response
                .headers_mut()
                .insert(WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
        }
        response
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<FieldError>,
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from_error)
    }
}

/// Response used by the panic-catching layer.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(msg) = panic.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = panic.downcast_ref::<String>() {
        msg.clone()
    } else {
        "handler panicked".to_string()
    };
    HttpError::unexpected(&format!("panic: {detail}")).into_response()
}
