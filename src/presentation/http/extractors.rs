// src/presentation/http/extractors.rs
use crate::application::{dto::AuthenticatedUser, error::ApplicationError};
use axum::{extract::FromRequestParts, http::request::Parts};

use super::error::HttpError;

/// The caller admitted by the bearer middleware.
#[derive(Debug, Clone)]
pub struct Authenticated(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for Authenticated
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .map(Self)
            .ok_or_else(|| {
                HttpError::from_error(ApplicationError::unauthorized(
                    "request was not authenticated",
                ))
            })
    }
}
