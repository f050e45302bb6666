// src/presentation/http/middleware/require_bearer.rs
use crate::application::{
    ApplicationResult, error::ApplicationError, ports::security::TokenVerifier,
};
use crate::presentation::http::error::HttpError;
use crate::presentation::http::state::HttpState;
use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use headers::{Authorization, HeaderMapExt, authorization::Bearer};
use std::sync::Arc;

/// Admits requests carrying a valid `Authorization: Bearer` token and makes
/// the caller available to handlers as an extension.
///
/// Usage: `put(handler).route_layer(axum::middleware::from_fn(require_bearer))`
pub async fn require_bearer(mut req: Request, next: Next) -> Response {
    let (token, verifier) = match bearer_credentials(&req) {
        Ok(parts) => parts,
        Err(err) => return reject(err),
    };

    match verifier.authenticate(&token).await {
        Ok(user) => {
            tracing::debug!(
                subject = %user.subject,
                expires_at = %user.expires_at.to_rfc3339(),
                "bearer token accepted"
            );
            req.extensions_mut().insert(user);
            next.run(req).await
        }
        Err(err) => reject(err),
    }
}

fn bearer_credentials(req: &Request) -> ApplicationResult<(String, Arc<dyn TokenVerifier>)> {
    let header = req
        .headers()
        .typed_get::<Authorization<Bearer>>()
        .ok_or_else(|| ApplicationError::unauthorized("missing bearer token"))?;

    let state = req
        .extensions()
        .get::<HttpState>()
        .ok_or_else(|| ApplicationError::infrastructure("application state missing"))?;

    Ok((
        header.token().to_owned(),
        state.services.token_verifier(),
    ))
}

fn reject(err: ApplicationError) -> Response {
    tracing::info!(reason = %err, "request rejected by bearer gate");
    HttpError::from_error(err).into_response()
}
