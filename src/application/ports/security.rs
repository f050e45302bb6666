// src/application/ports/security.rs
use crate::application::{ApplicationResult, dto::AuthenticatedUser};
use async_trait::async_trait;

#[async_trait]
pub trait TokenVerifier: Send + Sync {
    /// Validate a raw bearer token and return the caller it identifies.
    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser>;
}
