use crate::application::{
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult},
};
use chrono::DateTime;
use serde::Deserialize;

/// Registered and private claims read from an access token. Issuer and
/// audience are checked by `jsonwebtoken` itself and are not kept here.
#[derive(Debug, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: i64,
    #[serde(default)]
    pub name: Option<String>,
}

impl Claims {
    pub fn into_authenticated(self) -> ApplicationResult<AuthenticatedUser> {
        if self.sub.trim().is_empty() {
            return Err(ApplicationError::unauthorized("token subject is empty"));
        }

        let expires_at = DateTime::from_timestamp(self.exp, 0)
            .ok_or_else(|| ApplicationError::unauthorized("token expiry out of range"))?;

        Ok(AuthenticatedUser {
            subject: self.sub,
            name: self.name,
            expires_at,
        })
    }
}
