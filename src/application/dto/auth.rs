use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub subject: String,
    pub name: Option<String>,
    pub expires_at: DateTime<Utc>,
}

impl AuthenticatedUser {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.subject)
    }
}
