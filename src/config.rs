// src/config.rs
use std::{env, fmt, str::FromStr};
use thiserror::Error;

const MIN_JWT_SECRET_LEN: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Memory,
    Postgres,
}

impl FromStr for StorageBackend {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(Self::Memory),
            "postgres" | "postgresql" => Ok(Self::Postgres),
            other => Err(ConfigError::Invalid(format!(
                "STORAGE_BACKEND must be 'memory' or 'postgres', got '{other}'"
            ))),
        }
    }
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Memory => f.write_str("memory"),
            Self::Postgres => f.write_str("postgres"),
        }
    }
}

#[derive(Clone)]
pub struct JwtSettings {
    secret: String,
    issuer: Option<String>,
    audience: Option<String>,
}

impl JwtSettings {
    pub fn secret(&self) -> &[u8] {
        self.secret.as_bytes()
    }

    pub fn issuer(&self) -> Option<&str> {
        self.issuer.as_deref()
    }

    pub fn audience(&self) -> Option<&str> {
        self.audience.as_deref()
    }
}

impl fmt::Debug for JwtSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtSettings")
            .field("secret", &"<redacted>")
            .field("issuer", &self.issuer)
            .field("audience", &self.audience)
            .finish()
    }
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    listen_addr: String,
    environment: String,
    storage: StorageBackend,
    database_url: Option<String>,
    database_max_connections: u32,
    jwt: JwtSettings,
    allowed_origins: Vec<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn default_environment() -> String {
    "development".into()
}

fn default_max_connections() -> u32 {
    16
}

impl AppConfig {
    /// Build configuration from environment variables, letting a `.env`
    /// file fill in anything not already set.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup. Blank values count
    /// as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let listen_addr = get("LISTEN_ADDR").unwrap_or_else(default_listen_addr);
        let environment = get("APP_ENV").unwrap_or_else(default_environment);
        let database_url = get("DATABASE_URL");

        let storage = match get("STORAGE_BACKEND") {
            Some(value) => value.parse()?,
            None if database_url.is_some() => StorageBackend::Postgres,
            None => StorageBackend::Memory,
        };

        if storage == StorageBackend::Postgres && database_url.is_none() {
            return Err(ConfigError::Missing("DATABASE_URL"));
        }

        let database_max_connections = match get("DATABASE_MAX_CONNECTIONS") {
            Some(value) => value
                .parse::<u32>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| {
                    ConfigError::Invalid(
                        "DATABASE_MAX_CONNECTIONS must be a positive integer".into(),
                    )
                })?,
            None => default_max_connections(),
        };

        let secret = get("JWT_SECRET").ok_or(ConfigError::Missing("JWT_SECRET"))?;
        if secret.len() < MIN_JWT_SECRET_LEN {
            return Err(ConfigError::Invalid(format!(
                "JWT_SECRET must be at least {MIN_JWT_SECRET_LEN} bytes"
            )));
        }

        let jwt = JwtSettings {
            secret,
            issuer: get("JWT_VALID_ISSUER"),
            audience: get("JWT_VALID_AUDIENCE"),
        };

        let allowed_origins = get("ALLOWED_ORIGINS")
            .map(|s| {
                s.split(',')
                    .map(|p| p.trim().to_string())
                    .filter(|p| !p.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            listen_addr,
            environment,
            storage,
            database_url,
            database_max_connections,
            jwt,
            allowed_origins,
        })
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn environment(&self) -> &str {
        &self.environment
    }

    /// API docs are only mounted for development builds.
    pub fn expose_docs(&self) -> bool {
        self.environment.eq_ignore_ascii_case("development")
    }

    pub fn storage(&self) -> StorageBackend {
        self.storage
    }

    pub fn database_url(&self) -> Option<&str> {
        self.database_url.as_deref()
    }

    pub fn database_max_connections(&self) -> u32 {
        self.database_max_connections
    }

    pub fn jwt(&self) -> &JwtSettings {
        &self.jwt
    }

    /// Empty means any origin.
    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }
}
