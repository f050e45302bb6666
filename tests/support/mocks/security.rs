use chrono::{Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use serde_json::json;

pub const TEST_SECRET: &str = "integration-test-secret-0123456789abcdef";
pub const TEST_ISSUER: &str = "articles-api-tests";
pub const TEST_AUDIENCE: &str = "articles-api-clients";

fn sign(claims: serde_json::Value) -> String {
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .expect("sign test token")
}

/// 有効なアクセストークンを発行する
pub fn mint_token(subject: &str) -> String {
    sign(json!({
        "sub": subject,
        "name": format!("{subject} (test)"),
        "iss": TEST_ISSUER,
        "aud": TEST_AUDIENCE,
        "exp": (Utc::now() + Duration::hours(1)).timestamp(),
    }))
}

/// 期限切れのトークン
pub fn expired_token() -> String {
    sign(json!({
        "sub": "late",
        "iss": TEST_ISSUER,
        "aud": TEST_AUDIENCE,
        "exp": (Utc::now() - Duration::hours(3)).timestamp(),
    }))
}

/// 発行者が異なるトークン
pub fn foreign_issuer_token() -> String {
    sign(json!({
        "sub": "intruder",
        "iss": "somebody-else",
        "aud": TEST_AUDIENCE,
        "exp": (Utc::now() + Duration::hours(1)).timestamp(),
    }))
}
