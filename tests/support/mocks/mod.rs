// tests/support/mocks/mod.rs
//! テスト用モックの再エクスポート
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod article_repos;
pub mod security;

pub use article_repos::{
    FailingArticleRepo, PanickingArticleRepo, RecordingArticleRepo, RefusingUpdateRepo, RepoCall,
};
pub use security::{
    TEST_AUDIENCE, TEST_ISSUER, TEST_SECRET, expired_token, foreign_issuer_token, mint_token,
};
