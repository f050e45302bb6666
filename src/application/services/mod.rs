// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::articles::ArticleCommandService, ports::security::TokenVerifier,
        queries::articles::ArticleQueryService,
    },
    domain::article::ArticleRepository,
};

pub struct ApplicationServices {
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    token_verifier: Arc<dyn TokenVerifier>,
}

impl ApplicationServices {
    pub fn new(
        article_repo: Arc<dyn ArticleRepository>,
        token_verifier: Arc<dyn TokenVerifier>,
    ) -> Self {
        let article_commands = Arc::new(ArticleCommandService::new(Arc::clone(&article_repo)));
        let article_queries = Arc::new(ArticleQueryService::new(Arc::clone(&article_repo)));

        Self {
            article_commands,
            article_queries,
            token_verifier,
        }
    }

    pub fn token_verifier(&self) -> Arc<dyn TokenVerifier> {
        Arc::clone(&self.token_verifier)
    }
}
