use crate::domain::article::entity::{Article, NewArticle};
use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Storage contract for articles.
///
/// `update` and `delete` report a missing record through `Ok(false)` rather
/// than an error; callers decide how absence maps to their own outcome.
#[async_trait]
pub trait ArticleRepository: Send + Sync {
    async fn get(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    /// Persists a new record under a freshly assigned identifier.
    async fn create(&self, article: NewArticle) -> DomainResult<ArticleId>;
    async fn update(&self, article: &Article) -> DomainResult<bool>;
    async fn delete(&self, id: ArticleId) -> DomainResult<bool>;
}
