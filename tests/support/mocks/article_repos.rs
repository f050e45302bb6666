// tests/support/mocks/article_repos.rs
use articles_api::domain::article::{Article, ArticleId, ArticleRepository, NewArticle};
use articles_api::domain::errors::{DomainError, DomainResult};
use articles_api::infrastructure::repositories::InMemoryArticleRepository;
use async_trait::async_trait;
use std::sync::Mutex;

/* -------------------------------- FailingArticleRepo -------------------------------- */

/// 常に永続化エラーを返すリポジトリ
pub struct FailingArticleRepo;

fn connection_lost<T>() -> DomainResult<T> {
    Err(DomainError::Persistence("connection to database lost".into()))
}

#[async_trait]
impl ArticleRepository for FailingArticleRepo {
    async fn get(&self, _id: ArticleId) -> DomainResult<Option<Article>> {
        connection_lost()
    }

    async fn create(&self, _article: NewArticle) -> DomainResult<ArticleId> {
        connection_lost()
    }

    async fn update(&self, _article: &Article) -> DomainResult<bool> {
        connection_lost()
    }

    async fn delete(&self, _id: ArticleId) -> DomainResult<bool> {
        connection_lost()
    }
}

/* -------------------------------- PanickingArticleRepo -------------------------------- */

/// 呼び出されるとパニックするリポジトリ
pub struct PanickingArticleRepo;

#[async_trait]
impl ArticleRepository for PanickingArticleRepo {
    async fn get(&self, _id: ArticleId) -> DomainResult<Option<Article>> {
        panic!("storage exploded")
    }

    async fn create(&self, _article: NewArticle) -> DomainResult<ArticleId> {
        panic!("storage exploded")
    }

    async fn update(&self, _article: &Article) -> DomainResult<bool> {
        panic!("storage exploded")
    }

    async fn delete(&self, _id: ArticleId) -> DomainResult<bool> {
        panic!("storage exploded")
    }
}

/* -------------------------------- RefusingUpdateRepo -------------------------------- */

/// 記事は見つかるが更新を拒否するリポジトリ
pub struct RefusingUpdateRepo {
    pub article: Article,
}

#[async_trait]
impl ArticleRepository for RefusingUpdateRepo {
    async fn get(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        Ok((id == self.article.id).then(|| self.article.clone()))
    }

    async fn create(&self, _article: NewArticle) -> DomainResult<ArticleId> {
        Ok(self.article.id)
    }

    async fn update(&self, _article: &Article) -> DomainResult<bool> {
        Ok(false)
    }

    async fn delete(&self, _id: ArticleId) -> DomainResult<bool> {
        Ok(false)
    }
}

/* -------------------------------- RecordingArticleRepo -------------------------------- */

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoCall {
    Get(ArticleId),
    Create(String),
    Update(ArticleId),
    Delete(ArticleId),
}

/// 呼び出しを記録しつつインメモリ実装へ委譲するリポジトリ
#[derive(Default)]
pub struct RecordingArticleRepo {
    inner: InMemoryArticleRepository,
    calls: Mutex<Vec<RepoCall>>,
}

impl RecordingArticleRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<RepoCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: RepoCall) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl ArticleRepository for RecordingArticleRepo {
    async fn get(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        self.record(RepoCall::Get(id));
        self.inner.get(id).await
    }

    async fn create(&self, article: NewArticle) -> DomainResult<ArticleId> {
        self.record(RepoCall::Create(article.title.as_str().to_string()));
        self.inner.create(article).await
    }

    async fn update(&self, article: &Article) -> DomainResult<bool> {
        self.record(RepoCall::Update(article.id));
        self.inner.update(article).await
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<bool> {
        self.record(RepoCall::Delete(id));
        self.inner.delete(id).await
    }
}
