// src/infrastructure/repositories/postgres_article.rs
use super::map_sqlx;
use crate::domain::article::{Article, ArticleId, ArticleRepository, ArticleTitle, NewArticle};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

const MAX_CREATE_ATTEMPTS: usize = 3;

#[derive(Clone)]
pub struct PostgresArticleRepository {
    pool: PgPool,
}

impl PostgresArticleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Inserts under `id` unless that id is live or retired.
    async fn try_insert(&self, id: ArticleId, article: &NewArticle) -> DomainResult<bool> {
        let result = sqlx::query(
            "INSERT INTO articles (id, title, text)
             SELECT $1, $2, $3
             WHERE NOT EXISTS (SELECT 1 FROM retired_article_ids WHERE id = $1)
             ON CONFLICT (id) DO NOTHING",
        )
        .bind(Uuid::from(id))
        .bind(article.title.as_str())
        .bind(article.text.as_deref())
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(result.rows_affected() == 1)
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: Uuid,
    title: String,
    text: Option<String>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article {
            id: ArticleId::new(row.id),
            title: ArticleTitle::new(row.title)?,
            text: row.text,
        })
    }
}

#[async_trait]
impl ArticleRepository for PostgresArticleRepository {
    async fn get(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(
            "SELECT id, title, text FROM articles WHERE id = $1",
        )
        .bind(Uuid::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn create(&self, article: NewArticle) -> DomainResult<ArticleId> {
        for _ in 0..MAX_CREATE_ATTEMPTS {
            let id = ArticleId::generate();
            if self.try_insert(id, &article).await? {
                return Ok(id);
            }
            tracing::warn!(article_id = %id, "generated article id already taken, retrying");
        }

        Err(DomainError::Conflict(
            "could not allocate a unique article id".into(),
        ))
    }

    async fn update(&self, article: &Article) -> DomainResult<bool> {
        let result = sqlx::query(
            "UPDATE articles SET title = $2, text = $3, updated_at = now() WHERE id = $1",
        )
        .bind(Uuid::from(article.id))
        .bind(article.title.as_str())
        .bind(article.text.as_deref())
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<bool> {
        let result = sqlx::query(
            "WITH removed AS (DELETE FROM articles WHERE id = $1 RETURNING id)
             INSERT INTO retired_article_ids (id) SELECT id FROM removed",
        )
        .bind(Uuid::from(id))
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(result.rows_affected() > 0)
    }
}
