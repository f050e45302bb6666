use crate::domain::article::Article;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ArticleDto {
    pub id: Uuid,
    pub title: String,
    pub text: Option<String>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            title: article.title.into_inner(),
            text: article.text,
        }
    }
}

/// Create/update payload. Both fields may be null on the wire; the
/// command services decide what is acceptable.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct ArticleView {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}
