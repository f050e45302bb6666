use super::ArticleQueryService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::ArticleId,
};

pub struct GetArticleByIdQuery {
    pub id: String,
}

impl ArticleQueryService {
    /// An id that does not parse cannot name an article, so it is reported
    /// as not found rather than as a malformed request.
    pub async fn get_article_by_id(
        &self,
        query: GetArticleByIdQuery,
    ) -> ApplicationResult<ArticleDto> {
        let Ok(id) = query.id.parse::<ArticleId>() else {
            return Err(ApplicationError::not_found("article not found"));
        };

        let article = self
            .repo
            .get(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;
        Ok(article.into())
    }
}
