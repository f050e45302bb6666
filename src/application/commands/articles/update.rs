use super::{ArticleCommandService, parse_article_id, validate_content};
use crate::application::{
    dto::{ArticleDto, ArticleView, AuthenticatedUser},
    error::{ApplicationError, ApplicationResult},
};

pub struct UpdateArticleCommand {
    pub id: String,
    pub payload: Option<ArticleView>,
}

impl ArticleCommandService {
    pub async fn update_article(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let content = validate_content(command.payload, "title was not provided")?;
        let id = parse_article_id(&command.id)?;

        let mut article = self
            .repo
            .get(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        article.set_content(content.title, content.text);

        if !self.repo.update(&article).await? {
            return Err(ApplicationError::rejected("article could not be updated"));
        }

        tracing::info!(article_id = %id, actor = actor.display_name(), "article updated");
        Ok(article.into())
    }
}
