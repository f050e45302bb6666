// src/application/commands/articles/create.rs
use super::{ArticleCommandService, validate_content};
use crate::{
    application::{
        dto::{ArticleDto, ArticleView, AuthenticatedUser},
        error::ApplicationResult,
    },
    domain::article::NewArticle,
};

pub struct CreateArticleCommand {
    /// `None` when the request carried no readable body.
    pub payload: Option<ArticleView>,
}

impl ArticleCommandService {
    pub async fn create_article(
        &self,
        actor: &AuthenticatedUser,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let content = validate_content(command.payload, "article title is mandatory")?;

        let new_article = NewArticle {
            title: content.title,
            text: content.text,
        };

        let id = self.repo.create(new_article.clone()).await?;
        tracing::info!(article_id = %id, actor = actor.display_name(), "article created");
        Ok(new_article.into_article(id).into())
    }
}
