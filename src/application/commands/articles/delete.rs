// src/application/commands/articles/delete.rs
use super::{ArticleCommandService, parse_article_id};
use crate::application::{
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult},
};

pub struct DeleteArticleCommand {
    pub id: String,
}

impl ArticleCommandService {
    pub async fn delete_article(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteArticleCommand,
    ) -> ApplicationResult<()> {
        let id = parse_article_id(&command.id)?;

        if !self.repo.delete(id).await? {
            return Err(ApplicationError::not_found("article not found"));
        }

        tracing::info!(article_id = %id, actor = actor.display_name(), "article deleted");
        Ok(())
    }
}
