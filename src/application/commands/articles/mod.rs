// src/application/commands/articles/mod.rs
mod create;
mod delete;
mod service;
mod update;

pub use create::CreateArticleCommand;
pub use delete::DeleteArticleCommand;
pub use service::ArticleCommandService;
pub use update::UpdateArticleCommand;

use crate::{
    application::{
        dto::ArticleView,
        error::{ApplicationError, ApplicationResult},
        validation::{ARTICLE_NULL, EMPTY_TITLE, ValidationErrors},
    },
    domain::article::{ArticleId, ArticleTitle},
};

struct ValidatedContent {
    title: ArticleTitle,
    text: Option<String>,
}

fn validate_content(
    payload: Option<ArticleView>,
    empty_title_message: &str,
) -> Result<ValidatedContent, ValidationErrors> {
    let mut errors = ValidationErrors::new();
    if payload.is_none() {
        errors.add(ARTICLE_NULL, "article object is mandatory");
    }

    let ArticleView { title, text } = payload.unwrap_or_default();
    let title = match ArticleTitle::new(title.unwrap_or_default()) {
        Ok(title) => Some(title),
        Err(_) => {
            errors.add(EMPTY_TITLE, empty_title_message);
            None
        }
    };

    match title {
        Some(title) if errors.is_empty() => Ok(ValidatedContent { title, text }),
        _ => Err(errors),
    }
}

fn parse_article_id(raw: &str) -> ApplicationResult<ArticleId> {
    raw.parse::<ArticleId>()
        .map_err(|_| ApplicationError::malformed_identifier(format!("'{raw}' is not a valid article id")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_payload_reports_both_errors() {
        let errors = validate_content(None, "title is mandatory")
            .err()
            .expect("validation should fail");
        assert_eq!(errors.len(), 2);
        assert!(errors.contains(ARTICLE_NULL));
        assert!(errors.contains(EMPTY_TITLE));
    }

    #[test]
    fn empty_title_is_rejected_regardless_of_text() {
        for text in [None, Some(String::new()), Some("body".to_string())] {
            let view = ArticleView {
                title: Some(String::new()),
                text,
            };
            let errors = validate_content(Some(view), "title is mandatory")
                .err()
                .expect("validation should fail");
            assert_eq!(errors.len(), 1);
            assert!(errors.contains(EMPTY_TITLE));
        }
    }

    #[test]
    fn valid_payload_passes_through() {
        let view = ArticleView {
            title: Some("Hello".into()),
            text: Some("World".into()),
        };
        let content = validate_content(Some(view), "title is mandatory")
            .ok()
            .expect("validation should pass");
        assert_eq!(content.title.as_str(), "Hello");
        assert_eq!(content.text.as_deref(), Some("World"));
    }

    #[test]
    fn malformed_id_maps_to_dedicated_error() {
        let err = parse_article_id("12345").unwrap_err();
        assert!(matches!(err, ApplicationError::MalformedIdentifier(_)));
    }
}
