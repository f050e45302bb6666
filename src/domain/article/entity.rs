// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleId, ArticleTitle};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub text: Option<String>,
}

impl Article {
    /// Replaces the mutable fields. The identifier never changes.
    pub fn set_content(&mut self, title: ArticleTitle, text: Option<String>) {
        self.title = title;
        self.text = text;
    }
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: ArticleTitle,
    pub text: Option<String>,
}

impl NewArticle {
    pub fn into_article(self, id: ArticleId) -> Article {
        Article {
            id,
            title: self.title,
            text: self.text,
        }
    }
}
