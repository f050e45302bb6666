// tests/support/builders.rs
use articles_api::domain::article::{Article, ArticleId, ArticleTitle};
use uuid::Uuid;

pub struct ArticleBuilder {
    id: Uuid,
    title: String,
    text: Option<String>,
}

impl ArticleBuilder {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            title: "Test Article".into(),
            text: Some("Test text".into()),
        }
    }

    pub fn id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn text(mut self, text: Option<&str>) -> Self {
        self.text = text.map(str::to_string);
        self
    }

    pub fn build(self) -> Article {
        Article {
            id: ArticleId::new(self.id),
            title: ArticleTitle::new(self.title).unwrap(),
            text: self.text,
        }
    }
}
