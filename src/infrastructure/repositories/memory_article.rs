// src/infrastructure/repositories/memory_article.rs
use crate::domain::article::{Article, ArticleId, ArticleRepository, NewArticle};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use tokio::sync::RwLock;

/// Process-local article store.
///
/// Deleted identifiers are remembered so that `create` never reissues one.
#[derive(Default)]
pub struct InMemoryArticleRepository {
    state: RwLock<StoreState>,
}

#[derive(Default)]
struct StoreState {
    articles: HashMap<ArticleId, Article>,
    retired: HashSet<ArticleId>,
}

impl StoreState {
    fn is_taken(&self, id: &ArticleId) -> bool {
        self.articles.contains_key(id) || self.retired.contains(id)
    }
}

impl InMemoryArticleRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.state.read().await.articles.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl ArticleRepository for InMemoryArticleRepository {
    async fn get(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        Ok(self.state.read().await.articles.get(&id).cloned())
    }

    async fn create(&self, article: NewArticle) -> DomainResult<ArticleId> {
        let mut state = self.state.write().await;
        let id = loop {
            let candidate = ArticleId::generate();
            if !state.is_taken(&candidate) {
                break candidate;
            }
        };
        state.articles.insert(id, article.into_article(id));
        Ok(id)
    }

    async fn update(&self, article: &Article) -> DomainResult<bool> {
        let mut state = self.state.write().await;
        match state.articles.get_mut(&article.id) {
            Some(existing) => {
                existing.set_content(article.title.clone(), article.text.clone());
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<bool> {
        let mut state = self.state.write().await;
        if state.articles.remove(&id).is_some() {
            state.retired.insert(id);
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
