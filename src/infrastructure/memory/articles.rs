use super::store::MemoryStore;
use crate::domain::{
    article::{Article, ArticleFields, ArticleId, ArticleRepository},
    errors::DomainResult,
};
use async_trait::async_trait;
use std::sync::Arc;

#[derive(Clone)]
pub struct InMemoryArticleRepository {
    store: Arc<MemoryStore>,
}

impl InMemoryArticleRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ArticleRepository for InMemoryArticleRepository {
    async fn list(&self) -> DomainResult<Vec<Article>> {
        self.store.articles.list_all().await
    }

    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        self.store.articles.get(id.into()).await
    }

    async fn insert(&self, fields: ArticleFields) -> DomainResult<Article> {
        self.store
            .articles
            .insert_with(move |id| fields.with_id(ArticleId(id)))
            .await
    }

    async fn replace(&self, id: ArticleId, fields: ArticleFields) -> DomainResult<Article> {
        self.store
            .articles
            .replace(id.into(), fields.with_id(id))
            .await
    }

    async fn remove(&self, id: ArticleId) -> DomainResult<()> {
        let removed = self.store.articles.remove(id.into()).await?;
        if !removed {
            tracing::debug!(%id, "delete matched no article");
        }
        Ok(())
    }
}
