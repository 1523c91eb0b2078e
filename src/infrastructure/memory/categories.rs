use super::store::MemoryStore;
use crate::domain::{
    category::{Category, CategoryFields, CategoryId, CategoryRepository},
    errors::DomainResult,
};
use async_trait::async_trait;
use std::sync::Arc;

#[derive(Clone)]
pub struct InMemoryCategoryRepository {
    store: Arc<MemoryStore>,
}

impl InMemoryCategoryRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn list(&self) -> DomainResult<Vec<Category>> {
        self.store.categories.list_all().await
    }

    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        self.store.categories.get(id.into()).await
    }

    async fn insert(&self, fields: CategoryFields) -> DomainResult<Category> {
        self.store
            .categories
            .insert_with(move |id| fields.with_id(CategoryId(id)))
            .await
    }

    async fn replace(&self, id: CategoryId, fields: CategoryFields) -> DomainResult<Category> {
        self.store
            .categories
            .replace(id.into(), fields.with_id(id))
            .await
    }

    // Deliberately blind to article_count.
    async fn remove(&self, id: CategoryId) -> DomainResult<()> {
        let removed = self.store.categories.remove(id.into()).await?;
        if !removed {
            tracing::debug!(%id, "delete matched no category");
        }
        Ok(())
    }
}
