use crate::domain::category::entity::{Category, CategoryFields};
use crate::domain::category::value_objects::CategoryId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Same contract as [`crate::domain::article::ArticleRepository`]. `remove`
/// never looks at `article_count`.
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn list(&self) -> DomainResult<Vec<Category>>;
    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>>;
    async fn insert(&self, fields: CategoryFields) -> DomainResult<Category>;
    async fn replace(&self, id: CategoryId, fields: CategoryFields) -> DomainResult<Category>;
    async fn remove(&self, id: CategoryId) -> DomainResult<()>;
}
