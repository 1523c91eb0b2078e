use crate::domain::article::entity::{Article, ArticleFields};
use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleRepository: Send + Sync {
    /// All articles in insertion order.
    async fn list(&self) -> DomainResult<Vec<Article>>;
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    /// Assigns the next id and appends.
    async fn insert(&self, fields: ArticleFields) -> DomainResult<Article>;
    /// Overwrites the row in place when it exists. The returned article is
    /// the input carrying `id` whether or not a row matched; nothing is
    /// stored for an unknown id.
    async fn replace(&self, id: ArticleId, fields: ArticleFields) -> DomainResult<Article>;
    /// Succeeds whether or not a row matched.
    async fn remove(&self, id: ArticleId) -> DomainResult<()>;
}
