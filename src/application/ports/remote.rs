// src/application/ports/remote.rs
use crate::domain::{
    article::{Article, ArticleDraft, ArticleFields, ArticleId},
    category::{Category, CategoryDraft, CategoryFields, CategoryId},
};
use async_trait::async_trait;
use thiserror::Error;

/// Failure of a single remote exchange. The façade never surfaces these to
/// callers; they trigger the fallback and are logged.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request to {url} timed out after {timeout_ms} ms")]
    Timeout { url: String, timeout_ms: u64 },

    #[error("network failure calling {url}: {message}")]
    Network { url: String, message: String },

    #[error("{url} answered with status {status}")]
    Status { url: String, status: u16 },

    #[error("undecodable response from {url}: {message}")]
    Decode { url: String, message: String },

    #[error("could not encode request body for {url}: {message}")]
    Encode { url: String, message: String },
}

impl TransportError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }
}

pub type TransportResult<T> = Result<T, TransportError>;

#[async_trait]
pub trait RemoteArticleApi: Send + Sync {
    async fn list_articles(&self) -> TransportResult<Vec<Article>>;
    async fn get_article(&self, id: ArticleId) -> TransportResult<Article>;
    /// Sends the draft as supplied; defaults are the backend's business.
    async fn create_article(&self, draft: &ArticleDraft) -> TransportResult<Article>;
    async fn update_article(&self, id: ArticleId, fields: &ArticleFields)
    -> TransportResult<Article>;
    async fn delete_article(&self, id: ArticleId) -> TransportResult<()>;
}

#[async_trait]
pub trait RemoteCategoryApi: Send + Sync {
    async fn list_categories(&self) -> TransportResult<Vec<Category>>;
    async fn get_category(&self, id: CategoryId) -> TransportResult<Category>;
    async fn create_category(&self, draft: &CategoryDraft) -> TransportResult<Category>;
    async fn update_category(
        &self,
        id: CategoryId,
        fields: &CategoryFields,
    ) -> TransportResult<Category>;
    async fn delete_category(&self, id: CategoryId) -> TransportResult<()>;
}
