// tests/support/mocks/remote.rs
use async_trait::async_trait;
use folio_core::application::ports::remote::{
    RemoteArticleApi, RemoteCategoryApi, TransportError, TransportResult,
};
use folio_core::domain::{
    article::{Article, ArticleDraft, ArticleFields, ArticleId},
    category::{Category, CategoryDraft, CategoryFields, CategoryId},
};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Remote API that always fails with a network error and counts attempts.
#[derive(Debug, Default)]
pub struct CountingRemote {
    calls: AtomicUsize,
}

impl CountingRemote {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn refuse<T>(&self, path: &str) -> TransportResult<T> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(TransportError::Network {
            url: format!("http://remote.invalid{path}"),
            message: "connection refused".into(),
        })
    }
}

#[async_trait]
impl RemoteArticleApi for CountingRemote {
    async fn list_articles(&self) -> TransportResult<Vec<Article>> {
        self.refuse("/articles")
    }

    async fn get_article(&self, id: ArticleId) -> TransportResult<Article> {
        self.refuse(&format!("/articles/{id}"))
    }

    async fn create_article(&self, _draft: &ArticleDraft) -> TransportResult<Article> {
        self.refuse("/articles")
    }

    async fn update_article(
        &self,
        id: ArticleId,
        _fields: &ArticleFields,
    ) -> TransportResult<Article> {
        self.refuse(&format!("/articles/{id}"))
    }

    async fn delete_article(&self, id: ArticleId) -> TransportResult<()> {
        self.refuse(&format!("/articles/{id}"))
    }
}

#[async_trait]
impl RemoteCategoryApi for CountingRemote {
    async fn list_categories(&self) -> TransportResult<Vec<Category>> {
        self.refuse("/categories")
    }

    async fn get_category(&self, id: CategoryId) -> TransportResult<Category> {
        self.refuse(&format!("/categories/{id}"))
    }

    async fn create_category(&self, _draft: &CategoryDraft) -> TransportResult<Category> {
        self.refuse("/categories")
    }

    async fn update_category(
        &self,
        id: CategoryId,
        _fields: &CategoryFields,
    ) -> TransportResult<Category> {
        self.refuse(&format!("/categories/{id}"))
    }

    async fn delete_category(&self, id: CategoryId) -> TransportResult<()> {
        self.refuse(&format!("/categories/{id}"))
    }
}
