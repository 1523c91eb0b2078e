// src/infrastructure/remote/gateway.rs
use crate::{
    application::{
        dto::{ArticleDraftDto, ArticleDto, CategoryDraftDto, CategoryDto},
        ports::remote::{RemoteArticleApi, RemoteCategoryApi, TransportError, TransportResult},
    },
    domain::{
        article::{Article, ArticleDraft, ArticleFields, ArticleId},
        category::{Category, CategoryDraft, CategoryFields, CategoryId},
        errors::DomainResult,
    },
    infrastructure::http::{RawResponse, RequestOptions, TimeoutHttpClient},
};
use async_trait::async_trait;
use reqwest::Method;
use serde::{Serialize, de::DeserializeOwned};

/// JSON client for the `/articles` and `/categories` collections of the
/// remote content API.
#[derive(Debug, Clone)]
pub struct RemoteApiGateway {
    http: TimeoutHttpClient,
    base_url: String,
}

impl RemoteApiGateway {
    pub fn new(base_url: impl Into<String>, http: TimeoutHttpClient) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn exchange(&self, url: &str, options: RequestOptions) -> TransportResult<RawResponse> {
        let response = self.http.send(url, options).await?;
        if !response.status.is_success() {
            return Err(TransportError::Status {
                url: url.to_string(),
                status: response.status.as_u16(),
            });
        }
        Ok(response)
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> TransportResult<(String, T)> {
        let url = self.url(path);
        let response = self.exchange(&url, options).await?;
        match serde_json::from_slice(&response.body) {
            Ok(value) => Ok((url, value)),
            Err(err) => Err(TransportError::Decode {
                url,
                message: err.to_string(),
            }),
        }
    }

    async fn send_json<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> TransportResult<(String, T)> {
        let encoded = serde_json::to_vec(body).map_err(|err| TransportError::Encode {
            url: self.url(path),
            message: err.to_string(),
        })?;
        self.fetch(path, RequestOptions::json(method, encoded)).await
    }

    async fn delete(&self, path: &str) -> TransportResult<()> {
        let url = self.url(path);
        // Any 2xx counts; the body is not inspected.
        self.exchange(&url, RequestOptions::delete()).await?;
        Ok(())
    }
}

fn decoded<T>(url: String, result: DomainResult<T>) -> TransportResult<T> {
    result.map_err(|err| TransportError::Decode {
        url,
        message: err.to_string(),
    })
}

#[async_trait]
impl RemoteArticleApi for RemoteApiGateway {
    async fn list_articles(&self) -> TransportResult<Vec<Article>> {
        let (url, records): (_, Vec<ArticleDto>) =
            self.fetch("articles", RequestOptions::get()).await?;
        decoded(url, records.into_iter().map(ArticleDto::into_article).collect())
    }

    async fn get_article(&self, id: ArticleId) -> TransportResult<Article> {
        let (url, record): (_, ArticleDto) = self
            .fetch(&format!("articles/{id}"), RequestOptions::get())
            .await?;
        decoded(url, record.into_article())
    }

    async fn create_article(&self, draft: &ArticleDraft) -> TransportResult<Article> {
        let body = ArticleDraftDto::from(draft.clone());
        let (url, record): (_, ArticleDto) =
            self.send_json(Method::POST, "articles", &body).await?;
        decoded(url, record.into_article())
    }

    async fn update_article(
        &self,
        id: ArticleId,
        fields: &ArticleFields,
    ) -> TransportResult<Article> {
        let body = ArticleDto::from(fields.clone().with_id(id));
        let (url, record): (_, ArticleDto) = self
            .send_json(Method::PUT, &format!("articles/{id}"), &body)
            .await?;
        decoded(url, record.into_article())
    }

    async fn delete_article(&self, id: ArticleId) -> TransportResult<()> {
        self.delete(&format!("articles/{id}")).await
    }
}

#[async_trait]
impl RemoteCategoryApi for RemoteApiGateway {
    async fn list_categories(&self) -> TransportResult<Vec<Category>> {
        let (url, records): (_, Vec<CategoryDto>) =
            self.fetch("categories", RequestOptions::get()).await?;
        decoded(url, records.into_iter().map(CategoryDto::into_category).collect())
    }

    async fn get_category(&self, id: CategoryId) -> TransportResult<Category> {
        let (url, record): (_, CategoryDto) = self
            .fetch(&format!("categories/{id}"), RequestOptions::get())
            .await?;
        decoded(url, record.into_category())
    }

    async fn create_category(&self, draft: &CategoryDraft) -> TransportResult<Category> {
        let body = CategoryDraftDto::from(draft.clone());
        let (url, record): (_, CategoryDto) =
            self.send_json(Method::POST, "categories", &body).await?;
        decoded(url, record.into_category())
    }

    async fn update_category(
        &self,
        id: CategoryId,
        fields: &CategoryFields,
    ) -> TransportResult<Category> {
        let body = CategoryDto::from(fields.clone().with_id(id));
        let (url, record): (_, CategoryDto) = self
            .send_json(Method::PUT, &format!("categories/{id}"), &body)
            .await?;
        decoded(url, record.into_category())
    }

    async fn delete_category(&self, id: CategoryId) -> TransportResult<()> {
        self.delete(&format!("categories/{id}")).await
    }
}
