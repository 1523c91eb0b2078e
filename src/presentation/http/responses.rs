use crate::application::dto::{ArticleDto, CategoryDto, Page, Sourced};
use axum::{
    Json,
    http::{HeaderName, StatusCode},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::error::{HttpError, HttpResult};

/// Response header carrying the provenance of every façade-backed answer.
pub const DATA_SOURCE: HeaderName = HeaderName::from_static("x-data-source");

/// JSON body plus the `x-data-source` header.
#[derive(Debug)]
pub struct SourcedJson<T> {
    status: StatusCode,
    inner: Sourced<T>,
}

impl<T> SourcedJson<T> {
    pub fn ok(inner: Sourced<T>) -> Self {
        Self {
            status: StatusCode::OK,
            inner,
        }
    }

    pub fn created(inner: Sourced<T>) -> Self {
        Self {
            status: StatusCode::CREATED,
            inner,
        }
    }
}

impl<T> SourcedJson<Option<T>> {
    /// Turns an absent record into a 404 that still reports where the
    /// lookup was served from.
    pub fn found(inner: Sourced<Option<T>>, what: &str) -> HttpResult<SourcedJson<T>> {
        let Sourced { source, data } = inner;
        match data {
            Some(data) => Ok(SourcedJson::ok(Sourced { source, data })),
            None => Err(HttpError::not_found(format!("{what} not found")).with_source(source)),
        }
    }
}

impl<T: Serialize> IntoResponse for SourcedJson<T> {
    fn into_response(self) -> Response {
        let source = self.inner.source;
        (
            self.status,
            [(DATA_SOURCE, source.as_str())],
            Json(self.inner.data),
        )
            .into_response()
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticlePageResponse {
    pub items: Vec<ArticleDto>,
    pub page: u32,
    pub per_page: u32,
    pub total_items: usize,
    pub total_pages: u32,
}

impl From<Page<ArticleDto>> for ArticlePageResponse {
    fn from(page: Page<ArticleDto>) -> Self {
        Self {
            items: page.items,
            page: page.page,
            per_page: page.per_page,
            total_items: page.total_items,
            total_pages: page.total_pages,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryPageResponse {
    pub items: Vec<CategoryDto>,
    pub page: u32,
    pub per_page: u32,
    pub total_items: usize,
    pub total_pages: u32,
}

impl From<Page<CategoryDto>> for CategoryPageResponse {
    fn from(page: Page<CategoryDto>) -> Self {
        Self {
            items: page.items,
            page: page.page,
            per_page: page.per_page,
            total_items: page.total_items,
            total_pages: page.total_pages,
        }
    }
}
