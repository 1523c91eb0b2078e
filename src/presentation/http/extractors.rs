// src/presentation/http/extractors.rs
use crate::domain::{article::ArticleId, category::CategoryId};
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use super::error::{HttpError, HttpResult};

/// Raw `{id}` path segment. Coercion is lenient and never rejects the
/// request by itself: lookups and deletes treat an unusable id as "no such
/// row", updates refuse it with 400.
#[derive(Debug, Clone)]
pub struct PathId(pub String);

impl PathId {
    pub fn article(&self) -> Option<ArticleId> {
        ArticleId::coerce(&self.0)
    }

    pub fn category(&self) -> Option<CategoryId> {
        CategoryId::coerce(&self.0)
    }

    pub fn require_article(&self) -> HttpResult<ArticleId> {
        self.article().ok_or_else(|| self.invalid())
    }

    pub fn require_category(&self) -> HttpResult<CategoryId> {
        self.category().ok_or_else(|| self.invalid())
    }

    fn invalid(&self) -> HttpError {
        HttpError::bad_request(format!("invalid id: {:?}", self.0))
    }
}

impl<S> FromRequestParts<S> for PathId
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| HttpError::bad_request(rejection.body_text()))?;
        Ok(Self(raw))
    }
}
