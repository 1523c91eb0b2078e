// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{ComposeArticleCommand, PublishArticleCommand, ReviseArticleCommand},
    dto::{ArticleDraftDto, ArticleDto, ComposeArticleDto, DeleteAckDto, ReviseArticleDto},
    queries::articles::{BrowseArticlesQuery, RelatedArticlesQuery},
};
use crate::presentation::http::{
    error::{ErrorResponse, HttpError, HttpResult, IntoHttpResult},
    extractors::PathId,
    responses::{ArticlePageResponse, SourcedJson},
    state::HttpState,
};
use axum::{Extension, Json, extract::Query};
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BrowseArticlesParams {
    /// `admin` or `reader` (alias `user`); trusted as given.
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    /// `all`, `published` or `draft`; admins only.
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub per_page: Option<u32>,
}

impl BrowseArticlesParams {
    fn into_query(self) -> HttpResult<BrowseArticlesQuery> {
        let role = self
            .role
            .as_deref()
            .unwrap_or_default()
            .parse()
            .map_err(HttpError::from_error)?;
        let status = self
            .status
            .as_deref()
            .unwrap_or_default()
            .parse()
            .map_err(HttpError::from_error)?;

        Ok(BrowseArticlesQuery {
            role,
            search: self.q,
            category: self.category,
            status,
            page: self.page,
            per_page: self.per_page,
        })
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/articles",
    responses(
        (status = 200, description = "Every article, in store order.", body = [ArticleDto])
    ),
    tag = "Articles"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
) -> HttpResult<SourcedJson<Vec<ArticleDto>>> {
    state
        .services
        .articles
        .list_articles()
        .await
        .into_http()
        .map(SourcedJson::ok)
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/{id}",
    params(("id" = String, Path, description = "Numeric article id")),
    responses(
        (status = 200, description = "The article.", body = ArticleDto),
        (status = 404, description = "No article with that id.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn get_article(
    Extension(state): Extension<HttpState>,
    id: PathId,
) -> HttpResult<SourcedJson<ArticleDto>> {
    let Some(id) = id.article() else {
        return Err(HttpError::not_found("article not found"));
    };

    let found = state
        .services
        .articles
        .get_article(id)
        .await
        .into_http()?;
    SourcedJson::found(found, "article")
}

#[utoipa::path(
    post,
    path = "/api/v1/articles",
    request_body = ArticleDraftDto,
    responses(
        (status = 201, description = "Created article with defaults filled in.", body = ArticleDto),
        (status = 400, description = "Missing title or unknown status.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<ArticleDraftDto>,
) -> HttpResult<SourcedJson<ArticleDto>> {
    state
        .services
        .articles
        .create_article(payload)
        .await
        .into_http()
        .map(SourcedJson::created)
}

#[utoipa::path(
    put,
    path = "/api/v1/articles/{id}",
    params(("id" = String, Path, description = "Numeric article id")),
    request_body = ArticleDto,
    responses(
        (status = 200, description = "The stored article, or the input echoed back when the id is unknown.", body = ArticleDto),
        (status = 400, description = "Non-numeric id or invalid body.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn update_article(
    Extension(state): Extension<HttpState>,
    id: PathId,
    Json(payload): Json<ArticleDto>,
) -> HttpResult<SourcedJson<ArticleDto>> {
    let id = id.require_article()?;
    state
        .services
        .articles
        .update_article(id, payload)
        .await
        .into_http()
        .map(SourcedJson::ok)
}

#[utoipa::path(
    delete,
    path = "/api/v1/articles/{id}",
    params(("id" = String, Path, description = "Numeric article id")),
    responses(
        (status = 200, description = "Acknowledged, whether or not the article existed.", body = DeleteAckDto),
    ),
    tag = "Articles"
)]
pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    id: PathId,
) -> HttpResult<SourcedJson<DeleteAckDto>> {
    state
        .services
        .articles
        .delete_article_by_key(&id.0)
        .await
        .into_http()
        .map(SourcedJson::ok)
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/browse",
    params(BrowseArticlesParams),
    responses(
        (status = 200, description = "One page of matching articles.", body = ArticlePageResponse),
        (status = 400, description = "Unknown role or status filter.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn browse_articles(
    Extension(state): Extension<HttpState>,
    Query(params): Query<BrowseArticlesParams>,
) -> HttpResult<SourcedJson<ArticlePageResponse>> {
    let query = params.into_query()?;
    let page = state
        .services
        .article_queries
        .browse_articles(query)
        .await
        .into_http()?;
    Ok(SourcedJson::ok(page.map(ArticlePageResponse::from)))
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/{id}/related",
    params(("id" = String, Path, description = "Numeric article id")),
    responses(
        (status = 200, description = "Related articles that still exist.", body = [ArticleDto]),
        (status = 404, description = "No article with that id.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn related_articles(
    Extension(state): Extension<HttpState>,
    id: PathId,
) -> HttpResult<SourcedJson<Vec<ArticleDto>>> {
    let Some(id) = id.article() else {
        return Err(HttpError::not_found("article not found"));
    };

    state
        .services
        .article_queries
        .related_articles(RelatedArticlesQuery { id })
        .await
        .into_http()
        .map(SourcedJson::ok)
}

#[utoipa::path(
    post,
    path = "/api/v1/articles/{id}/publish",
    params(("id" = String, Path, description = "Numeric article id")),
    responses(
        (status = 200, description = "Published article dated today.", body = ArticleDto),
        (status = 404, description = "No article with that id.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn publish_article(
    Extension(state): Extension<HttpState>,
    id: PathId,
) -> HttpResult<SourcedJson<ArticleDto>> {
    let Some(id) = id.article() else {
        return Err(HttpError::not_found("article not found"));
    };

    state
        .services
        .article_commands
        .publish_article(PublishArticleCommand { id })
        .await
        .into_http()
        .map(SourcedJson::ok)
}

#[utoipa::path(
    post,
    path = "/api/v1/articles/{id}/revise",
    params(("id" = String, Path, description = "Numeric article id")),
    request_body = ReviseArticleDto,
    responses(
        (status = 200, description = "Revised article dated today.", body = ArticleDto),
        (status = 400, description = "Missing title.", body = ErrorResponse),
        (status = 404, description = "No article with that id.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn revise_article(
    Extension(state): Extension<HttpState>,
    id: PathId,
    Json(form): Json<ReviseArticleDto>,
) -> HttpResult<SourcedJson<ArticleDto>> {
    let Some(id) = id.article() else {
        return Err(HttpError::not_found("article not found"));
    };

    state
        .services
        .article_commands
        .revise_article(ReviseArticleCommand { id, form })
        .await
        .into_http()
        .map(SourcedJson::ok)
}

#[utoipa::path(
    post,
    path = "/api/v1/articles/compose",
    request_body = ComposeArticleDto,
    responses(
        (status = 201, description = "Article built from the editor form.", body = ArticleDto),
        (status = 400, description = "Missing title.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn compose_article(
    Extension(state): Extension<HttpState>,
    Json(form): Json<ComposeArticleDto>,
) -> HttpResult<SourcedJson<ArticleDto>> {
    state
        .services
        .article_commands
        .compose_article(ComposeArticleCommand { form })
        .await
        .into_http()
        .map(SourcedJson::created)
}
