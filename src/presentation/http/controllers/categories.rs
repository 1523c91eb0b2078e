use crate::application::{
    dto::{CategoryDraftDto, CategoryDto, DeleteAckDto},
    queries::categories::SearchCategoriesQuery,
};
use crate::presentation::http::{
    error::{ErrorResponse, HttpError, HttpResult, IntoHttpResult},
    extractors::PathId,
    responses::{CategoryPageResponse, SourcedJson},
    state::HttpState,
};
use axum::{Extension, Json, extract::Query};
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchCategoriesParams {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub per_page: Option<u32>,
}

#[utoipa::path(
    get,
    path = "/api/v1/categories",
    responses((status = 200, description = "Every category.", body = [CategoryDto])),
    tag = "Categories"
)]
pub async fn list_categories(
    Extension(state): Extension<HttpState>,
) -> HttpResult<SourcedJson<Vec<CategoryDto>>> {
    state
        .services
        .categories
        .list_categories()
        .await
        .into_http()
        .map(SourcedJson::ok)
}

#[utoipa::path(
    get,
    path = "/api/v1/categories/{id}",
    params(("id" = String, Path, description = "Numeric category id")),
    responses(
        (status = 200, description = "The category.", body = CategoryDto),
        (status = 404, description = "No category with that id.", body = ErrorResponse)
    ),
    tag = "Categories"
)]
pub async fn get_category(
    Extension(state): Extension<HttpState>,
    id: PathId,
) -> HttpResult<SourcedJson<CategoryDto>> {
    let Some(id) = id.category() else {
        return Err(HttpError::not_found("category not found"));
    };

    let found = state
        .services
        .categories
        .get_category(id)
        .await
        .into_http()?;
    SourcedJson::found(found, "category")
}

/// `articleCount` in the body is ignored; new categories start at 0.
#[utoipa::path(
    post,
    path = "/api/v1/categories",
    request_body = CategoryDraftDto,
    responses((status = 201, description = "Created category.", body = CategoryDto)),
    tag = "Categories"
)]
pub async fn create_category(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<CategoryDraftDto>,
) -> HttpResult<SourcedJson<CategoryDto>> {
    state
        .services
        .categories
        .create_category(payload)
        .await
        .into_http()
        .map(SourcedJson::created)
}

#[utoipa::path(
    put,
    path = "/api/v1/categories/{id}",
    params(("id" = String, Path, description = "Numeric category id")),
    request_body = CategoryDto,
    responses(
        (status = 200, description = "The stored category, or the input echoed back when the id is unknown.", body = CategoryDto),
    ),
    tag = "Categories"
)]
pub async fn update_category(
    Extension(state): Extension<HttpState>,
    id: PathId,
    Json(payload): Json<CategoryDto>,
) -> HttpResult<SourcedJson<CategoryDto>> {
    let id = id.require_category()?;
    state
        .services
        .categories
        .update_category(id, payload)
        .await
        .into_http()
        .map(SourcedJson::ok)
}

#[utoipa::path(
    delete,
    path = "/api/v1/categories/{id}",
    params(("id" = String, Path, description = "Numeric category id")),
    responses(
        (status = 200, description = "Acknowledged; `articleCount` is not consulted.", body = DeleteAckDto),
    ),
    tag = "Categories"
)]
pub async fn delete_category(
    Extension(state): Extension<HttpState>,
    id: PathId,
) -> HttpResult<SourcedJson<DeleteAckDto>> {
    state
        .services
        .categories
        .delete_category_by_key(&id.0)
        .await
        .into_http()
        .map(SourcedJson::ok)
}

#[utoipa::path(
    get,
    path = "/api/v1/categories/search",
    params(SearchCategoriesParams),
    responses((status = 200, description = "One page of categories whose name matches.", body = CategoryPageResponse)),
    tag = "Categories"
)]
pub async fn search_categories(
    Extension(state): Extension<HttpState>,
    Query(params): Query<SearchCategoriesParams>,
) -> HttpResult<SourcedJson<CategoryPageResponse>> {
    let query = SearchCategoriesQuery {
        search: params.q,
        page: params.page,
        per_page: params.per_page,
    };

    let page = state
        .services
        .category_queries
        .search_categories(query)
        .await
        .into_http()?;
    Ok(SourcedJson::ok(page.map(CategoryPageResponse::from)))
}
