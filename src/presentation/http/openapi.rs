// src/presentation/http/openapi.rs
use axum::{Router, response::Redirect, routing::get};
use std::{collections::HashSet, env, fs::File, io::BufWriter, path::Path};
use utoipa::openapi::server::Server;
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";
const DEFAULT_SNAPSHOT_PATH: &str = "openapi/openapi.json";

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::articles::list_articles,
        crate::presentation::http::controllers::articles::get_article,
        crate::presentation::http::controllers::articles::create_article,
        crate::presentation::http::controllers::articles::update_article,
        crate::presentation::http::controllers::articles::delete_article,
        crate::presentation::http::controllers::articles::browse_articles,
        crate::presentation::http::controllers::articles::related_articles,
        crate::presentation::http::controllers::articles::publish_article,
        crate::presentation::http::controllers::articles::revise_article,
        crate::presentation::http::controllers::articles::compose_article,
        crate::presentation::http::controllers::categories::list_categories,
        crate::presentation::http::controllers::categories::get_category,
        crate::presentation::http::controllers::categories::create_category,
        crate::presentation::http::controllers::categories::update_category,
        crate::presentation::http::controllers::categories::delete_category,
        crate::presentation::http::controllers::categories::search_categories,
        super::routes::health
    ),
    components(
        schemas(
            crate::presentation::http::responses::StatusResponse,
            crate::presentation::http::responses::ArticlePageResponse,
            crate::presentation::http::responses::CategoryPageResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::application::dto::ArticleDto,
            crate::application::dto::ArticleDraftDto,
            crate::application::dto::ComposeArticleDto,
            crate::application::dto::ReviseArticleDto,
            crate::application::dto::DeleteAckDto,
            crate::application::dto::AckId,
            crate::application::dto::CategoryDto,
            crate::application::dto::CategoryDraftDto,
            crate::application::dto::DataSource
        )
    ),
    tags(
        (name = "Articles", description = "Article CRUD, browsing and authoring"),
        (name = "Categories", description = "Category CRUD and search"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    info(
        title = "Folio API",
        description = "Article and category data access with remote-first fallback. \
                       Every data response carries an `x-data-source` header \
                       (`remote` or `fallback`).",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let servers = openapi.servers.get_or_insert_with(Vec::new);
        servers.clear();

        let mut urls: Vec<String> = env::var("PUBLIC_API_URLS")
            .ok()
            .map(|value| {
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|segment| !segment.is_empty())
                    .map(|segment| segment.trim_end_matches('/').to_string())
                    .collect()
            })
            .unwrap_or_default();

        if urls.is_empty() {
            urls.push("http://localhost:8080".to_string());
        }

        let mut seen = HashSet::new();
        for url in urls {
            if seen.insert(url.clone()) {
                servers.push(Server::new(url));
            }
        }
    }
}

pub fn docs_router() -> Router {
    let swagger = SwaggerUi::new("/docs").url(OPENAPI_JSON_PATH, ApiDoc::openapi());
    Router::new()
        .merge(swagger)
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}

/// Writes the document to `OPENAPI_SNAPSHOT_PATH` (default
/// `openapi/openapi.json`) and returns the path used.
pub fn write_openapi_snapshot() -> std::io::Result<String> {
    let spec = ApiDoc::openapi();
    let output_path =
        env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| DEFAULT_SNAPSHOT_PATH.to_string());
    let path = Path::new(&output_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &spec)?;
    Ok(output_path)
}
