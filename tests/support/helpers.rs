// tests/support/helpers.rs
use super::mocks::{CountingProbe, CountingRemote, FixedClock};
use axum::body::{self, Body};
use axum::http::{HeaderMap, Method, Request, StatusCode};
use folio_core::application::ports::{
    ClockPort, ReachabilityPort, RemoteArticlesPort, RemoteCategoriesPort,
};
use folio_core::application::services::ApplicationServices;
use folio_core::domain::{article::ArticleRepository, category::CategoryRepository};
use folio_core::infrastructure::{
    http::TimeoutHttpClient,
    memory::{InMemoryArticleRepository, InMemoryCategoryRepository, MemoryStore},
    remote::RemoteApiGateway,
};
use folio_core::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;
use std::{sync::Arc, time::Duration};
use tower::util::ServiceExt as _;

/// Services over an isolated store, with handles on the probe and the
/// remote stub so tests can count what was attempted.
pub struct Harness {
    pub services: Arc<ApplicationServices>,
    pub probe: Arc<CountingProbe>,
    pub remote: Arc<CountingRemote>,
}

fn repositories(store: MemoryStore) -> (Arc<dyn ArticleRepository>, Arc<dyn CategoryRepository>) {
    let store = Arc::new(store);
    (
        Arc::new(InMemoryArticleRepository::new(Arc::clone(&store))),
        Arc::new(InMemoryCategoryRepository::new(store)),
    )
}

fn harness(store: MemoryStore, probe: CountingProbe) -> Harness {
    let (article_repo, category_repo) = repositories(store);
    let probe = Arc::new(probe);
    let remote = Arc::new(CountingRemote::default());
    let clock: Arc<ClockPort> = Arc::new(FixedClock);

    let remote_articles: Arc<RemoteArticlesPort> = remote.clone();
    let remote_categories: Arc<RemoteCategoriesPort> = remote.clone();
    let reachability: Arc<ReachabilityPort> = probe.clone();

    let services = Arc::new(ApplicationServices::new(
        article_repo,
        category_repo,
        remote_articles,
        remote_categories,
        reachability,
        clock,
    ));

    Harness {
        services,
        probe,
        remote,
    }
}

/// Default deployment: probe says unreachable, store seeded from fixtures.
pub fn offline_harness() -> Harness {
    harness(MemoryStore::seeded(), CountingProbe::unreachable())
}

pub fn offline_harness_with(store: MemoryStore) -> Harness {
    harness(store, CountingProbe::unreachable())
}

/// Probe says reachable but every remote call fails.
pub fn failing_remote_harness() -> Harness {
    harness(MemoryStore::seeded(), CountingProbe::reachable())
}

/// Services that talk to `base_url` (an httpmock server) first and fall
/// back to a freshly seeded store.
pub fn remote_services(base_url: &str, timeout: Duration) -> Arc<ApplicationServices> {
    let (article_repo, category_repo) = repositories(MemoryStore::seeded());
    let gateway = Arc::new(RemoteApiGateway::new(
        base_url,
        TimeoutHttpClient::new(timeout),
    ));
    let remote_articles: Arc<RemoteArticlesPort> = gateway.clone();
    let remote_categories: Arc<RemoteCategoriesPort> = gateway;
    let probe: Arc<ReachabilityPort> = Arc::new(CountingProbe::reachable());
    let clock: Arc<ClockPort> = Arc::new(FixedClock);

    Arc::new(ApplicationServices::new(
        article_repo,
        category_repo,
        remote_articles,
        remote_categories,
        probe,
        clock,
    ))
}

pub fn make_router(services: Arc<ApplicationServices>) -> axum::Router {
    build_router(HttpState { services }, &["http://localhost:3000".to_string()])
}

pub fn make_test_router() -> axum::Router {
    make_router(offline_harness().services)
}

pub fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn json_request(method: Method, uri: &str, payload: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap()
}

/// Sends one request and returns status, headers and the JSON body
/// (`Value::Null` when the body is empty).
pub async fn send(app: &axum::Router, request: Request<Body>) -> (StatusCode, HeaderMap, Value) {
    let resp = app.clone().oneshot(request).await.unwrap();
    let (parts, body_stream) = resp.into_parts();
    let bytes = body::to_bytes(body_stream, 1024 * 1024).await.expect("read body");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("expected a JSON body")
    };
    (parts.status, parts.headers, json)
}

pub fn data_source(headers: &HeaderMap) -> &str {
    headers
        .get("x-data-source")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_error: &str,
) {
    assert_eq!(resp.status(), expected_status);
    let (parts, body_stream) = resp.into_parts();
    let body_bytes = body::to_bytes(body_stream, 1024 * 1024).await.expect("read body");
    let ct = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(ct.starts_with("application/json"), "unexpected content-type: {}", ct);
    let json: Value =
        serde_json::from_slice(&body_bytes).expect("expected valid json body for error");
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {}", err_field);
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
}
