// tests/e2e_http.rs
use axum::http::{Method, StatusCode};
use serde_json::json;

mod support;

use support::{data_source, empty_request, json_request, make_test_router, send};

#[tokio::test]
async fn health_returns_ok() {
    let app = make_test_router();

    let (status, headers, body) = send(&app, empty_request(Method::GET, "/health")).await;

    assert_eq!(status, StatusCode::OK);
    let ct = headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(ct.starts_with("application/json"), "unexpected content-type: {}", ct);
    assert_eq!(body, json!({ "status": "ok" }));

    let direct = folio_core::presentation::http::routes::health().await;
    assert_eq!(direct.0.status, "ok");
}

#[tokio::test]
async fn list_articles_reports_fallback_provenance() {
    let app = make_test_router();

    let (status, headers, body) = send(&app, empty_request(Method::GET, "/api/v1/articles")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(data_source(&headers), "fallback");
    let articles = body.as_array().expect("array body");
    assert_eq!(articles.len(), 12);
    assert_eq!(articles[0]["readTime"], "8 min read");
    assert!(articles[0]["relatedArticles"].is_array());
}

#[tokio::test]
async fn get_article_accepts_numeric_looking_ids() {
    let app = make_test_router();

    let (status, headers, body) =
        send(&app, empty_request(Method::GET, "/api/v1/articles/4.0")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(data_source(&headers), "fallback");
    assert_eq!(body["id"], 4);
    assert_eq!(body["title"], "Quantum Computing Breakthroughs");
}

#[tokio::test]
async fn create_then_get_over_http() {
    let app = make_test_router();

    let (status, headers, created) = send(
        &app,
        json_request(Method::POST, "/api/v1/articles", json!({ "title": "Over HTTP" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(data_source(&headers), "fallback");
    assert_eq!(created["id"], 13);
    assert_eq!(created["status"], "Published");
    assert_eq!(created["category"], "Uncategorized");

    let (status, _, fetched) =
        send(&app, empty_request(Method::GET, "/api/v1/articles/13")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn update_then_delete_over_http() {
    let app = make_test_router();
    let (_, _, mut article) = send(&app, empty_request(Method::GET, "/api/v1/articles/2")).await;
    article["title"] = json!("Greener Business");

    let (status, _, updated) =
        send(&app, json_request(Method::PUT, "/api/v1/articles/2", article.clone())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated, article);

    let (status, _, ack) = send(&app, empty_request(Method::DELETE, "/api/v1/articles/2")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ack, json!({ "success": true, "id": 2 }));

    let (status, _, ack) = send(&app, empty_request(Method::DELETE, "/api/v1/articles/2")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ack["success"], true);
}

#[tokio::test]
async fn browse_returns_a_camel_case_page() {
    let app = make_test_router();

    let (status, headers, page) = send(
        &app,
        empty_request(
            Method::GET,
            "/api/v1/articles/browse?role=admin&status=Draft&per_page=2&page=2",
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(data_source(&headers), "fallback");
    assert_eq!(page["totalItems"], 4);
    assert_eq!(page["totalPages"], 2);
    assert_eq!(page["perPage"], 2);
    let ids: Vec<i64> = page["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![9, 11]);
}

#[tokio::test]
async fn related_publish_and_compose_routes() {
    let app = make_test_router();

    let (status, _, related) =
        send(&app, empty_request(Method::GET, "/api/v1/articles/1/related")).await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<i64> = related
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![4, 6]);

    let (status, _, published) =
        send(&app, empty_request(Method::POST, "/api/v1/articles/9/publish")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(published["status"], "Published");
    assert_eq!(published["date"], "2024-06-01");

    let (status, _, composed) = send(
        &app,
        json_request(
            Method::POST,
            "/api/v1/articles/compose",
            json!({ "title": "Composed", "body": "Hello", "draft": true }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(composed["author"], "Admin User");
    assert_eq!(composed["content"], "<p>Hello</p>");
    assert_eq!(composed["status"], "Draft");
}

#[tokio::test]
async fn revise_route_saves_a_draft_over_http() {
    let app = make_test_router();

    let (status, headers, revised) = send(
        &app,
        json_request(
            Method::POST,
            "/api/v1/articles/2/revise",
            json!({ "title": "Revised over HTTP", "body": "Line one\nLine two", "draft": true }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(data_source(&headers), "fallback");
    assert_eq!(revised["id"], 2);
    assert_eq!(revised["status"], "Draft");
    assert_eq!(revised["content"], "<p>Line one<br />Line two</p>");
    assert_eq!(revised["date"], "2024-06-01");

    let (status, _, _) = send(
        &app,
        json_request(
            Method::POST,
            "/api/v1/articles/abc/revise",
            json!({ "title": "Nowhere" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn category_routes_cover_crud_and_search() {
    let app = make_test_router();

    let (status, headers, created) = send(
        &app,
        json_request(
            Method::POST,
            "/api/v1/categories",
            json!({ "name": "Travel", "articleCount": 9 }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(data_source(&headers), "fallback");
    assert_eq!(created, json!({ "id": 6, "name": "Travel", "articleCount": 0 }));

    let (status, _, updated) = send(
        &app,
        json_request(
            Method::PUT,
            "/api/v1/categories/6",
            json!({ "name": "Travel & Leisure", "articleCount": 1 }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["name"], "Travel & Leisure");
    assert_eq!(updated["id"], 6);

    let (status, _, page) = send(
        &app,
        empty_request(Method::GET, "/api/v1/categories/search?q=travel"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["totalItems"], 1);

    let (status, _, ack) =
        send(&app, empty_request(Method::DELETE, "/api/v1/categories/6")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ack, json!({ "success": true, "id": 6 }));

    let (_, _, listing) = send(&app, empty_request(Method::GET, "/api/v1/categories")).await;
    assert_eq!(listing.as_array().unwrap().len(), 5);
}
