//! HTTP surface tests.
//!
//! Each test seeds a store from files in a temp directory and drives the
//! router in-process, without binding a listener.

use std::fs;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

use dealerdb::config::AppConfig;
use dealerdb::http_server::HttpServer;

/// Write seed files, build a server over them and run the seeder.
fn seeded_router(reviews: Value, dealerships: Value) -> (TempDir, Router) {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("reviews.json"),
        serde_json::to_string(&json!({ "reviews": reviews })).unwrap(),
    )
    .unwrap();
    fs::write(
        dir.path().join("dealerships.json"),
        serde_json::to_string(&json!({ "dealerships": dealerships })).unwrap(),
    )
    .unwrap();

    let config = AppConfig {
        seed_dir: dir.path().to_path_buf(),
        ..Default::default()
    };
    let server = HttpServer::new(config).unwrap();
    server.seed();
    (dir, server.router())
}

fn sample_dealers() -> Value {
    json!([
        { "id": 5, "state": "CA", "city": "Sacramento", "full_name": "Zathin Car Dealership" },
        { "id": 6, "state": "KS", "city": "Topeka", "full_name": "Tampflex Car Dealership" }
    ])
}

fn sample_reviews() -> Value {
    json!([
        { "id": 1, "name": "Berte", "dealership": 5, "review": "Great service", "purchase": true },
        { "id": 2, "name": "Gwen", "dealership": 6, "review": "Long wait", "purchase": false },
        { "id": 3, "name": "Tomas", "dealership": 5, "review": "Not pushy", "purchase": false }
    ])
}

async fn get(router: &Router, uri: &str) -> (StatusCode, Value) {
    let response = router
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

async fn post_json(router: &Router, uri: &str, body: &Value) -> (StatusCode, Value) {
    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(body).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

#[tokio::test]
async fn home_returns_greeting() {
    let (_dir, router) = seeded_router(sample_reviews(), sample_dealers());

    let response = router
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&bytes[..], b"Welcome to the Dealership API");
}

#[tokio::test]
async fn fetch_reviews_returns_every_seeded_review() {
    let (_dir, router) = seeded_router(sample_reviews(), sample_dealers());

    let (status, body) = get(&router, "/fetchReviews").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn fetch_reviews_by_dealer_returns_exactly_the_matching_set() {
    let (_dir, router) = seeded_router(sample_reviews(), sample_dealers());

    let (status, body) = get(&router, "/fetchReviews/dealer/5").await;
    assert_eq!(status, StatusCode::OK);
    let docs = body.as_array().unwrap();
    assert_eq!(docs.len(), 2);
    assert!(docs.iter().all(|d| d["dealership"] == 5));

    let (status, body) = get(&router, "/fetchReviews/dealer/42").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn fetch_dealers_returns_every_seeded_dealer() {
    let (_dir, router) = seeded_router(sample_reviews(), sample_dealers());

    let (status, body) = get(&router, "/fetchDealers").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn fetch_dealers_by_state_matches_exactly() {
    let (_dir, router) = seeded_router(
        json!([]),
        json!([{ "id": 5, "state": "CA", "city": "Sacramento" }]),
    );

    let (status, body) = get(&router, "/fetchDealers/CA").await;
    assert_eq!(status, StatusCode::OK);
    let docs = body.as_array().unwrap();
    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0]["id"], 5);
    assert_eq!(docs[0]["city"], "Sacramento");

    let (status, body) = get(&router, "/fetchDealers/TX").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn fetch_dealer_by_id_returns_the_document() {
    let (_dir, router) = seeded_router(sample_reviews(), sample_dealers());

    let (status, body) = get(&router, "/fetchDealer/5").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 5);
    assert_eq!(body["full_name"], "Zathin Car Dealership");
}

#[tokio::test]
async fn fetch_dealer_by_absent_id_is_404() {
    let (_dir, router) = seeded_router(sample_reviews(), sample_dealers());

    let (status, body) = get(&router, "/fetchDealer/99").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Dealer not found");
}

#[tokio::test]
async fn fetch_dealer_by_unparsable_id_is_404_not_an_error() {
    let (_dir, router) = seeded_router(sample_reviews(), sample_dealers());

    let (status, body) = get(&router, "/fetchDealer/not-a-number").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Dealer not found");
}

#[tokio::test]
async fn insert_review_on_empty_collection_assigns_id_one() {
    let (_dir, router) = seeded_router(json!([]), sample_dealers());

    let submission = json!({
        "name": "Alice",
        "dealership": 5,
        "review": "Great",
        "purchase": true,
        "purchase_date": "2024-01-01",
        "car_make": "Honda",
        "car_model": "Civic",
        "car_year": 2022
    });
    let (status, body) = post_json(&router, "/insert_review", &submission).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 1);
    assert_eq!(body["name"], "Alice");
    assert_eq!(body["dealership"], 5);
    assert_eq!(body["review"], "Great");
    assert_eq!(body["purchase"], true);
    assert_eq!(body["purchase_date"], "2024-01-01");
    assert_eq!(body["car_make"], "Honda");
    assert_eq!(body["car_model"], "Civic");
    assert_eq!(body["car_year"], 2022);
}

#[tokio::test]
async fn insert_review_assigns_max_plus_one_and_is_visible() {
    let (_dir, router) = seeded_router(sample_reviews(), sample_dealers());

    let (status, body) =
        post_json(&router, "/insert_review", &json!({ "name": "Dave", "dealership": 6 })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 4);

    let (_, body) = get(&router, "/fetchReviews").await;
    assert_eq!(body.as_array().unwrap().len(), 4);

    let (_, body) = get(&router, "/fetchReviews/dealer/6").await;
    let docs = body.as_array().unwrap();
    assert_eq!(docs.len(), 2);
}

#[tokio::test]
async fn insert_review_with_missing_fields_stores_them_as_absent() {
    let (_dir, router) = seeded_router(json!([]), sample_dealers());

    let (status, body) = post_json(&router, "/insert_review", &json!({ "name": "Bob" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 1);
    assert_eq!(body["name"], "Bob");
    assert!(body.get("review").is_none());
    assert!(body.get("purchase").is_none());
}

#[tokio::test]
async fn insert_review_ignores_client_supplied_id() {
    let (_dir, router) = seeded_router(sample_reviews(), sample_dealers());

    let (status, body) =
        post_json(&router, "/insert_review", &json!({ "id": 500, "name": "Eve" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 4);
}
