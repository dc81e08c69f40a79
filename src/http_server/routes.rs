//! Route handlers.
//!
//! Each route is an independent, stateless handler: parse the request,
//! invoke one query operation, serialize the result. Paths and response
//! shapes are part of the external contract and must not change.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::Value;

use crate::model::ReviewSubmission;
use crate::service::QueryService;

use super::errors::ApiError;

/// State shared across handlers
pub struct ApiState {
    pub service: QueryService,
}

/// Build the API router.
pub fn api_routes(state: Arc<ApiState>) -> Router {
    Router::new()
        .route("/", get(home_handler))
        .route("/fetchReviews", get(fetch_reviews_handler))
        .route("/fetchReviews/dealer/:id", get(fetch_reviews_by_dealer_handler))
        .route("/fetchDealers", get(fetch_dealers_handler))
        .route("/fetchDealers/:state", get(fetch_dealers_by_state_handler))
        .route("/fetchDealer/:id", get(fetch_dealer_handler))
        .route("/insert_review", post(insert_review_handler))
        .with_state(state)
}

async fn home_handler() -> &'static str {
    "Welcome to the Dealership API"
}

async fn fetch_reviews_handler(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<Value>>, ApiError> {
    Ok(Json(state.service.fetch_all_reviews()?))
}

async fn fetch_reviews_by_dealer_handler(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Value>>, ApiError> {
    Ok(Json(state.service.fetch_reviews_by_dealer(&id)?))
}

async fn fetch_dealers_handler(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<Value>>, ApiError> {
    Ok(Json(state.service.fetch_all_dealers()?))
}

async fn fetch_dealers_by_state_handler(
    State(state): State<Arc<ApiState>>,
    Path(state_code): Path<String>,
) -> Result<Json<Vec<Value>>, ApiError> {
    Ok(Json(state.service.fetch_dealers_by_state(&state_code)?))
}

async fn fetch_dealer_handler(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    Ok(Json(state.service.fetch_dealer_by_id(&id)?))
}

async fn insert_review_handler(
    State(state): State<Arc<ApiState>>,
    Json(submission): Json<ReviewSubmission>,
) -> Result<Json<Value>, ApiError> {
    Ok(Json(state.service.insert_review(submission)?))
}
