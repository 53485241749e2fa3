//! Integration tests for the search statistics page.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, build_test_app, get, paris, post_form, test_pool, GeocodeOutcome, PlacesOutcome,
};
use serde_json::json;

#[tokio::test]
async fn admin_view_counts_searches_per_city() {
    let app = build_test_app(
        test_pool().await,
        GeocodeOutcome::Found(paris()),
        PlacesOutcome::Unavailable,
    );

    for city in ["Paris", "Berlin", "Paris"] {
        post_form(app.router.clone(), "/", &format!("city={city}")).await;
    }

    let response = get(app.router.clone(), "/admin").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(
        json["query_data"],
        json!([
            {"city": "Paris", "count": 2},
            {"city": "Berlin", "count": 1},
        ])
    );
}

#[tokio::test]
async fn admin_view_ignores_rejected_submissions() {
    let app = build_test_app(
        test_pool().await,
        GeocodeOutcome::NotFound,
        PlacesOutcome::Unavailable,
    );

    post_form(app.router.clone(), "/", "city=").await;
    post_form(app.router.clone(), "/", "city=Oslo").await;

    let json = body_json(get(app.router.clone(), "/admin").await).await;
    assert_eq!(json["query_data"], json!([{"city": "Oslo", "count": 1}]));
}

#[tokio::test]
async fn admin_view_empty_log() {
    let app = build_test_app(
        test_pool().await,
        GeocodeOutcome::NotFound,
        PlacesOutcome::Unavailable,
    );

    let json = body_json(get(app.router.clone(), "/admin").await).await;
    assert_eq!(json["query_data"], json!([]));
}

#[tokio::test]
async fn admin_view_storage_failure_returns_500() {
    let pool = test_pool().await;
    sqlx::query("DROP TABLE search_queries")
        .execute(&pool)
        .await
        .unwrap();
    let app = build_test_app(pool, GeocodeOutcome::NotFound, PlacesOutcome::Unavailable);

    let response = get(app.router.clone(), "/admin").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    assert_eq!(json["code"], "STORAGE_ERROR");
    assert_eq!(json["error"], "An internal error occurred");
}
