//! Shared helpers for the HTTP integration tests.
//!
//! Requests are sent straight into the router with `tower::ServiceExt`, no
//! TCP listener involved. Predictor calls go either to a dead address (every
//! enrichment field stays absent) or to an in-process mock.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::extract::Query;
use axum::http::{Method, Request, Response};
use axum::routing::get as get_route;
use axum::{Json, Router};
use http_body_util::BodyExt;
use serde_json::json;
use sqlx::PgPool;
use tower::ServiceExt;

use persons_api::config::ServerConfig;
use persons_api::router::build_app_router;
use persons_api::services::PersonService;
use persons_api::state::AppState;
use persons_enrichment::{EnrichmentClient, EnrichmentConfig};

/// Build a test `ServerConfig` whose predictors live under `predictor_base`.
pub fn test_config(predictor_base: &str) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        database_url: String::new(),
        enrichment: EnrichmentConfig {
            agify_url: format!("{predictor_base}/age"),
            genderize_url: format!("{predictor_base}/gender"),
            nationalize_url: format!("{predictor_base}/nationality"),
            timeout: Duration::from_secs(2),
        },
    }
}

/// Full application router whose predictors are unreachable.
pub fn build_test_app(pool: PgPool) -> Router {
    // Port 9 (discard) on loopback: nothing listens there in CI.
    build_test_app_with_predictors(pool, "http://127.0.0.1:9")
}

/// Full application router wired to the predictors at `predictor_base`.
///
/// Uses the same [`build_app_router`] as `main.rs`, so the middleware stack
/// under test is the production one.
pub fn build_test_app_with_predictors(pool: PgPool, predictor_base: &str) -> Router {
    let config = test_config(predictor_base);
    let enrichment = EnrichmentClient::new(config.enrichment.clone()).unwrap();

    let state = AppState {
        pool: pool.clone(),
        config: Arc::new(config.clone()),
        persons: Arc::new(PersonService::new(pool, enrichment)),
    };

    build_app_router(state, &config)
}

/// Start agify/genderize/nationalize lookalikes on a random port.
///
/// Every name is 33, female and most likely `UA`, except `"Nobody"` which has
/// no predictions at all.
pub async fn spawn_mock_predictors() -> String {
    async fn age(Query(q): Query<HashMap<String, String>>) -> Json<serde_json::Value> {
        match q.get("name").map(String::as_str) {
            Some("Nobody") => Json(json!({"name": "Nobody", "age": null})),
            name => Json(json!({"name": name, "age": 33})),
        }
    }

    async fn gender(Query(q): Query<HashMap<String, String>>) -> Json<serde_json::Value> {
        match q.get("name").map(String::as_str) {
            Some("Nobody") => Json(json!({"name": "Nobody", "gender": null})),
            name => Json(json!({"name": name, "gender": "female", "probability": 0.97})),
        }
    }

    async fn nationality(Query(q): Query<HashMap<String, String>>) -> Json<serde_json::Value> {
        match q.get("name").map(String::as_str) {
            Some("Nobody") => Json(json!({"name": "Nobody", "country": []})),
            name => Json(json!({
                "name": name,
                "country": [
                    {"country_id": "RU", "probability": 0.31},
                    {"country_id": "UA", "probability": 0.42}
                ]
            })),
        }
    }

    let app = Router::new()
        .route("/age", get_route(age))
        .route("/gender", get_route(gender))
        .route("/nationality", get_route(nationality));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response<axum::body::Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn delete(app: Router, uri: &str) -> Response<axum::body::Body> {
    send(app, Method::DELETE, uri, None).await
}

pub async fn post_json(
    app: Router,
    uri: &str,
    body: serde_json::Value,
) -> Response<axum::body::Body> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put_json(
    app: Router,
    uri: &str,
    body: serde_json::Value,
) -> Response<axum::body::Body> {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn patch_json(
    app: Router,
    uri: &str,
    body: serde_json::Value,
) -> Response<axum::body::Body> {
    send(app, Method::PATCH, uri, Some(body)).await
}

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> Response<axum::body::Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<axum::body::Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
