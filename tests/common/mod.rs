#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header::CONTENT_TYPE, Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use tempfile::TempDir;
use tower::ServiceExt;

use sports_management::models::{PlayerInput, TeamInput};
use sports_management::{app, apply_schema, connect, AppState, Settings};

/// A fresh file-backed database with the schema applied. Keep the `TempDir` alive for the
/// duration of the test; dropping it removes the file.
pub struct TestDb {
    pub dir: TempDir,
    pub pool: SqlitePool,
    pub settings: Settings,
}

pub async fn test_db() -> TestDb {
    test_db_with(true).await
}

pub async fn test_db_with(foreign_keys: bool) -> TestDb {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("data").join("sports.db");
    let settings = Settings {
        database_url: format!("sqlite://{}", path.display()),
        foreign_keys,
        ..Settings::default()
    };
    let pool = connect(&settings).await.expect("connect");
    apply_schema(&pool).await.expect("schema");
    TestDb {
        dir,
        pool,
        settings,
    }
}

/// The full application router over the given database, as the server builds it.
pub fn build_test_app(db: &TestDb) -> Router {
    app(AppState::new(db.pool.clone(), db.settings.clone()))
}

pub fn team(name: &str) -> TeamInput {
    TeamInput::named(name)
}

pub fn player(first: &str, last: &str, team_id: Option<i64>, ranking: i64) -> PlayerInput {
    PlayerInput {
        team_id,
        ranking,
        ..PlayerInput::named(first, last)
    }
}

// ---------------------------------------------------------------------------
// HTTP helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, method: Method, uri: &str, body: Option<serde_json::Value>) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    app.oneshot(builder.body(body).expect("request"))
        .await
        .expect("response")
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, json: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(json)).await
}

pub async fn put_json(app: Router, uri: &str, json: serde_json::Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(json)).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

pub async fn post_raw(app: Router, uri: &str, raw: &'static str) -> Response<Body> {
    let req = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(raw))
        .expect("request");
    app.oneshot(req).await.expect("response")
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("json body")
}

/// Assert the status and return the decoded body.
pub async fn expect_json(response: Response<Body>, status: StatusCode) -> serde_json::Value {
    assert_eq!(response.status(), status);
    body_json(response).await
}
