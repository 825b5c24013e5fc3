//! Shared harness for the HTTP integration tests.
//!
//! Each test gets its own temporary data directory seeded with a small
//! dataset, so appends never leak between tests.

#![allow(dead_code)]

use std::path::Path;

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

use scriptline_api::config::ServerConfig;
use scriptline_api::router::build_app_router;
use scriptline_api::state::AppState;
use scriptline_db::CsvStorage;

pub const MOVIES: &str = "\
movie_id,title,year,imdb_rating,imdb_votes,raw_script_url
1,Alien,1979,8.5,120000,http://scripts.example/alien.txt
2,Heat,1995,8.3,98000,http://scripts.example/heat.txt
";

pub const CHARACTERS: &str = "\
character_id,name,movie_id,gender,age
1,RIPLEY,1,f,30
2,DALLAS,1,m,?
3,ASH,1,m,
10,McCAULEY,2,m,
11,HANNA,2,,
";

pub const CONVERSATIONS: &str = "\
conversation_id,character1_id,character2_id,movie_id
100,1,2,1
101,1,3,1
200,10,11,2
";

pub const LINES: &str = "\
line_id,character_id,movie_id,conversation_id,line_sort,line_text
1000,1,1,100,1,\"Dallas, come in.\"
1001,2,1,100,2,Go ahead.
1002,1,1,100,3,We have a problem.
1005,3,1,101,3,A survivor.
1003,3,1,101,1,I admire its purity.
1004,1,1,101,2,You what?
2000,10,2,200,1,Don't let yourself get attached.
2001,11,2,200,2,Then what?
";

/// Build a test `ServerConfig` with safe defaults pointing at `data_dir`.
pub fn test_config(data_dir: &Path) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        data_dir: data_dir.to_path_buf(),
        default_page_limit: 50,
        max_page_limit: 250,
    }
}

/// Write the fixture tables into a fresh temporary directory.
pub fn seed_data_dir() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    for (file, body) in [
        ("movies.csv", MOVIES),
        ("characters.csv", CHARACTERS),
        ("conversations.csv", CONVERSATIONS),
        ("lines.csv", LINES),
    ] {
        std::fs::write(dir.path().join(file), body).unwrap();
    }
    dir
}

/// Load the dataset from `dir` and build the production router on top of it.
pub async fn build_app_from(dir: &Path) -> Router {
    let config = test_config(dir);
    let storage = CsvStorage::new(dir);
    let dataset = storage.load().await.unwrap();
    let state = AppState::new(dataset, storage, config.clone());
    build_app_router(state, &config)
}

/// Seed a data directory and build the app over it.
///
/// The returned `TempDir` must be kept alive for as long as the app is used.
pub async fn build_test_app() -> (TempDir, Router) {
    let dir = seed_data_dir();
    let app = build_app_from(dir.path()).await;
    (dir, app)
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
