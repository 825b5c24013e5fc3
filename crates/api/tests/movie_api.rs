//! HTTP-level integration tests for the `/movies` endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, get};

fn ids(json: &serde_json::Value, key: &str) -> Vec<i64> {
    json.as_array()
        .unwrap()
        .iter()
        .map(|item| item[key].as_i64().unwrap())
        .collect()
}

#[tokio::test]
async fn get_movie_ranks_top_characters() {
    let (_dir, app) = common::build_test_app().await;
    let response = get(app, "/movies/1").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["movie_id"], 1);
    assert_eq!(json["title"], "Alien");

    let top = &json["top_characters"];
    assert_eq!(ids(top, "character_id"), vec![1, 3, 2]);
    assert_eq!(top[0]["character"], "RIPLEY");
    assert_eq!(top[0]["num_lines"], 3);
}

#[tokio::test]
async fn equal_line_counts_are_ordered_by_name() {
    let (_dir, app) = common::build_test_app().await;
    let json = body_json(get(app, "/movies/2").await).await;
    assert_eq!(ids(&json["top_characters"], "character_id"), vec![11, 10]);
}

#[tokio::test]
async fn get_nonexistent_movie_returns_404() {
    let (_dir, app) = common::build_test_app().await;
    let response = get(app, "/movies/77").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");
}

#[tokio::test]
async fn list_movies_sort_keys() {
    let (_dir, app) = common::build_test_app().await;

    let json = body_json(get(app.clone(), "/movies").await).await;
    assert_eq!(ids(&json, "movie_id"), vec![1, 2]);
    assert_eq!(json[0]["movie_title"], "Alien");
    assert_eq!(json[0]["year"], "1979");
    assert_eq!(json[0]["imdb_votes"], 120000);

    let json = body_json(get(app, "/movies?sort=rating").await).await;
    assert_eq!(ids(&json, "movie_id"), vec![1, 2]);
}

#[tokio::test]
async fn list_movies_filters_by_title() {
    let (_dir, app) = common::build_test_app().await;
    let json = body_json(get(app, "/movies?name=hEa").await).await;
    assert_eq!(ids(&json, "movie_id"), vec![2]);
}

#[tokio::test]
async fn list_movies_limit_is_bounded() {
    let (_dir, app) = common::build_test_app().await;

    let json = body_json(get(app.clone(), "/movies?limit=1").await).await;
    assert_eq!(json.as_array().unwrap().len(), 1);

    let json = body_json(get(app, "/movies?limit=100000").await).await;
    assert_eq!(json.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn list_movie_conversations() {
    let (_dir, app) = common::build_test_app().await;
    let response = get(app, "/movies/1/conversations").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(ids(&json, "conversation_id"), vec![100, 101]);
    assert_eq!(json[1]["character_1"], "RIPLEY");
    assert_eq!(json[1]["character_2"], "ASH");
    assert_eq!(json[1]["number_of_lines"], 3);
}
