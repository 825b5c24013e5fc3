//! HTTP-level integration tests for the `/characters` endpoints.

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
async fn get_character_includes_movie_and_top_partners() {
    let (_dir, app) = common::build_test_app().await;
    let response = get(app, "/characters/1").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["character"], "RIPLEY");
    assert_eq!(json["movie"], "Alien");
    assert_eq!(json["gender"], "f");
    assert_eq!(json["age"], 30);
    assert_eq!(json["number_of_lines"], 3);

    // ASH and DALLAS both share 3 lines with RIPLEY; ties go by name.
    let top = &json["top_conversations"];
    assert_eq!(ids(top, "character_id"), vec![3, 2]);
    assert_eq!(top[0]["number_of_lines_together"], 3);
    assert_eq!(top[1]["gender"], "m");
}

#[tokio::test]
async fn unparsable_age_is_null() {
    let (_dir, app) = common::build_test_app().await;
    let json = body_json(get(app, "/characters/2").await).await;
    assert!(json["age"].is_null());
}

#[tokio::test]
async fn get_nonexistent_character_returns_404() {
    let (_dir, app) = common::build_test_app().await;
    let response = get(app, "/characters/999").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Character with id 999 not found");
}

#[tokio::test]
async fn list_characters_defaults_to_name_order() {
    let (_dir, app) = common::build_test_app().await;
    let json = body_json(get(app, "/characters").await).await;
    assert_eq!(ids(&json, "character_id"), vec![3, 2, 11, 10, 1]);
    assert_eq!(json[0]["movie"], "Alien");
}

#[tokio::test]
async fn list_characters_by_line_count() {
    let (_dir, app) = common::build_test_app().await;
    let json = body_json(get(app, "/characters?sort=number_of_lines").await).await;
    assert_eq!(ids(&json, "character_id"), vec![1, 3, 2, 11, 10]);
}

#[tokio::test]
async fn list_characters_filters_by_name_substring() {
    let (_dir, app) = common::build_test_app().await;
    let json = body_json(get(app, "/characters?name=LEY").await).await;
    assert_eq!(ids(&json, "character_id"), vec![10, 1]);
}

#[tokio::test]
async fn list_characters_paginates() {
    let (_dir, app) = common::build_test_app().await;

    let json = body_json(get(app.clone(), "/characters?limit=2&offset=1").await).await;
    assert_eq!(ids(&json, "character_id"), vec![2, 11]);

    let json = body_json(get(app, "/characters?offset=5").await).await;
    assert!(json.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn invalid_sort_key_is_rejected() {
    let (_dir, app) = common::build_test_app().await;
    let response = get(app, "/characters?sort=age").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
