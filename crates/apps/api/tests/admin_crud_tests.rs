mod common;

use axum::http::StatusCode;
use common::{body_json, spawn_app};
use serde_json::{Value, json};

#[tokio::test]
async fn created_albums_get_positive_ids_and_echo_fields() {
    let app = spawn_app().await;

    let response = app
        .admin_json(
            "POST",
            "/api/admin/albums",
            json!({"title": "Summer 2023", "description": "Lake trip"}),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let album: Value = body_json(response).await;
    assert!(album["id"].as_i64().unwrap() > 0);
    assert_eq!(album["title"], "Summer 2023");
    assert_eq!(album["description"], "Lake trip");
}

#[tokio::test]
async fn listing_respects_limit_and_returns_newest_first() {
    let app = spawn_app().await;
    for i in 1..=4 {
        let response = app
            .admin_json(
                "POST",
                "/api/admin/albums",
                json!({"title": format!("album-{i}")}),
            )
            .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = app.get("/api/albums?offset=0&limit=2").await;
    assert_eq!(response.status(), StatusCode::OK);
    let albums: Vec<Value> = body_json(response).await;
    assert_eq!(albums.len(), 2);
    assert_eq!(albums[0]["title"], "album-4");
    assert_eq!(albums[1]["title"], "album-3");
}

#[tokio::test]
async fn listing_uses_default_page_size() {
    let app = spawn_app().await;
    for i in 1..=15 {
        app.admin_json(
            "POST",
            "/api/admin/albums",
            json!({"title": format!("album-{i}")}),
        )
        .await;
    }

    let response = app.get("/api/albums").await;
    let albums: Vec<Value> = body_json(response).await;
    assert_eq!(albums.len(), 12);
}

#[tokio::test]
async fn delete_and_get_agree_on_missing_albums() {
    let app = spawn_app().await;

    let get = app.get("/api/albums/999").await;
    let delete = app.admin_delete("/api/admin/albums/999").await;
    assert_eq!(get.status(), StatusCode::NOT_FOUND);
    assert_eq!(delete.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn updates_overwrite_the_whole_record() {
    let app = spawn_app().await;
    let created: Value = body_json(
        app.admin_json(
            "POST",
            "/api/admin/albums",
            json!({"title": "Before", "description": "old"}),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let response = app
        .admin_json(
            "PUT",
            &format!("/api/admin/albums/{id}"),
            json!({"title": "After"}),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated: Value = body_json(response).await;
    assert_eq!(updated["title"], "After");
    // Omitted fields fall back to their defaults, not the stored values.
    assert_eq!(updated["description"], "");
}

#[tokio::test]
async fn tags_list_in_id_order_and_reject_duplicates() {
    let app = spawn_app().await;
    for name in ["zoo", "beach", "mountains"] {
        let response = app
            .admin_json("POST", "/api/admin/tags", json!({"name": name}))
            .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let duplicate = app
        .admin_json("POST", "/api/admin/tags", json!({"name": "beach"}))
        .await;
    assert_eq!(duplicate.status(), StatusCode::BAD_REQUEST);

    let tags: Vec<Value> = body_json(app.get("/api/tags").await).await;
    let names: Vec<&str> = tags.iter().filter_map(|t| t["name"].as_str()).collect();
    assert_eq!(names, ["zoo", "beach", "mountains"]);
}

#[tokio::test]
async fn error_bodies_carry_an_error_field() {
    let app = spawn_app().await;
    let response = app.get("/api/tags/42").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = body_json(response).await;
    assert!(body["error"].as_str().is_some());
}
