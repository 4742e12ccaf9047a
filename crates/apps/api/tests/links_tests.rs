mod common;

use axum::http::StatusCode;
use common::{body_json, spawn_app};
use serde_json::{Value, json};

async fn create_album(app: &common::TestApp, title: &str) -> i64 {
    let album: Value = body_json(
        app.admin_json("POST", "/api/admin/albums", json!({"title": title}))
            .await,
    )
    .await;
    album["id"].as_i64().unwrap()
}

async fn create_tag(app: &common::TestApp, name: &str) -> i64 {
    let tag: Value = body_json(
        app.admin_json("POST", "/api/admin/tags", json!({"name": name}))
            .await,
    )
    .await;
    tag["id"].as_i64().unwrap()
}

#[tokio::test]
async fn tagging_an_album_shows_up_in_both_directions() {
    let app = spawn_app().await;
    let album_id = create_album(&app, "Winter").await;
    let tag_id = create_tag(&app, "snow").await;

    let response = app
        .admin_json(
            "POST",
            "/api/admin/album-tags",
            json!({"album_id": album_id, "tag_id": tag_id}),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let link: Value = body_json(response).await;
    assert!(link["id"].as_i64().unwrap() > 0);

    let tags: Vec<Value> = body_json(app.get(&format!("/api/albums/{album_id}/tags")).await).await;
    assert_eq!(tags.len(), 1);
    assert_eq!(tags[0]["name"], "snow");

    let albums: Vec<Value> = body_json(app.get(&format!("/api/tags/{tag_id}/albums")).await).await;
    assert_eq!(albums.len(), 1);
    assert_eq!(albums[0]["title"], "Winter");
}

#[tokio::test]
async fn removing_an_association_twice_is_idempotent() {
    let app = spawn_app().await;
    let album_id = create_album(&app, "Spring").await;
    let tag_id = create_tag(&app, "flowers").await;

    app.admin_json(
        "POST",
        "/api/admin/album-tags",
        json!({"album_id": album_id, "tag_id": tag_id}),
    )
    .await;

    let uri = format!("/api/admin/albums/{album_id}/tags/{tag_id}");
    let first = app.admin_delete(&uri).await;
    assert_eq!(first.status(), StatusCode::NO_CONTENT);
    let second = app.admin_delete(&uri).await;
    assert_eq!(second.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn duplicate_associations_are_a_bad_request() {
    let app = spawn_app().await;
    let album_id = create_album(&app, "Autumn").await;
    let tag_id = create_tag(&app, "leaves").await;

    let payload = json!({"album_id": album_id, "tag_id": tag_id});
    let first = app
        .admin_json("POST", "/api/admin/album-tags", payload.clone())
        .await;
    assert_eq!(first.status(), StatusCode::CREATED);
    let second = app.admin_json("POST", "/api/admin/album-tags", payload).await;
    assert_eq!(second.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn linking_missing_rows_is_a_bad_request() {
    let app = spawn_app().await;
    let response = app
        .admin_json(
            "POST",
            "/api/admin/album-images",
            json!({"album_id": 77, "image_id": 88}),
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn deleting_an_album_cascades_its_associations() {
    let app = spawn_app().await;
    let album_id = create_album(&app, "Doomed").await;
    let tag_id = create_tag(&app, "temporary").await;

    app.admin_json(
        "POST",
        "/api/admin/album-tags",
        json!({"album_id": album_id, "tag_id": tag_id}),
    )
    .await;

    let delete = app.admin_delete(&format!("/api/admin/albums/{album_id}")).await;
    assert_eq!(delete.status(), StatusCode::NO_CONTENT);

    // The tag survives; only the join row is gone.
    let albums: Vec<Value> = body_json(app.get(&format!("/api/tags/{tag_id}/albums")).await).await;
    assert!(albums.is_empty());
}
