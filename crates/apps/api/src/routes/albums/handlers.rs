use crate::api_state::ApiContext;
use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use services::api::albums::error::AlbumError;
use services::api::albums::interfaces::{CreateAlbumRequest, UpdateAlbumRequest};
use services::api::albums::service::{
    create_album, delete_album, get_album, images_of_album, list_albums, tags_of_album,
    update_album,
};
use services::api::pagination::Pagination;
use services::database::tables::{Album, Image, Tag};
use tracing::info;

pub async fn create_album_handler(
    State(context): State<ApiContext>,
    Json(payload): Json<CreateAlbumRequest>,
) -> Result<(StatusCode, Json<Album>), AlbumError> {
    info!("Creating album {:?}", payload.title);
    let album = create_album(&context.pool, payload).await?;
    Ok((StatusCode::CREATED, Json(album)))
}

pub async fn list_albums_handler(
    State(context): State<ApiContext>,
    Query(page): Query<Pagination>,
) -> Result<Json<Vec<Album>>, AlbumError> {
    Ok(Json(list_albums(&context.pool, page).await?))
}

pub async fn get_album_handler(
    State(context): State<ApiContext>,
    Path(album_id): Path<i64>,
) -> Result<Json<Album>, AlbumError> {
    Ok(Json(get_album(&context.pool, album_id).await?))
}

pub async fn update_album_handler(
    State(context): State<ApiContext>,
    Path(album_id): Path<i64>,
    Json(payload): Json<UpdateAlbumRequest>,
) -> Result<Json<Album>, AlbumError> {
    Ok(Json(update_album(&context.pool, album_id, payload).await?))
}

pub async fn delete_album_handler(
    State(context): State<ApiContext>,
    Path(album_id): Path<i64>,
) -> Result<StatusCode, AlbumError> {
    delete_album(&context.pool, album_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn album_images_handler(
    State(context): State<ApiContext>,
    Path(album_id): Path<i64>,
) -> Result<Json<Vec<Image>>, AlbumError> {
    Ok(Json(images_of_album(&context.pool, album_id).await?))
}

pub async fn album_tags_handler(
    State(context): State<ApiContext>,
    Path(album_id): Path<i64>,
) -> Result<Json<Vec<Tag>>, AlbumError> {
    Ok(Json(tags_of_album(&context.pool, album_id).await?))
}
