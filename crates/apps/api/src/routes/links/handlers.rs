use crate::api_state::ApiContext;
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use services::api::links::error::LinkError;
use services::api::links::interfaces::{AlbumImageRequest, AlbumTagRequest, ImageTagRequest};
use services::api::links::service::{
    add_image_to_album, add_tag_to_album, add_tag_to_image, remove_image_from_album,
    remove_tag_from_album, remove_tag_from_image,
};
use services::database::tables::{AlbumImage, AlbumTag, ImageTag};

pub async fn add_album_image_handler(
    State(context): State<ApiContext>,
    Json(payload): Json<AlbumImageRequest>,
) -> Result<(StatusCode, Json<AlbumImage>), LinkError> {
    let link = add_image_to_album(&context.pool, payload.album_id, payload.image_id).await?;
    Ok((StatusCode::CREATED, Json(link)))
}

pub async fn remove_album_image_handler(
    State(context): State<ApiContext>,
    Path((album_id, image_id)): Path<(i64, i64)>,
) -> Result<StatusCode, LinkError> {
    remove_image_from_album(&context.pool, album_id, image_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn add_album_tag_handler(
    State(context): State<ApiContext>,
    Json(payload): Json<AlbumTagRequest>,
) -> Result<(StatusCode, Json<AlbumTag>), LinkError> {
    let link = add_tag_to_album(&context.pool, payload.album_id, payload.tag_id).await?;
    Ok((StatusCode::CREATED, Json(link)))
}

pub async fn remove_album_tag_handler(
    State(context): State<ApiContext>,
    Path((album_id, tag_id)): Path<(i64, i64)>,
) -> Result<StatusCode, LinkError> {
    remove_tag_from_album(&context.pool, album_id, tag_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn add_image_tag_handler(
    State(context): State<ApiContext>,
    Json(payload): Json<ImageTagRequest>,
) -> Result<(StatusCode, Json<ImageTag>), LinkError> {
    let link = add_tag_to_image(&context.pool, payload.image_id, payload.tag_id).await?;
    Ok((StatusCode::CREATED, Json(link)))
}

pub async fn remove_image_tag_handler(
    State(context): State<ApiContext>,
    Path((image_id, tag_id)): Path<(i64, i64)>,
) -> Result<StatusCode, LinkError> {
    remove_tag_from_image(&context.pool, image_id, tag_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
