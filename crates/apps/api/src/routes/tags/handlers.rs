use crate::api_state::ApiContext;
use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use services::api::pagination::Pagination;
use services::api::tags::error::TagError;
use services::api::tags::interfaces::{CreateTagRequest, UpdateTagRequest};
use services::api::tags::service::{
    albums_with_tag, create_tag, delete_tag, get_tag, images_with_tag, list_tags, update_tag,
};
use services::database::tables::{Album, Image, Tag};

pub async fn create_tag_handler(
    State(context): State<ApiContext>,
    Json(payload): Json<CreateTagRequest>,
) -> Result<(StatusCode, Json<Tag>), TagError> {
    let tag = create_tag(&context.pool, payload).await?;
    Ok((StatusCode::CREATED, Json(tag)))
}

pub async fn list_tags_handler(
    State(context): State<ApiContext>,
) -> Result<Json<Vec<Tag>>, TagError> {
    Ok(Json(list_tags(&context.pool).await?))
}

pub async fn get_tag_handler(
    State(context): State<ApiContext>,
    Path(tag_id): Path<i64>,
) -> Result<Json<Tag>, TagError> {
    Ok(Json(get_tag(&context.pool, tag_id).await?))
}

pub async fn update_tag_handler(
    State(context): State<ApiContext>,
    Path(tag_id): Path<i64>,
    Json(payload): Json<UpdateTagRequest>,
) -> Result<Json<Tag>, TagError> {
    Ok(Json(update_tag(&context.pool, tag_id, payload).await?))
}

pub async fn delete_tag_handler(
    State(context): State<ApiContext>,
    Path(tag_id): Path<i64>,
) -> Result<StatusCode, TagError> {
    delete_tag(&context.pool, tag_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn tag_albums_handler(
    State(context): State<ApiContext>,
    Path(tag_id): Path<i64>,
    Query(page): Query<Pagination>,
) -> Result<Json<Vec<Album>>, TagError> {
    Ok(Json(albums_with_tag(&context.pool, tag_id, page).await?))
}

pub async fn tag_images_handler(
    State(context): State<ApiContext>,
    Path(tag_id): Path<i64>,
    Query(page): Query<Pagination>,
) -> Result<Json<Vec<Image>>, TagError> {
    Ok(Json(images_with_tag(&context.pool, tag_id, page).await?))
}
