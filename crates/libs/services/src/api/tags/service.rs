use crate::api::albums::service::attach_cover;
use crate::api::pagination::Pagination;
use crate::api::tags::error::TagError;
use crate::api::tags::interfaces::{CreateTagRequest, UpdateTagRequest};
use crate::database::stores::TagStore;
use crate::database::tables::{Album, Image, Tag};
use sqlx::SqlitePool;
use tracing::instrument;

#[instrument(skip(pool))]
pub async fn create_tag(pool: &SqlitePool, payload: CreateTagRequest) -> Result<Tag, TagError> {
    let mut tx = pool.begin().await.map_err(TagError::Database)?;
    let tag = TagStore::create(&mut *tx, &payload.name).await?;
    tx.commit().await.map_err(TagError::Database)?;
    Ok(tag)
}

#[instrument(skip(pool))]
pub async fn list_tags(pool: &SqlitePool) -> Result<Vec<Tag>, TagError> {
    Ok(TagStore::list(pool).await?)
}

#[instrument(skip(pool))]
pub async fn get_tag(pool: &SqlitePool, tag_id: i64) -> Result<Tag, TagError> {
    TagStore::find_by_id(pool, tag_id)
        .await?
        .ok_or(TagError::NotFound(tag_id))
}

#[instrument(skip(pool))]
pub async fn update_tag(
    pool: &SqlitePool,
    tag_id: i64,
    payload: UpdateTagRequest,
) -> Result<Tag, TagError> {
    let mut tx = pool.begin().await.map_err(TagError::Database)?;
    let tag = TagStore::update(&mut *tx, tag_id, &payload.name)
        .await?
        .ok_or(TagError::NotFound(tag_id))?;
    tx.commit().await.map_err(TagError::Database)?;
    Ok(tag)
}

#[instrument(skip(pool))]
pub async fn delete_tag(pool: &SqlitePool, tag_id: i64) -> Result<(), TagError> {
    let mut tx = pool.begin().await.map_err(TagError::Database)?;
    let rows = TagStore::delete(&mut *tx, tag_id).await?;
    if rows == 0 {
        return Err(TagError::NotFound(tag_id));
    }
    tx.commit().await.map_err(TagError::Database)?;
    Ok(())
}

#[instrument(skip(pool))]
pub async fn albums_with_tag(
    pool: &SqlitePool,
    tag_id: i64,
    page: Pagination,
) -> Result<Vec<Album>, TagError> {
    TagStore::find_by_id(pool, tag_id)
        .await?
        .ok_or(TagError::NotFound(tag_id))?;
    let page = page.clamped();
    let mut albums = TagStore::list_albums(pool, tag_id, page.offset, page.limit).await?;
    for album in &mut albums {
        attach_cover(pool, album).await?;
    }
    Ok(albums)
}

#[instrument(skip(pool))]
pub async fn images_with_tag(
    pool: &SqlitePool,
    tag_id: i64,
    page: Pagination,
) -> Result<Vec<Image>, TagError> {
    TagStore::find_by_id(pool, tag_id)
        .await?
        .ok_or(TagError::NotFound(tag_id))?;
    let page = page.clamped();
    Ok(TagStore::list_images(pool, tag_id, page.offset, page.limit).await?)
}
