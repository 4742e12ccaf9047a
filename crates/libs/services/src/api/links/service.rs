use crate::api::links::error::LinkError;
use crate::database::stores::LinkStore;
use crate::database::tables::{AlbumImage, AlbumTag, ImageTag};
use sqlx::SqlitePool;
use tracing::{info, instrument};

// Removal is idempotent end to end: a second delete of the same pair
// affects zero rows and still succeeds.

#[instrument(skip(pool))]
pub async fn add_image_to_album(
    pool: &SqlitePool,
    album_id: i64,
    image_id: i64,
) -> Result<AlbumImage, LinkError> {
    Ok(LinkStore::add_album_image(pool, album_id, image_id).await?)
}

#[instrument(skip(pool))]
pub async fn remove_image_from_album(
    pool: &SqlitePool,
    album_id: i64,
    image_id: i64,
) -> Result<(), LinkError> {
    let rows = LinkStore::remove_album_image(pool, album_id, image_id).await?;
    if rows == 0 {
        info!("Image {image_id} was not in album {album_id}; nothing removed");
    }
    Ok(())
}

#[instrument(skip(pool))]
pub async fn add_tag_to_album(
    pool: &SqlitePool,
    album_id: i64,
    tag_id: i64,
) -> Result<AlbumTag, LinkError> {
    Ok(LinkStore::add_album_tag(pool, album_id, tag_id).await?)
}

#[instrument(skip(pool))]
pub async fn remove_tag_from_album(
    pool: &SqlitePool,
    album_id: i64,
    tag_id: i64,
) -> Result<(), LinkError> {
    let rows = LinkStore::remove_album_tag(pool, album_id, tag_id).await?;
    if rows == 0 {
        info!("Tag {tag_id} was not on album {album_id}; nothing removed");
    }
    Ok(())
}

#[instrument(skip(pool))]
pub async fn add_tag_to_image(
    pool: &SqlitePool,
    image_id: i64,
    tag_id: i64,
) -> Result<ImageTag, LinkError> {
    Ok(LinkStore::add_image_tag(pool, image_id, tag_id).await?)
}

#[instrument(skip(pool))]
pub async fn remove_tag_from_image(
    pool: &SqlitePool,
    image_id: i64,
    tag_id: i64,
) -> Result<(), LinkError> {
    let rows = LinkStore::remove_image_tag(pool, image_id, tag_id).await?;
    if rows == 0 {
        info!("Tag {tag_id} was not on image {image_id}; nothing removed");
    }
    Ok(())
}
