use crate::api::images::error::ImageError;
use crate::api::images::interfaces::{ImageUpload, UpdateImageRequest};
use crate::api::images::upload::{looks_like_image, retire_asset, store_image_files};
use crate::api::pagination::Pagination;
use crate::database::stores::{ImageStore, NewImage};
use crate::database::tables::{Image, Tag};
use app_state::AssetSettings;
use sqlx::SqlitePool;
use tokio::task;
use tracing::instrument;

/// Runs the full ingestion pipeline: sniff, persist original, thumbnail,
/// then insert the record. The content-type check happens before anything
/// touches the filesystem or the database.
#[instrument(skip(pool, assets, payload), fields(file_name = %payload.file_name))]
pub async fn upload_image(
    pool: &SqlitePool,
    assets: &AssetSettings,
    public_url: &str,
    payload: ImageUpload,
) -> Result<Image, ImageError> {
    if payload.bytes.is_empty() {
        return Err(ImageError::BadRequest("image file was empty".to_string()));
    }
    if !looks_like_image(&payload.bytes) {
        return Err(ImageError::NotAnImage);
    }

    let assets = assets.clone();
    let public_url = public_url.to_string();
    let file_name = payload.file_name.clone();
    let bytes = payload.bytes;
    let stored =
        task::spawn_blocking(move || store_image_files(&assets, &public_url, &file_name, &bytes))
            .await??;

    let mut tx = pool.begin().await.map_err(ImageError::Database)?;
    let image = ImageStore::create(
        &mut *tx,
        NewImage {
            path: &stored.path,
            width: stored.width,
            height: stored.height,
            thumbnail: &stored.thumbnail,
            thumbnail_width: stored.thumbnail_width,
            thumbnail_height: stored.thumbnail_height,
            title: &payload.title,
            description: &payload.description,
        },
    )
    .await?;
    tx.commit().await.map_err(ImageError::Database)?;

    Ok(image)
}

#[instrument(skip(pool))]
pub async fn list_images(pool: &SqlitePool, page: Pagination) -> Result<Vec<Image>, ImageError> {
    let page = page.clamped();
    Ok(ImageStore::list(pool, page.offset, page.limit).await?)
}

#[instrument(skip(pool))]
pub async fn get_image(pool: &SqlitePool, image_id: i64) -> Result<Image, ImageError> {
    ImageStore::find_by_id(pool, image_id)
        .await?
        .ok_or(ImageError::NotFound(image_id))
}

#[instrument(skip(pool))]
pub async fn update_image(
    pool: &SqlitePool,
    image_id: i64,
    payload: UpdateImageRequest,
) -> Result<Image, ImageError> {
    let mut tx = pool.begin().await.map_err(ImageError::Database)?;
    let image = ImageStore::update(
        &mut *tx,
        image_id,
        &payload.path,
        &payload.title,
        &payload.description,
    )
    .await?
    .ok_or(ImageError::NotFound(image_id))?;
    tx.commit().await.map_err(ImageError::Database)?;
    Ok(image)
}

/// Deletes the record, then moves the original and thumbnail into the
/// deleted folder. The filesystem side is best-effort.
#[instrument(skip(pool, assets))]
pub async fn delete_image(
    pool: &SqlitePool,
    assets: &AssetSettings,
    image_id: i64,
) -> Result<(), ImageError> {
    let image = ImageStore::find_by_id(pool, image_id)
        .await?
        .ok_or(ImageError::NotFound(image_id))?;

    let mut tx = pool.begin().await.map_err(ImageError::Database)?;
    let rows = ImageStore::delete(&mut *tx, image_id).await?;
    if rows == 0 {
        return Err(ImageError::NotFound(image_id));
    }
    tx.commit().await.map_err(ImageError::Database)?;

    retire_asset(assets, &image.path);
    retire_asset(assets, &image.thumbnail);
    Ok(())
}

#[instrument(skip(pool))]
pub async fn tags_of_image(pool: &SqlitePool, image_id: i64) -> Result<Vec<Tag>, ImageError> {
    ImageStore::find_by_id(pool, image_id)
        .await?
        .ok_or(ImageError::NotFound(image_id))?;
    Ok(ImageStore::list_tags(pool, image_id).await?)
}
