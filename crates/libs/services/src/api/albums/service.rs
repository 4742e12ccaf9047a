use crate::api::albums::error::AlbumError;
use crate::api::albums::interfaces::{CreateAlbumRequest, UpdateAlbumRequest};
use crate::api::pagination::Pagination;
use crate::database::DbError;
use crate::database::stores::{AlbumStore, ImageStore};
use crate::database::tables::{Album, Image, Tag};
use sqlx::SqlitePool;
use tracing::instrument;

/// Attach the referenced cover image, if any. A dangling reference is
/// treated as "no cover" rather than an error. Shared with every listing
/// that returns album records.
pub(crate) async fn attach_cover(pool: &SqlitePool, album: &mut Album) -> Result<(), DbError> {
    if let Some(cover_id) = album.cover_id {
        album.cover = ImageStore::find_by_id(pool, cover_id).await?;
    }
    Ok(())
}

#[instrument(skip(pool))]
pub async fn create_album(
    pool: &SqlitePool,
    payload: CreateAlbumRequest,
) -> Result<Album, AlbumError> {
    let mut tx = pool.begin().await.map_err(AlbumError::Database)?;
    let album = AlbumStore::create(
        &mut *tx,
        &payload.title,
        &payload.description,
        payload.cover_id,
    )
    .await?;
    tx.commit().await.map_err(AlbumError::Database)?;
    Ok(album)
}

#[instrument(skip(pool))]
pub async fn list_albums(pool: &SqlitePool, page: Pagination) -> Result<Vec<Album>, AlbumError> {
    let page = page.clamped();
    let mut albums = AlbumStore::list(pool, page.offset, page.limit).await?;
    for album in &mut albums {
        attach_cover(pool, album).await?;
    }
    Ok(albums)
}

#[instrument(skip(pool))]
pub async fn get_album(pool: &SqlitePool, album_id: i64) -> Result<Album, AlbumError> {
    let mut album = AlbumStore::find_by_id(pool, album_id)
        .await?
        .ok_or(AlbumError::NotFound(album_id))?;
    attach_cover(pool, &mut album).await?;
    Ok(album)
}

#[instrument(skip(pool))]
pub async fn update_album(
    pool: &SqlitePool,
    album_id: i64,
    payload: UpdateAlbumRequest,
) -> Result<Album, AlbumError> {
    let mut tx = pool.begin().await.map_err(AlbumError::Database)?;
    let album = AlbumStore::update(
        &mut *tx,
        album_id,
        &payload.title,
        &payload.description,
        payload.cover_id,
    )
    .await?
    .ok_or(AlbumError::NotFound(album_id))?;
    tx.commit().await.map_err(AlbumError::Database)?;
    Ok(album)
}

#[instrument(skip(pool))]
pub async fn delete_album(pool: &SqlitePool, album_id: i64) -> Result<(), AlbumError> {
    let mut tx = pool.begin().await.map_err(AlbumError::Database)?;
    let rows = AlbumStore::delete(&mut *tx, album_id).await?;
    if rows == 0 {
        return Err(AlbumError::NotFound(album_id));
    }
    tx.commit().await.map_err(AlbumError::Database)?;
    Ok(())
}

#[instrument(skip(pool))]
pub async fn images_of_album(pool: &SqlitePool, album_id: i64) -> Result<Vec<Image>, AlbumError> {
    AlbumStore::find_by_id(pool, album_id)
        .await?
        .ok_or(AlbumError::NotFound(album_id))?;
    Ok(AlbumStore::list_images(pool, album_id).await?)
}

#[instrument(skip(pool))]
pub async fn tags_of_album(pool: &SqlitePool, album_id: i64) -> Result<Vec<Tag>, AlbumError> {
    AlbumStore::find_by_id(pool, album_id)
        .await?
        .ok_or(AlbumError::NotFound(album_id))?;
    Ok(AlbumStore::list_tags(pool, album_id).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::connect;
    use crate::database::stores::NewImage;

    #[tokio::test]
    async fn get_album_embeds_its_cover() {
        let pool = connect("sqlite::memory:").await.unwrap();
        let image = ImageStore::create(
            &pool,
            NewImage {
                path: "/assets/c.png",
                width: 10,
                height: 10,
                thumbnail: "/assets/c-t.jpg",
                thumbnail_width: 10,
                thumbnail_height: 10,
                title: "",
                description: "",
            },
        )
        .await
        .unwrap();

        let created = create_album(
            &pool,
            CreateAlbumRequest {
                title: "With cover".into(),
                description: String::new(),
                cover_id: Some(image.id),
            },
        )
        .await
        .unwrap();

        let album = get_album(&pool, created.id).await.unwrap();
        assert_eq!(album.cover.expect("cover attached").id, image.id);
    }

    #[tokio::test]
    async fn delete_and_get_agree_on_missing_albums() {
        let pool = connect("sqlite::memory:").await.unwrap();
        let get_err = get_album(&pool, 123).await.unwrap_err();
        let delete_err = delete_album(&pool, 123).await.unwrap_err();
        assert!(matches!(get_err, AlbumError::NotFound(123)));
        assert!(matches!(delete_err, AlbumError::NotFound(123)));
    }
}
