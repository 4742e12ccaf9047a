use crate::database::DbError;
use crate::database::tables::{AlbumImage, AlbumTag, ImageTag};
use sqlx::{Executor, Sqlite};

/// Raw access to the three many-to-many join tables.
pub struct LinkStore;

impl LinkStore {
    pub async fn add_album_image(
        executor: impl Executor<'_, Database = Sqlite>,
        album_id: i64,
        image_id: i64,
    ) -> Result<AlbumImage, DbError> {
        Ok(sqlx::query_as::<_, AlbumImage>(
            "INSERT INTO album_images (album_id, image_id) VALUES ($1, $2) RETURNING *",
        )
        .bind(album_id)
        .bind(image_id)
        .fetch_one(executor)
        .await?)
    }

    pub async fn remove_album_image(
        executor: impl Executor<'_, Database = Sqlite>,
        album_id: i64,
        image_id: i64,
    ) -> Result<u64, DbError> {
        let result =
            sqlx::query("DELETE FROM album_images WHERE album_id = $1 AND image_id = $2")
                .bind(album_id)
                .bind(image_id)
                .execute(executor)
                .await?;
        Ok(result.rows_affected())
    }

    pub async fn add_album_tag(
        executor: impl Executor<'_, Database = Sqlite>,
        album_id: i64,
        tag_id: i64,
    ) -> Result<AlbumTag, DbError> {
        Ok(sqlx::query_as::<_, AlbumTag>(
            "INSERT INTO album_tags (album_id, tag_id) VALUES ($1, $2) RETURNING *",
        )
        .bind(album_id)
        .bind(tag_id)
        .fetch_one(executor)
        .await?)
    }

    pub async fn remove_album_tag(
        executor: impl Executor<'_, Database = Sqlite>,
        album_id: i64,
        tag_id: i64,
    ) -> Result<u64, DbError> {
        let result = sqlx::query("DELETE FROM album_tags WHERE album_id = $1 AND tag_id = $2")
            .bind(album_id)
            .bind(tag_id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected())
    }

    pub async fn add_image_tag(
        executor: impl Executor<'_, Database = Sqlite>,
        image_id: i64,
        tag_id: i64,
    ) -> Result<ImageTag, DbError> {
        Ok(sqlx::query_as::<_, ImageTag>(
            "INSERT INTO image_tags (image_id, tag_id) VALUES ($1, $2) RETURNING *",
        )
        .bind(image_id)
        .bind(tag_id)
        .fetch_one(executor)
        .await?)
    }

    pub async fn remove_image_tag(
        executor: impl Executor<'_, Database = Sqlite>,
        image_id: i64,
        tag_id: i64,
    ) -> Result<u64, DbError> {
        let result = sqlx::query("DELETE FROM image_tags WHERE image_id = $1 AND tag_id = $2")
            .bind(image_id)
            .bind(tag_id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::connect;
    use crate::database::stores::{AlbumStore, TagStore};

    #[tokio::test]
    async fn add_requires_existing_rows() {
        let pool = connect("sqlite::memory:").await.unwrap();
        // Neither album 1 nor tag 1 exist yet; the FK must reject this.
        assert!(LinkStore::add_album_tag(&pool, 1, 1).await.is_err());
    }

    #[tokio::test]
    async fn remove_twice_reports_zero_rows_not_an_error() {
        let pool = connect("sqlite::memory:").await.unwrap();
        let album = AlbumStore::create(&pool, "a", "", None).await.unwrap();
        let tag = TagStore::create(&pool, "t").await.unwrap();
        LinkStore::add_album_tag(&pool, album.id, tag.id)
            .await
            .unwrap();

        let first = LinkStore::remove_album_tag(&pool, album.id, tag.id)
            .await
            .unwrap();
        let second = LinkStore::remove_album_tag(&pool, album.id, tag.id)
            .await
            .unwrap();
        assert_eq!(first, 1);
        assert_eq!(second, 0);
    }

    #[tokio::test]
    async fn deleting_album_cascades_join_rows() {
        let pool = connect("sqlite::memory:").await.unwrap();
        let album = AlbumStore::create(&pool, "a", "", None).await.unwrap();
        let tag = TagStore::create(&pool, "t").await.unwrap();
        LinkStore::add_album_tag(&pool, album.id, tag.id)
            .await
            .unwrap();

        AlbumStore::delete(&pool, album.id).await.unwrap();
        let removed = LinkStore::remove_album_tag(&pool, album.id, tag.id)
            .await
            .unwrap();
        assert_eq!(removed, 0);
    }
}
