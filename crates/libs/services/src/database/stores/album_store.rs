use crate::database::DbError;
use crate::database::tables::{Album, Image, Tag};
use sqlx::{Executor, Sqlite};

pub struct AlbumStore;

impl AlbumStore {
    pub async fn create(
        executor: impl Executor<'_, Database = Sqlite>,
        title: &str,
        description: &str,
        cover_id: Option<i64>,
    ) -> Result<Album, DbError> {
        Ok(sqlx::query_as::<_, Album>(
            r"
            INSERT INTO albums (title, description, cover_id)
            VALUES ($1, $2, $3)
            RETURNING *
            ",
        )
        .bind(title)
        .bind(description)
        .bind(cover_id)
        .fetch_one(executor)
        .await?)
    }

    /// Overwrites title, description and cover reference wholesale.
    pub async fn update(
        executor: impl Executor<'_, Database = Sqlite>,
        album_id: i64,
        title: &str,
        description: &str,
        cover_id: Option<i64>,
    ) -> Result<Option<Album>, DbError> {
        Ok(sqlx::query_as::<_, Album>(
            r"
            UPDATE albums
            SET title = $1, description = $2, cover_id = $3
            WHERE id = $4
            RETURNING *
            ",
        )
        .bind(title)
        .bind(description)
        .bind(cover_id)
        .bind(album_id)
        .fetch_optional(executor)
        .await?)
    }

    pub async fn find_by_id(
        executor: impl Executor<'_, Database = Sqlite>,
        album_id: i64,
    ) -> Result<Option<Album>, DbError> {
        Ok(
            sqlx::query_as::<_, Album>("SELECT * FROM albums WHERE id = $1")
                .bind(album_id)
                .fetch_optional(executor)
                .await?,
        )
    }

    /// Newest albums first. The id tie-break keeps same-second inserts in
    /// creation order.
    pub async fn list(
        executor: impl Executor<'_, Database = Sqlite>,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Album>, DbError> {
        Ok(sqlx::query_as::<_, Album>(
            r"
            SELECT * FROM albums
            ORDER BY created_at DESC, id DESC
            LIMIT $1 OFFSET $2
            ",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(executor)
        .await?)
    }

    pub async fn delete(
        executor: impl Executor<'_, Database = Sqlite>,
        album_id: i64,
    ) -> Result<u64, DbError> {
        let result = sqlx::query("DELETE FROM albums WHERE id = $1")
            .bind(album_id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected())
    }

    pub async fn list_images(
        executor: impl Executor<'_, Database = Sqlite>,
        album_id: i64,
    ) -> Result<Vec<Image>, DbError> {
        Ok(sqlx::query_as::<_, Image>(
            r"
            SELECT images.*
            FROM images
            JOIN album_images ON album_images.image_id = images.id
            WHERE album_images.album_id = $1
            ORDER BY images.created_at DESC, images.id DESC
            ",
        )
        .bind(album_id)
        .fetch_all(executor)
        .await?)
    }

    pub async fn list_tags(
        executor: impl Executor<'_, Database = Sqlite>,
        album_id: i64,
    ) -> Result<Vec<Tag>, DbError> {
        Ok(sqlx::query_as::<_, Tag>(
            r"
            SELECT tags.*
            FROM tags
            JOIN album_tags ON album_tags.tag_id = tags.id
            WHERE album_tags.album_id = $1
            ORDER BY tags.id
            ",
        )
        .bind(album_id)
        .fetch_all(executor)
        .await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::connect;

    #[tokio::test]
    async fn create_assigns_positive_id_and_echoes_fields() {
        let pool = connect("sqlite::memory:").await.unwrap();

        let album = AlbumStore::create(&pool, "Holiday", "Summer 2024", None)
            .await
            .unwrap();

        assert!(album.id > 0);
        assert_eq!(album.title, "Holiday");
        assert_eq!(album.description, "Summer 2024");
        assert_eq!(album.cover_id, None);
    }

    #[tokio::test]
    async fn list_respects_limit_and_orders_newest_first() {
        let pool = connect("sqlite::memory:").await.unwrap();
        for i in 0..5 {
            AlbumStore::create(&pool, &format!("album-{i}"), "", None)
                .await
                .unwrap();
        }

        let page = AlbumStore::list(&pool, 0, 3).await.unwrap();
        assert_eq!(page.len(), 3);
        assert_eq!(page[0].title, "album-4");
        assert_eq!(page[2].title, "album-2");

        let rest = AlbumStore::list(&pool, 3, 3).await.unwrap();
        assert_eq!(rest.len(), 2);
        assert_eq!(rest[0].title, "album-1");
    }

    #[tokio::test]
    async fn update_overwrites_fields_wholesale() {
        let pool = connect("sqlite::memory:").await.unwrap();
        let album = AlbumStore::create(&pool, "Before", "desc", None)
            .await
            .unwrap();

        let updated = AlbumStore::update(&pool, album.id, "After", "", None)
            .await
            .unwrap()
            .expect("album exists");
        assert_eq!(updated.title, "After");
        assert_eq!(updated.description, "");
    }

    #[tokio::test]
    async fn delete_missing_album_affects_no_rows() {
        let pool = connect("sqlite::memory:").await.unwrap();
        let rows = AlbumStore::delete(&pool, 9999).await.unwrap();
        assert_eq!(rows, 0);
    }
}
