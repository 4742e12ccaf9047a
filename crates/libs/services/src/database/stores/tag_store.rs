use crate::database::DbError;
use crate::database::tables::{Album, Image, Tag};
use sqlx::{Executor, Sqlite};

pub struct TagStore;

impl TagStore {
    pub async fn create(
        executor: impl Executor<'_, Database = Sqlite>,
        name: &str,
    ) -> Result<Tag, DbError> {
        Ok(
            sqlx::query_as::<_, Tag>("INSERT INTO tags (name) VALUES ($1) RETURNING *")
                .bind(name)
                .fetch_one(executor)
                .await?,
        )
    }

    pub async fn update(
        executor: impl Executor<'_, Database = Sqlite>,
        tag_id: i64,
        name: &str,
    ) -> Result<Option<Tag>, DbError> {
        Ok(
            sqlx::query_as::<_, Tag>("UPDATE tags SET name = $1 WHERE id = $2 RETURNING *")
                .bind(name)
                .bind(tag_id)
                .fetch_optional(executor)
                .await?,
        )
    }

    pub async fn find_by_id(
        executor: impl Executor<'_, Database = Sqlite>,
        tag_id: i64,
    ) -> Result<Option<Tag>, DbError> {
        Ok(sqlx::query_as::<_, Tag>("SELECT * FROM tags WHERE id = $1")
            .bind(tag_id)
            .fetch_optional(executor)
            .await?)
    }

    /// Tags are a small, flat namespace; no pagination, ordered by id.
    pub async fn list(
        executor: impl Executor<'_, Database = Sqlite>,
    ) -> Result<Vec<Tag>, DbError> {
        Ok(sqlx::query_as::<_, Tag>("SELECT * FROM tags ORDER BY id")
            .fetch_all(executor)
            .await?)
    }

    pub async fn delete(
        executor: impl Executor<'_, Database = Sqlite>,
        tag_id: i64,
    ) -> Result<u64, DbError> {
        let result = sqlx::query("DELETE FROM tags WHERE id = $1")
            .bind(tag_id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected())
    }

    pub async fn list_albums(
        executor: impl Executor<'_, Database = Sqlite>,
        tag_id: i64,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Album>, DbError> {
        Ok(sqlx::query_as::<_, Album>(
            r"
            SELECT albums.*
            FROM albums
            JOIN album_tags ON album_tags.album_id = albums.id
            WHERE album_tags.tag_id = $1
            ORDER BY albums.created_at DESC, albums.id DESC
            LIMIT $2 OFFSET $3
            ",
        )
        .bind(tag_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(executor)
        .await?)
    }

    pub async fn list_images(
        executor: impl Executor<'_, Database = Sqlite>,
        tag_id: i64,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Image>, DbError> {
        Ok(sqlx::query_as::<_, Image>(
            r"
            SELECT images.*
            FROM images
            JOIN image_tags ON image_tags.image_id = images.id
            WHERE image_tags.tag_id = $1
            ORDER BY images.created_at DESC, images.id DESC
            LIMIT $2 OFFSET $3
            ",
        )
        .bind(tag_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(executor)
        .await?)
    }
}
