use crate::database::DbError;
use crate::database::tables::{Image, Tag};
use sqlx::{Executor, Sqlite};

pub struct ImageStore;

pub struct NewImage<'a> {
    pub path: &'a str,
    pub width: i64,
    pub height: i64,
    pub thumbnail: &'a str,
    pub thumbnail_width: i64,
    pub thumbnail_height: i64,
    pub title: &'a str,
    pub description: &'a str,
}

impl ImageStore {
    pub async fn create(
        executor: impl Executor<'_, Database = Sqlite>,
        new: NewImage<'_>,
    ) -> Result<Image, DbError> {
        Ok(sqlx::query_as::<_, Image>(
            r"
            INSERT INTO images
                (path, width, height, thumbnail, thumbnail_width, thumbnail_height, title, description)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            ",
        )
        .bind(new.path)
        .bind(new.width)
        .bind(new.height)
        .bind(new.thumbnail)
        .bind(new.thumbnail_width)
        .bind(new.thumbnail_height)
        .bind(new.title)
        .bind(new.description)
        .fetch_one(executor)
        .await?)
    }

    /// Overwrites path, title and description wholesale; dimensions are
    /// fixed at upload time.
    pub async fn update(
        executor: impl Executor<'_, Database = Sqlite>,
        image_id: i64,
        path: &str,
        title: &str,
        description: &str,
    ) -> Result<Option<Image>, DbError> {
        Ok(sqlx::query_as::<_, Image>(
            r"
            UPDATE images
            SET path = $1, title = $2, description = $3
            WHERE id = $4
            RETURNING *
            ",
        )
        .bind(path)
        .bind(title)
        .bind(description)
        .bind(image_id)
        .fetch_optional(executor)
        .await?)
    }

    pub async fn find_by_id(
        executor: impl Executor<'_, Database = Sqlite>,
        image_id: i64,
    ) -> Result<Option<Image>, DbError> {
        Ok(
            sqlx::query_as::<_, Image>("SELECT * FROM images WHERE id = $1")
                .bind(image_id)
                .fetch_optional(executor)
                .await?,
        )
    }

    pub async fn list(
        executor: impl Executor<'_, Database = Sqlite>,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Image>, DbError> {
        Ok(sqlx::query_as::<_, Image>(
            r"
            SELECT * FROM images
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
        image_id: i64,
    ) -> Result<u64, DbError> {
        let result = sqlx::query("DELETE FROM images WHERE id = $1")
            .bind(image_id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected())
    }

    pub async fn list_tags(
        executor: impl Executor<'_, Database = Sqlite>,
        image_id: i64,
    ) -> Result<Vec<Tag>, DbError> {
        Ok(sqlx::query_as::<_, Tag>(
            r"
            SELECT tags.*
            FROM tags
            JOIN image_tags ON image_tags.tag_id = tags.id
            WHERE image_tags.image_id = $1
            ORDER BY tags.id
            ",
        )
        .bind(image_id)
        .fetch_all(executor)
        .await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::connect;

    fn sample<'a>() -> NewImage<'a> {
        NewImage {
            path: "/assets/abc.png",
            width: 800,
            height: 600,
            thumbnail: "/assets/abc-thumb.jpg",
            thumbnail_width: 400,
            thumbnail_height: 300,
            title: "A photo",
            description: "",
        }
    }

    #[tokio::test]
    async fn create_records_paths_and_dimensions() {
        let pool = connect("sqlite::memory:").await.unwrap();

        let image = ImageStore::create(&pool, sample()).await.unwrap();
        assert!(image.id > 0);
        assert_eq!(image.path, "/assets/abc.png");
        assert_eq!((image.width, image.height), (800, 600));
        assert_eq!((image.thumbnail_width, image.thumbnail_height), (400, 300));
    }

    #[tokio::test]
    async fn update_does_not_touch_dimensions() {
        let pool = connect("sqlite::memory:").await.unwrap();
        let image = ImageStore::create(&pool, sample()).await.unwrap();

        let updated = ImageStore::update(&pool, image.id, &image.path, "New title", "New desc")
            .await
            .unwrap()
            .expect("image exists");
        assert_eq!(updated.title, "New title");
        assert_eq!(updated.width, 800);
    }

    #[tokio::test]
    async fn find_missing_image_is_none() {
        let pool = connect("sqlite::memory:").await.unwrap();
        assert!(ImageStore::find_by_id(&pool, 42).await.unwrap().is_none());
    }
}
