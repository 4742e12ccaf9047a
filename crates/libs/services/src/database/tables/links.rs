use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Join row linking an image into an album.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AlbumImage {
    pub id: i64,
    pub album_id: i64,
    pub image_id: i64,
}

/// Join row linking a tag onto an album.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AlbumTag {
    pub id: i64,
    pub album_id: i64,
    pub tag_id: i64,
}

/// Join row linking a tag onto an image.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ImageTag {
    pub id: i64,
    pub image_id: i64,
    pub tag_id: i64,
}
