use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Image {
    pub id: i64,
    /// URL path of the original, under the static asset prefix.
    pub path: String,
    pub width: i64,
    pub height: i64,
    /// URL path of the generated thumbnail.
    pub thumbnail: String,
    pub thumbnail_width: i64,
    pub thumbnail_height: i64,
    pub title: String,
    pub description: String,
    pub created_at: NaiveDateTime,
}
