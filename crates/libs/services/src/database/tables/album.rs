use crate::database::tables::Image;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Album {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub cover_id: Option<i64>,
    pub created_at: NaiveDateTime,
    /// The cover image record, attached after the row is fetched.
    #[sqlx(skip)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover: Option<Image>,
}
