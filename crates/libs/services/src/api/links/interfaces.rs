use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumImageRequest {
    pub album_id: i64,
    pub image_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumTagRequest {
    pub album_id: i64,
    pub tag_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageTagRequest {
    pub image_id: i64,
    pub tag_id: i64,
}
