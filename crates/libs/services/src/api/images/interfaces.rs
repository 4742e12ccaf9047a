use serde::{Deserialize, Serialize};

/// The metadata and file contents extracted from an upload form.
#[derive(Debug)]
pub struct ImageUpload {
    pub title: String,
    pub description: String,
    /// Client-supplied file name, used only for its extension.
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Update is a wholesale overwrite of the mutable columns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateImageRequest {
    pub path: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}
