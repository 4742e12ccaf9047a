use crate::api::images::error::ImageError;
use app_state::AssetSettings;
use image::{DynamicImage, ImageFormat, ImageReader};
use std::fs;
use std::io::Cursor;
use std::path::Path;
use tracing::warn;
use uuid::Uuid;

/// Upload size cap, applied to the request body before any parsing.
pub const MAX_IMAGE_BYTES: usize = 2 << 20;

/// Thumbnails fit inside this bounding box; originals are never upscaled.
pub const THUMBNAIL_MAX_WIDTH: u32 = 400;
pub const THUMBNAIL_MAX_HEIGHT: u32 = 400;

/// How many leading bytes are inspected for content-type sniffing.
const SNIFF_LEN: usize = 512;

/// Everything recorded about the files written for one upload.
#[derive(Debug)]
pub struct StoredFiles {
    pub path: String,
    pub width: i64,
    pub height: i64,
    pub thumbnail: String,
    pub thumbnail_width: i64,
    pub thumbnail_height: i64,
}

/// Sniff the leading bytes and require an `image/*` content type.
#[must_use]
pub fn looks_like_image(bytes: &[u8]) -> bool {
    let head = &bytes[..bytes.len().min(SNIFF_LEN)];
    infer::get(head).is_some_and(|kind| kind.mime_type().starts_with("image"))
}

/// Stored asset URLs are absolute: the configured public root plus the
/// static prefix plus the generated file name.
fn asset_url(public_root: &str, prefix: &str, file_name: &str) -> String {
    format!(
        "{}{}/{}",
        public_root.trim_end_matches('/'),
        prefix.trim_end_matches('/'),
        file_name
    )
}

/// Map an asset URL (as stored in the database) back to its file name.
#[must_use]
pub fn file_name_from_asset_url(prefix: &str, url: &str) -> Option<String> {
    let prefix = prefix.trim_end_matches('/');
    let idx = url.find(&format!("{prefix}/"))?;
    let name = &url[idx + prefix.len() + 1..];
    if name.is_empty() || name.contains('/') {
        return None;
    }
    Some(name.to_string())
}

fn file_extension(file_name: &str) -> &str {
    Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("jpg")
}

/// Persist the original under a fresh name, then decode it and write a
/// bounded thumbnail next to it. Files already written when a later step
/// fails are left in place.
pub fn store_image_files(
    assets: &AssetSettings,
    public_root: &str,
    file_name: &str,
    bytes: &[u8],
) -> Result<StoredFiles, ImageError> {
    fs::create_dir_all(&assets.public_dir)
        .map_err(|e| ImageError::BadRequest(format!("cannot create asset dir: {e}")))?;

    let original_name = format!("{}.{}", Uuid::new_v4(), file_extension(file_name));
    fs::write(assets.public_dir.join(&original_name), bytes)
        .map_err(|e| ImageError::BadRequest(format!("cannot save image: {e}")))?;

    let img = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| ImageError::BadRequest(format!("cannot read image: {e}")))?
        .decode()
        .map_err(|e| ImageError::BadRequest(format!("cannot decode image: {e}")))?;

    let (width, height) = (img.width(), img.height());
    let thumb: DynamicImage = if width <= THUMBNAIL_MAX_WIDTH && height <= THUMBNAIL_MAX_HEIGHT {
        img
    } else {
        img.thumbnail(THUMBNAIL_MAX_WIDTH, THUMBNAIL_MAX_HEIGHT)
    };
    let (thumb_width, thumb_height) = (thumb.width(), thumb.height());

    let thumb_name = format!("{}.jpg", Uuid::new_v4());
    thumb
        .to_rgb8()
        .save_with_format(assets.public_dir.join(&thumb_name), ImageFormat::Jpeg)
        .map_err(|e| ImageError::BadRequest(format!("cannot save thumbnail: {e}")))?;

    Ok(StoredFiles {
        path: asset_url(public_root, &assets.url_prefix, &original_name),
        width: i64::from(width),
        height: i64::from(height),
        thumbnail: asset_url(public_root, &assets.url_prefix, &thumb_name),
        thumbnail_width: i64::from(thumb_width),
        thumbnail_height: i64::from(thumb_height),
    })
}

/// Best-effort move of a stored asset into the deleted folder. Failures
/// are logged and swallowed; the database row is already gone.
pub fn retire_asset(assets: &AssetSettings, stored_url: &str) {
    let Some(file_name) = file_name_from_asset_url(&assets.url_prefix, stored_url) else {
        return;
    };
    if let Err(e) = fs::create_dir_all(&assets.deleted_dir) {
        warn!("Cannot create deleted-assets dir: {e}");
        return;
    }
    let from = assets.public_dir.join(&file_name);
    let to = assets.deleted_dir.join(&file_name);
    if let Err(e) = fs::rename(&from, &to) {
        warn!("Cannot retire asset {}: {e}", from.display());
    }
}
