use crate::api_state::ApiContext;
use axum::Json;
use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use services::api::images::error::ImageError;
use services::api::images::interfaces::{ImageUpload, UpdateImageRequest};
use services::api::images::service::{
    delete_image, get_image, list_images, tags_of_image, update_image, upload_image,
};
use services::api::images::upload::MAX_IMAGE_BYTES;
use services::api::pagination::Pagination;
use services::database::tables::{Image, Tag};
use tracing::info;

/// Multipart upload with `title`, `description`, and `image` fields.
pub async fn upload_image_handler(
    State(context): State<ApiContext>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<Image>), ImageError> {
    let mut title = String::new();
    let mut description = String::new();
    let mut file_name = String::new();
    let mut bytes = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ImageError::BadRequest(e.to_string()))?
    {
        match field.name() {
            Some("title") => {
                title = field
                    .text()
                    .await
                    .map_err(|e| ImageError::BadRequest(e.to_string()))?;
            }
            Some("description") => {
                description = field
                    .text()
                    .await
                    .map_err(|e| ImageError::BadRequest(e.to_string()))?;
            }
            Some("image") => {
                file_name = field.file_name().unwrap_or_default().to_string();
                bytes = field
                    .bytes()
                    .await
                    .map_err(|e| ImageError::BadRequest(e.to_string()))?
                    .to_vec();
            }
            _ => {}
        }
    }

    if bytes.len() > MAX_IMAGE_BYTES {
        return Err(ImageError::BadRequest(
            "image exceeds the upload size limit".to_string(),
        ));
    }

    info!("Uploading {file_name} ({} bytes)", bytes.len());
    let image = upload_image(
        &context.pool,
        &context.settings.assets,
        &context.settings.api.public_url,
        ImageUpload {
            title,
            description,
            file_name,
            bytes,
        },
    )
    .await?;
    Ok((StatusCode::CREATED, Json(image)))
}

pub async fn list_images_handler(
    State(context): State<ApiContext>,
    Query(page): Query<Pagination>,
) -> Result<Json<Vec<Image>>, ImageError> {
    Ok(Json(list_images(&context.pool, page).await?))
}

pub async fn get_image_handler(
    State(context): State<ApiContext>,
    Path(image_id): Path<i64>,
) -> Result<Json<Image>, ImageError> {
    Ok(Json(get_image(&context.pool, image_id).await?))
}

pub async fn update_image_handler(
    State(context): State<ApiContext>,
    Path(image_id): Path<i64>,
    Json(payload): Json<UpdateImageRequest>,
) -> Result<Json<Image>, ImageError> {
    Ok(Json(update_image(&context.pool, image_id, payload).await?))
}

pub async fn delete_image_handler(
    State(context): State<ApiContext>,
    Path(image_id): Path<i64>,
) -> Result<StatusCode, ImageError> {
    delete_image(&context.pool, &context.settings.assets, image_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn image_tags_handler(
    State(context): State<ApiContext>,
    Path(image_id): Path<i64>,
) -> Result<Json<Vec<Tag>>, ImageError> {
    Ok(Json(tags_of_image(&context.pool, image_id).await?))
}
