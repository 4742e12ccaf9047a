use crate::api_state::ApiContext;
use crate::routes::images::handlers::{
    delete_image_handler, get_image_handler, image_tags_handler, list_images_handler,
    update_image_handler, upload_image_handler,
};
use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use services::api::images::upload::MAX_IMAGE_BYTES;

pub fn public_router() -> Router<ApiContext> {
    Router::new()
        .route("/images", get(list_images_handler))
        .route("/images/{image_id}", get(get_image_handler))
        .route("/images/{image_id}/tags", get(image_tags_handler))
}

pub fn admin_router() -> Router<ApiContext> {
    Router::new()
        .route(
            "/images",
            get(list_images_handler).post(upload_image_handler),
        )
        // Headroom above the file cap for the multipart framing.
        .layer(DefaultBodyLimit::max(MAX_IMAGE_BYTES + 64 * 1024))
        .route(
            "/images/{image_id}",
            get(get_image_handler)
                .put(update_image_handler)
                .delete(delete_image_handler),
        )
        .route("/images/{image_id}/tags", get(image_tags_handler))
}
