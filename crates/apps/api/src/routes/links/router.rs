use crate::api_state::ApiContext;
use crate::routes::links::handlers::{
    add_album_image_handler, add_album_tag_handler, add_image_tag_handler,
    remove_album_image_handler, remove_album_tag_handler, remove_image_tag_handler,
};
use axum::Router;
use axum::routing::{delete, post};

pub fn admin_router() -> Router<ApiContext> {
    Router::new()
        .route("/album-images", post(add_album_image_handler))
        .route("/album-tags", post(add_album_tag_handler))
        .route("/image-tags", post(add_image_tag_handler))
        .route(
            "/albums/{album_id}/images/{image_id}",
            delete(remove_album_image_handler),
        )
        .route(
            "/albums/{album_id}/tags/{tag_id}",
            delete(remove_album_tag_handler),
        )
        .route(
            "/images/{image_id}/tags/{tag_id}",
            delete(remove_image_tag_handler),
        )
}
