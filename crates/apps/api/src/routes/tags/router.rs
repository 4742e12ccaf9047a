use crate::api_state::ApiContext;
use crate::routes::tags::handlers::{
    create_tag_handler, delete_tag_handler, get_tag_handler, list_tags_handler,
    tag_albums_handler, tag_images_handler, update_tag_handler,
};
use axum::Router;
use axum::routing::get;

pub fn public_router() -> Router<ApiContext> {
    Router::new()
        .route("/tags", get(list_tags_handler))
        .route("/tags/{tag_id}", get(get_tag_handler))
        .route("/tags/{tag_id}/albums", get(tag_albums_handler))
        .route("/tags/{tag_id}/images", get(tag_images_handler))
}

pub fn admin_router() -> Router<ApiContext> {
    Router::new()
        .route("/tags", get(list_tags_handler).post(create_tag_handler))
        .route(
            "/tags/{tag_id}",
            get(get_tag_handler)
                .put(update_tag_handler)
                .delete(delete_tag_handler),
        )
        .route("/tags/{tag_id}/albums", get(tag_albums_handler))
        .route("/tags/{tag_id}/images", get(tag_images_handler))
}
