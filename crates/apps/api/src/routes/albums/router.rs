use crate::api_state::ApiContext;
use crate::routes::albums::handlers::{
    album_images_handler, album_tags_handler, create_album_handler, delete_album_handler,
    get_album_handler, list_albums_handler, update_album_handler,
};
use axum::Router;
use axum::routing::get;

pub fn public_router() -> Router<ApiContext> {
    Router::new()
        .route("/albums", get(list_albums_handler))
        .route("/albums/{album_id}", get(get_album_handler))
        .route("/albums/{album_id}/images", get(album_images_handler))
        .route("/albums/{album_id}/tags", get(album_tags_handler))
}

pub fn admin_router() -> Router<ApiContext> {
    Router::new()
        .route(
            "/albums",
            get(list_albums_handler).post(create_album_handler),
        )
        .route(
            "/albums/{album_id}",
            get(get_album_handler)
                .put(update_album_handler)
                .delete(delete_album_handler),
        )
        .route("/albums/{album_id}/images", get(album_images_handler))
        .route("/albums/{album_id}/tags", get(album_tags_handler))
}
