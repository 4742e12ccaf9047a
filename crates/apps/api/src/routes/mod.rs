pub mod albums;
pub mod auth;
pub mod images;
pub mod links;
pub mod tags;

use crate::api_state::ApiContext;
use crate::auth::middleware::AdminToken;
use crate::auth::router::{oauth_router, token_router, verify_router};
use axum::Router;
use axum::middleware::from_extractor_with_state;
use tower_http::services::ServeDir;

// --- Router Construction ---
pub fn create_router(api_state: ApiContext) -> Router {
    let assets = ServeDir::new(&api_state.settings.assets.public_dir);

    Router::new()
        .nest("/api", public_routes())
        .nest("/api/admin", admin_routes(api_state.clone()))
        .nest("/auth", oauth_router())
        .nest_service(api_state.settings.assets.url_prefix.as_str(), assets)
        .with_state(api_state)
}

fn public_routes() -> Router<ApiContext> {
    Router::new()
        .merge(albums::router::public_router())
        .merge(images::router::public_router())
        .merge(tags::router::public_router())
        .merge(token_router())
}

/// Every route in this subtree requires a valid admin bearer token.
fn admin_routes(api_state: ApiContext) -> Router<ApiContext> {
    Router::new()
        .merge(verify_router())
        .merge(albums::router::admin_router())
        .merge(images::router::admin_router())
        .merge(tags::router::admin_router())
        .merge(links::router::admin_router())
        .route_layer(from_extractor_with_state::<AdminToken, ApiContext>(
            api_state,
        ))
}
