use crate::api_state::ApiContext;
use crate::routes::auth::handlers::{
    callback_handler, google_token_handler, login_handler, verify_handler,
};
use axum::Router;
use axum::routing::{get, post};

pub fn oauth_router() -> Router<ApiContext> {
    Router::new()
        .route("/google/login", get(login_handler))
        .route("/google/callback", get(callback_handler))
}

pub fn token_router() -> Router<ApiContext> {
    Router::new().route("/token/google", post(google_token_handler))
}

pub fn verify_router() -> Router<ApiContext> {
    Router::new().route("/verify", get(verify_handler))
}
