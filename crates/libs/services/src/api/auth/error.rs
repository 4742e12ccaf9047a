use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use color_eyre::eyre;
use serde_json::json;
use tracing::{error, info, warn};

#[derive(Debug)]
pub enum AuthError {
    MissingToken,
    InvalidToken,
    NotAdmin { user_email: String },
    StateMismatch,
    Provider(String),
    Internal(eyre::Report),
}

// Helper function to log failures.
fn log_auth_failure(err: &AuthError) {
    match err {
        AuthError::MissingToken => warn!("Authentication failed: Missing Authorization token."),
        AuthError::InvalidToken => warn!("Authentication failed: Invalid token provided."),
        AuthError::NotAdmin { user_email } => {
            warn!("Authorization failed: {user_email} is not the admin account.");
        }
        AuthError::StateMismatch => info!("OAuth state cookie did not match the callback."),
        AuthError::Provider(message) => warn!("OAuth provider rejected the request: {message}"),
        AuthError::Internal(e) => error!("Internal server error during authentication: {e:?}"),
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        log_auth_failure(&self);

        let (status, error_message) = match self {
            AuthError::MissingToken | AuthError::InvalidToken | AuthError::NotAdmin { .. } => {
                (StatusCode::UNAUTHORIZED, "Authentication failed")
            }
            AuthError::StateMismatch | AuthError::Provider(_) => {
                (StatusCode::BAD_REQUEST, "Sign-in could not be completed")
            }
            AuthError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "An internal error occurred",
            ),
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}

// This allows us to use `?` to convert `reqwest::Error` and other errors into `AuthError::Internal`.
impl<E> From<E> for AuthError
where
    E: Into<eyre::Report>,
{
    fn from(err: E) -> Self {
        Self::Internal(err.into())
    }
}
