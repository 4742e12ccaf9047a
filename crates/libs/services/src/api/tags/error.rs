use crate::database::DbError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum TagError {
    #[error("database error")]
    Database(sqlx::Error),

    #[error("Tag not found: {0}")]
    NotFound(i64),

    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl IntoResponse for TagError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            Self::Database(e) => {
                warn!("Tag query failed: {e}");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "A database error occurred.".to_string(),
                )
            }
            Self::NotFound(id) => {
                warn!("Tag not found: {id}");
                (StatusCode::NOT_FOUND, format!("Tag not found: {id}"))
            }
            Self::BadRequest(message) => {
                warn!("Tag -> Bad request: {message}");
                (StatusCode::BAD_REQUEST, format!("Bad request: {message}"))
            }
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}

impl From<DbError> for TagError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::Sqlx(sqlx::Error::Database(db_err)) => Self::BadRequest(db_err.to_string()),
            DbError::Sqlx(sql_err) => Self::Database(sql_err),
        }
    }
}
