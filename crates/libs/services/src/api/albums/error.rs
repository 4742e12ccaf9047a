use crate::database::DbError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum AlbumError {
    #[error("database error")]
    Database(sqlx::Error),

    #[error("Album not found: {0}")]
    NotFound(i64),

    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl IntoResponse for AlbumError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            Self::Database(e) => {
                warn!("Album query failed: {e}");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "A database error occurred.".to_string(),
                )
            }
            Self::NotFound(id) => {
                warn!("Album not found: {id}");
                (StatusCode::NOT_FOUND, format!("Album not found: {id}"))
            }
            Self::BadRequest(message) => {
                warn!("Album -> Bad request: {message}");
                (StatusCode::BAD_REQUEST, format!("Bad request: {message}"))
            }
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}

impl From<DbError> for AlbumError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::Sqlx(sqlx::Error::Database(db_err)) => Self::BadRequest(db_err.to_string()),
            DbError::Sqlx(sql_err) => Self::Database(sql_err),
        }
    }
}
