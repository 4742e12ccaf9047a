use crate::database::DbError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use color_eyre::eyre;
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

#[derive(Debug, Error)]
pub enum ImageError {
    #[error("database error")]
    Database(sqlx::Error),

    #[error("internal error")]
    Internal(#[from] eyre::Report),

    #[error("Image not found: {0}")]
    NotFound(i64),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("invalid file type")]
    NotAnImage,
}

impl IntoResponse for ImageError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            Self::Database(e) => {
                warn!("Image query failed: {e}");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "A database error occurred.".to_string(),
                )
            }
            Self::Internal(e) => {
                error!("Internal error handling image: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An unexpected internal error occurred.".to_string(),
                )
            }
            Self::NotFound(id) => {
                warn!("Image not found: {id}");
                (StatusCode::NOT_FOUND, format!("Image not found: {id}"))
            }
            Self::BadRequest(message) => {
                warn!("Image -> Bad request: {message}");
                (StatusCode::BAD_REQUEST, format!("Bad request: {message}"))
            }
            Self::NotAnImage => {
                warn!("Upload rejected: not an image");
                (
                    StatusCode::BAD_REQUEST,
                    "uploaded file is not an image".to_string(),
                )
            }
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}

impl From<DbError> for ImageError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::Sqlx(sqlx::Error::Database(db_err)) => Self::BadRequest(db_err.to_string()),
            DbError::Sqlx(sql_err) => Self::Database(sql_err),
        }
    }
}

impl From<tokio::task::JoinError> for ImageError {
    fn from(err: tokio::task::JoinError) -> Self {
        Self::Internal(eyre::Report::new(err))
    }
}
