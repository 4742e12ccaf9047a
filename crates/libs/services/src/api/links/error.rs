use crate::database::DbError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum LinkError {
    #[error("database error")]
    Database(sqlx::Error),

    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl IntoResponse for LinkError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            Self::Database(e) => {
                warn!("Association query failed: {e}");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "A database error occurred.".to_string(),
                )
            }
            Self::BadRequest(message) => {
                warn!("Association -> Bad request: {message}");
                (StatusCode::BAD_REQUEST, format!("Bad request: {message}"))
            }
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}

impl From<DbError> for LinkError {
    fn from(err: DbError) -> Self {
        match err {
            // FK violations and duplicate pairs both surface as client errors.
            DbError::Sqlx(sqlx::Error::Database(db_err)) => Self::BadRequest(db_err.to_string()),
            DbError::Sqlx(sql_err) => Self::Database(sql_err),
        }
    }
}
