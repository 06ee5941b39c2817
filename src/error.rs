use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::auth::jwt::TokenError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("password hashing error: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    #[error("token encoding error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    #[error("background task failed: {0}")]
    Join(#[from] tokio::task::JoinError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error("Missing or malformed Authorization header")]
    MissingToken,

    #[error("Invalid username or password")]
    LoginFail,

    #[error("Username already exists")]
    UsernameTaken,

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Rate limited by job site")]
    UpstreamRateLimited,

    #[error("{0}")]
    Upstream(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::Sqlx(ref e) => {
                tracing::error!("database error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Database error".to_string(),
                )
            }
            AppError::Hash(ref e) => {
                tracing::error!("bcrypt error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Password hashing error".to_string(),
                )
            }
            AppError::Jwt(ref e) => {
                tracing::error!("jwt error: {e}");
                (StatusCode::INTERNAL_SERVER_ERROR, "Token error".to_string())
            }
            AppError::Join(ref e) => {
                tracing::error!("blocking task error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            AppError::Token(_) | AppError::MissingToken | AppError::LoginFail => {
                (StatusCode::UNAUTHORIZED, self.to_string())
            }
            AppError::UsernameTaken | AppError::BadRequest(_) | AppError::Upstream(_) => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, self.to_string()),
            AppError::UpstreamRateLimited => (StatusCode::TOO_MANY_REQUESTS, self.to_string()),
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}
