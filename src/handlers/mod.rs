use serde::Serialize;

use crate::error::AppError;

pub mod applications;
pub mod auth;
pub mod quickadd;
pub mod user;

#[derive(Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

pub async fn not_found() -> AppError {
    AppError::NotFound("Not Found".to_string())
}
