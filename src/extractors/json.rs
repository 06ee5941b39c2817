use axum::extract::FromRequest;

use crate::error::AppError;

/// `axum::Json` whose rejections go through the shared error envelope as 400s.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
