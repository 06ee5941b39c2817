use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header, request::Parts},
};

use crate::{error::AppError, AppState};

/// The caller of a protected route, resolved from the bearer token.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: i64,
    pub username: String,
}

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or(AppError::MissingToken)?;
        let token = auth.strip_prefix("Bearer ").ok_or(AppError::MissingToken)?;

        let claims = state.jwt.verify(token.trim()).map_err(|e| {
            tracing::debug!("rejected bearer token: {e}");
            AppError::Token(e)
        })?;

        Ok(AuthUser {
            id: claims.user_id,
            username: claims.username,
        })
    }
}
