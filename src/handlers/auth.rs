use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::{
    auth::password::{hash_password, verify_password},
    error::{AppError, AppResult},
    extractors::AppJson,
    handlers::SuccessResponse,
    repo::users,
    validation::valid_string,
    AppState,
};

#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub token: String,
}

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub username: Option<String>,
    pub password: Option<String>,
    pub create_time: Option<String>,
}

pub async fn login(
    State(state): State<AppState>,
    AppJson(req): AppJson<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let (Some(username), Some(password)) = (valid_string(req.username), valid_string(req.password))
    else {
        return Err(AppError::BadRequest("Missing username or password".to_string()));
    };

    let user = users::find_by_username(&state.db, &username)
        .await?
        .ok_or(AppError::LoginFail)?;

    if !verify_password(password, user.password).await? {
        tracing::warn!("failed login for {username}");
        return Err(AppError::LoginFail);
    }

    let token = state.jwt.issue(user.id, &user.username)?;
    tracing::info!(user_id = user.id, "user logged in");

    Ok(Json(LoginResponse { token }))
}

pub async fn register(
    State(state): State<AppState>,
    AppJson(req): AppJson<RegisterRequest>,
) -> AppResult<Json<SuccessResponse>> {
    let (Some(username), Some(password), Some(create_time)) = (
        valid_string(req.username),
        valid_string(req.password),
        valid_string(req.create_time),
    ) else {
        return Err(AppError::BadRequest(
            "Missing username, password or create_time".to_string(),
        ));
    };

    if users::username_exists(&state.db, &username).await? {
        return Err(AppError::UsernameTaken);
    }

    let password_hash = hash_password(password).await?;

    let created =
        users::create_with_config(&state.db, &username, &password_hash, &create_time).await;
    let user_id = match created {
        Ok(id) => id,
        // lost a race with a concurrent registration
        Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
            return Err(AppError::UsernameTaken);
        }
        Err(e) => return Err(e.into()),
    };
    tracing::info!(user_id, "registered {username}");

    Ok(Json(SuccessResponse { success: true }))
}
