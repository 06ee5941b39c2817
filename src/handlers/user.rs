use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::{
    error::{AppError, AppResult},
    extractors::{AppJson, AuthUser},
    handlers::SuccessResponse,
    repo::user_config,
    validation::valid_string,
    AppState,
};

#[derive(Serialize)]
pub struct UserDetails {
    pub username: String,
    pub create_time: String,
    #[serde(rename = "quickAddResumeVersion")]
    pub quick_add_resume_version: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateUserRequest {
    #[serde(rename = "quickAddResumeVersion")]
    pub quick_add_resume_version: Option<String>,
}

pub async fn details(
    user: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<UserDetails>> {
    let config = user_config::get(&state.db, user.id)
        .await?
        .ok_or_else(|| AppError::NotFound("User config not found".to_string()))?;

    Ok(Json(UserDetails {
        username: user.username,
        create_time: config.create_time,
        quick_add_resume_version: config.quick_add_resume_version,
    }))
}

pub async fn update(
    user: AuthUser,
    State(state): State<AppState>,
    AppJson(req): AppJson<UpdateUserRequest>,
) -> AppResult<Json<SuccessResponse>> {
    let resume_version = valid_string(req.quick_add_resume_version);

    if !user_config::update_resume_version(&state.db, user.id, resume_version.as_deref()).await? {
        return Err(AppError::NotFound("User config not found".to_string()));
    }

    Ok(Json(SuccessResponse { success: true }))
}
