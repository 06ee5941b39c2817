use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    error::{AppError, AppResult},
    extractors::{AppJson, AuthUser},
    handlers::SuccessResponse,
    models::application::{ApplicationStatus, JobApplication, NewApplication},
    repo::applications,
    validation::{coerce_flag, required, valid_string},
    AppState,
};

/// Body of `add` and `edit`. Every field is optional on the wire so that
/// missing values surface as 400s instead of extractor rejections.
#[derive(Debug, Default, Deserialize)]
pub struct ApplicationPayload {
    pub id: Option<i64>,
    pub job_title: Option<String>,
    pub company_name: Option<String>,
    pub job_description: Option<String>,
    pub job_location: Option<String>,
    pub job_url: Option<String>,
    pub application_deadline_date: Option<String>,
    pub application_date: Option<String>,
    pub resume_version: Option<String>,
    pub status: Option<String>,
    pub notes: Option<String>,
    pub is_marked: Option<Value>,
}

impl ApplicationPayload {
    pub fn into_new_application(self) -> AppResult<NewApplication> {
        let status = required(self.status, "status")?;
        let status = status
            .parse::<ApplicationStatus>()
            .map_err(|e| AppError::BadRequest(e.to_string()))?;

        Ok(NewApplication {
            job_title: required(self.job_title, "job_title")?,
            company_name: required(self.company_name, "company_name")?,
            job_description: valid_string(self.job_description),
            job_location: valid_string(self.job_location),
            job_url: valid_string(self.job_url),
            application_deadline_date: valid_string(self.application_deadline_date),
            application_date: valid_string(self.application_date),
            resume_version: valid_string(self.resume_version),
            status,
            notes: valid_string(self.notes),
            is_marked: coerce_flag(self.is_marked.as_ref())?,
        })
    }
}

#[derive(Serialize)]
pub struct ListResponse {
    pub results: Vec<JobApplication>,
}

#[derive(Serialize)]
pub struct AddResponse {
    pub success: bool,
    pub id: i64,
}

#[derive(Deserialize)]
pub struct DeleteRequest {
    pub application_id: Option<Vec<i64>>,
}

#[derive(Serialize)]
pub struct DeleteResponse {
    /// Number of rows actually removed.
    pub success: u64,
}

pub async fn list(user: AuthUser, State(state): State<AppState>) -> AppResult<Json<ListResponse>> {
    let results = applications::list_for_user(&state.db, user.id).await?;
    Ok(Json(ListResponse { results }))
}

pub async fn add(
    user: AuthUser,
    State(state): State<AppState>,
    AppJson(payload): AppJson<ApplicationPayload>,
) -> AppResult<Json<AddResponse>> {
    let application = payload.into_new_application()?;
    let id = applications::insert(&state.db, user.id, &application).await?;
    tracing::debug!(user_id = user.id, application_id = id, "application added");

    Ok(Json(AddResponse { success: true, id }))
}

pub async fn edit(
    user: AuthUser,
    State(state): State<AppState>,
    AppJson(payload): AppJson<ApplicationPayload>,
) -> AppResult<Json<SuccessResponse>> {
    let id = payload
        .id
        .ok_or_else(|| AppError::BadRequest("Missing required field: id".to_string()))?;
    let application = payload.into_new_application()?;

    if !applications::update_owned(&state.db, user.id, id, &application).await? {
        return Err(AppError::NotFound("Application not found".to_string()));
    }

    Ok(Json(SuccessResponse { success: true }))
}

pub async fn delete(
    user: AuthUser,
    State(state): State<AppState>,
    AppJson(req): AppJson<DeleteRequest>,
) -> AppResult<Json<DeleteResponse>> {
    let ids = req.application_id.ok_or_else(|| {
        AppError::BadRequest("application_id must be an array of ids".to_string())
    })?;

    let removed = applications::delete_many_owned(&state.db, user.id, &ids).await?;
    tracing::debug!(user_id = user.id, requested = ids.len(), removed, "applications deleted");

    Ok(Json(DeleteResponse { success: removed }))
}
