use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::{
    error::{AppError, AppResult},
    extractors::{AppJson, AuthUser},
    models::application::{ApplicationStatus, JobApplication, NewApplication},
    repo::{applications, user_config},
    validation::{required, valid_string},
    AppState,
};

#[derive(Deserialize)]
pub struct QuickAddRequest {
    pub url: Option<String>,
    pub date: Option<String>,
}

#[derive(Serialize)]
pub struct QuickAddResponse {
    pub success: bool,
    pub application: JobApplication,
}

pub async fn quick_add(
    user: AuthUser,
    State(state): State<AppState>,
    AppJson(req): AppJson<QuickAddRequest>,
) -> AppResult<Json<QuickAddResponse>> {
    let url = required(req.url, "url")?;
    let extractor = state.scraper.extractor_for(&url).ok_or_else(|| {
        AppError::BadRequest("Only LinkedIn job postings are supported".to_string())
    })?;

    let page = state.scraper.fetch(&url).await.map_err(|e| {
        tracing::warn!("fetching {url} failed: {e}");
        AppError::Upstream("Failed to fetch job posting".to_string())
    })?;

    if page.status == StatusCode::TOO_MANY_REQUESTS {
        tracing::warn!("rate limited by {} while fetching {url}", extractor.name());
        return Err(AppError::UpstreamRateLimited);
    }
    if !page.status.is_success() {
        return Err(AppError::Upstream(format!(
            "Failed to fetch job posting: upstream returned {}",
            page.status.as_u16()
        )));
    }

    let posting = extractor.extract(&page.body);
    let resume_version = user_config::quick_add_resume_version(&state.db, user.id).await?;

    let application = NewApplication {
        job_title: posting.job_title,
        company_name: posting.company_name,
        job_description: None,
        job_location: Some(posting.job_location),
        job_url: Some(url),
        application_deadline_date: None,
        application_date: valid_string(req.date),
        resume_version,
        status: ApplicationStatus::Applied,
        notes: None,
        is_marked: 0,
    };

    let id = applications::insert(&state.db, user.id, &application).await?;
    let application = applications::get_owned(&state.db, user.id, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Application not found".to_string()))?;
    tracing::info!(user_id = user.id, application_id = id, "quick-added application");

    Ok(Json(QuickAddResponse {
        success: true,
        application,
    }))
}
