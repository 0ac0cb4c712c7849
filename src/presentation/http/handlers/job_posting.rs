//! Job Posting Handlers
//!
//! The `/public` endpoints back the public job board; the bare listing is
//! for staff and includes closed postings.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::application::dto::response::JobPostingResponse;
use crate::application::services::{JobPostingService, JobPostingServiceImpl};
use crate::infrastructure::repositories::{
    PgJobPositionRepository, PgJobPostingRepository, PgPlanRepository,
};
use crate::shared::error::AppError;
use crate::startup::AppState;

fn posting_service(
    state: &AppState,
) -> JobPostingServiceImpl<PgJobPostingRepository, PgPlanRepository, PgJobPositionRepository> {
    JobPostingServiceImpl::new(
        Arc::new(PgJobPostingRepository::new(state.db.clone())),
        Arc::new(PgPlanRepository::new(state.db.clone())),
        Arc::new(PgJobPositionRepository::new(state.db.clone())),
    )
}

/// List open postings (public job board)
pub async fn get_open_postings(
    State(state): State<AppState>,
) -> Result<Json<Vec<JobPostingResponse>>, AppError> {
    let views = posting_service(&state).get_open().await?;
    Ok(Json(views.into_iter().map(JobPostingResponse::from).collect()))
}

/// Fetch a posting by id (public)
pub async fn get_posting(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<JobPostingResponse>, AppError> {
    let view = posting_service(&state).get(id).await?;
    Ok(Json(JobPostingResponse::from(view)))
}

/// Fetch the posting publishing a plan (public)
pub async fn get_posting_by_plan(
    State(state): State<AppState>,
    Path(plan_id): Path<i32>,
) -> Result<Json<JobPostingResponse>, AppError> {
    let view = posting_service(&state).get_by_plan(plan_id).await?;
    Ok(Json(JobPostingResponse::from(view)))
}

/// List all postings, open and closed (staff)
pub async fn get_all_postings(
    State(state): State<AppState>,
) -> Result<Json<Vec<JobPostingResponse>>, AppError> {
    let views = posting_service(&state).get_all().await?;
    Ok(Json(views.into_iter().map(JobPostingResponse::from).collect()))
}
