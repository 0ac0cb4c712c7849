//! Candidate Handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::application::dto::response::{CandidateResponse, MessageResponse};
use crate::application::services::{CandidateService, CandidateServiceImpl};
use crate::infrastructure::repositories::{PgApplicationRepository, PgCandidateRepository};
use crate::shared::error::AppError;
use crate::startup::AppState;

fn candidate_service(
    state: &AppState,
) -> CandidateServiceImpl<PgCandidateRepository, PgApplicationRepository> {
    CandidateServiceImpl::new(
        Arc::new(PgCandidateRepository::new(state.db.clone())),
        Arc::new(PgApplicationRepository::new(state.db.clone())),
    )
}

/// List all candidates (staff)
pub async fn get_all_candidates(
    State(state): State<AppState>,
) -> Result<Json<Vec<CandidateResponse>>, AppError> {
    let candidates = candidate_service(&state).get_all().await?;

    Ok(Json(
        candidates.into_iter().map(CandidateResponse::from).collect(),
    ))
}

/// Fetch a candidate by id (staff)
pub async fn get_candidate(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<CandidateResponse>, AppError> {
    let candidate = candidate_service(&state).get(id).await?;
    Ok(Json(CandidateResponse::from(candidate)))
}

/// Delete a candidate together with all of its applications (staff)
pub async fn delete_candidate(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<MessageResponse>, AppError> {
    candidate_service(&state).delete(id).await.map_err(|e| match e {
        // The deletion endpoint reports every failure as a 400
        AppError::NotFound(msg) => AppError::BadRequest(msg),
        e => e,
    })?;

    Ok(Json(MessageResponse {
        message: "Candidate deleted successfully".to_string(),
    }))
}
