//! Application Handlers
//!
//! Submission is public; listing and review are staff endpoints. The
//! boundary collapses workflow failures (missing position, unknown
//! application) to 400 responses, matching what clients expect.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use validator::Validate;

use crate::application::dto::request::{ApplicationStatusRequest, ApplicationSubmitRequest};
use crate::application::dto::response::{ApplicationResponse, SubmitApplicationResponse};
use crate::application::services::{
    ApplicationError, ApplicationService, ApplicationServiceImpl, SubmitApplicationDto,
};
use crate::infrastructure::repositories::{
    PgApplicationRepository, PgCandidateRepository, PgJobPositionRepository,
};
use crate::shared::error::AppError;
use crate::shared::validation::validation_error;
use crate::startup::AppState;

fn application_service(
    state: &AppState,
) -> ApplicationServiceImpl<PgApplicationRepository, PgCandidateRepository, PgJobPositionRepository>
{
    ApplicationServiceImpl::new(
        Arc::new(PgApplicationRepository::new(state.db.clone())),
        Arc::new(PgCandidateRepository::new(state.db.clone())),
        Arc::new(PgJobPositionRepository::new(state.db.clone())),
    )
}

/// Workflow failures surface as client-facing 400s; repository errors keep
/// their own status.
fn map_workflow_error(error: ApplicationError) -> AppError {
    match error {
        ApplicationError::Repository(e) => e,
        e => AppError::BadRequest(e.to_string()),
    }
}

/// Submit an application (public endpoint)
pub async fn submit_application(
    State(state): State<AppState>,
    Json(body): Json<ApplicationSubmitRequest>,
) -> Result<Json<SubmitApplicationResponse>, AppError> {
    body.validate().map_err(validation_error)?;

    let view = application_service(&state)
        .submit(SubmitApplicationDto {
            full_name: body.full_name,
            date_of_birth: body.date_of_birth,
            email: body.email,
            phone: body.phone,
            position: body.position,
            department: body.department,
            address: body.address,
            cpa: body.cpa,
            sex: body.sex,
            cv_path: body.cv_path,
            position_id: body.position_id,
        })
        .await
        .map_err(map_workflow_error)?;

    Ok(Json(SubmitApplicationResponse {
        message: "Application submitted successfully!",
        data: ApplicationResponse::from(view),
    }))
}

/// List all applications (staff)
pub async fn get_all_applications(
    State(state): State<AppState>,
) -> Result<Json<Vec<ApplicationResponse>>, AppError> {
    let views = application_service(&state)
        .get_all()
        .await
        .map_err(map_workflow_error)?;

    Ok(Json(views.into_iter().map(ApplicationResponse::from).collect()))
}

/// List applications filtered by raw status string (staff)
pub async fn get_applications_by_status(
    State(state): State<AppState>,
    Path(status): Path<String>,
) -> Result<Json<Vec<ApplicationResponse>>, AppError> {
    let views = application_service(&state)
        .get_by_status(&status)
        .await
        .map_err(map_workflow_error)?;

    Ok(Json(views.into_iter().map(ApplicationResponse::from).collect()))
}

/// Update an application's review status (staff)
pub async fn update_application_status(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(body): Json<ApplicationStatusRequest>,
) -> Result<Json<ApplicationResponse>, AppError> {
    let view = application_service(&state)
        .update_status(id, body.status, body.rejection_reason)
        .await
        .map_err(map_workflow_error)?;

    Ok(Json(ApplicationResponse::from(view)))
}
