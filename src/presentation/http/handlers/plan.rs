//! Recruitment Plan Handlers
//!
//! Unit managers create plans, the rector decides on them. The public form
//! can read approved plans only.

use std::sync::Arc;

use axum::{
    extract::{Extension, Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::application::dto::request::{PlanCreateRequest, PlanRejectRequest, PlanUpdateRequest};
use crate::application::dto::response::PlanResponse;
use crate::application::services::{CreatePlanDto, PlanService, PlanServiceImpl, UpdatePlanDto};
use crate::domain::UserRole;
use crate::infrastructure::repositories::{PgPlanRepository, PgUserRepository};
use crate::presentation::middleware::AuthUser;
use crate::shared::error::AppError;
use crate::shared::validation::validation_error;
use crate::startup::AppState;

fn plan_service(state: &AppState) -> PlanServiceImpl<PgPlanRepository, PgUserRepository> {
    PlanServiceImpl::new(
        Arc::new(PgPlanRepository::new(state.db.clone())),
        Arc::new(PgUserRepository::new(state.db.clone())),
    )
}

/// List all plans (staff)
pub async fn get_all_plans(
    State(state): State<AppState>,
) -> Result<Json<Vec<PlanResponse>>, AppError> {
    let views = plan_service(&state).get_all().await?;
    Ok(Json(views.into_iter().map(PlanResponse::from).collect()))
}

/// Fetch a plan by id (staff)
pub async fn get_plan(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<PlanResponse>, AppError> {
    let view = plan_service(&state).get(id).await?;
    Ok(Json(PlanResponse::from(view)))
}

/// Fetch an approved plan (public application form)
pub async fn get_approved_plan(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<PlanResponse>, AppError> {
    let view = plan_service(&state).get_approved(id).await?;
    Ok(Json(PlanResponse::from(view)))
}

/// Create a plan (unit managers)
pub async fn create_plan(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Json(body): Json<PlanCreateRequest>,
) -> Result<(StatusCode, Json<PlanResponse>), AppError> {
    auth.require_role(UserRole::UnitManager, "Only unit managers may create plans")?;
    body.validate().map_err(validation_error)?;

    let view = plan_service(&state)
        .create(
            CreatePlanDto {
                title: body.title,
                position: body.position,
                school: body.school,
                quantity: body.quantity,
                cpa: body.cpa,
                created_date: body.created_date,
            },
            auth.user_id,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(PlanResponse::from(view))))
}

/// Partially update a plan (staff)
pub async fn update_plan(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(body): Json<PlanUpdateRequest>,
) -> Result<Json<PlanResponse>, AppError> {
    let view = plan_service(&state)
        .update(
            id,
            UpdatePlanDto {
                title: body.title,
                position: body.position,
                school: body.school,
                quantity: body.quantity,
                cpa: body.cpa,
                status: body.status,
                approval_date: body.approval_date,
            },
        )
        .await?;

    Ok(Json(PlanResponse::from(view)))
}

/// Approve a plan (rector)
pub async fn approve_plan(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<i32>,
) -> Result<Json<PlanResponse>, AppError> {
    auth.require_role(UserRole::Rector, "Only the rector may approve plans")?;

    let view = plan_service(&state).approve(id, auth.user_id).await?;
    Ok(Json(PlanResponse::from(view)))
}

/// Reject a plan with an optional reason (rector)
pub async fn reject_plan(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<i32>,
    body: Option<Json<PlanRejectRequest>>,
) -> Result<Json<PlanResponse>, AppError> {
    auth.require_role(UserRole::Rector, "Only the rector may reject plans")?;

    let reason = body.and_then(|Json(b)| b.reject_reason);
    let view = plan_service(&state).reject(id, reason, auth.user_id).await?;
    Ok(Json(PlanResponse::from(view)))
}

/// Delete a plan (staff); dependent records surface as a 409
pub async fn delete_plan(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    plan_service(&state).delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Permanently delete a decided plan (personnel managers)
pub async fn delete_plan_permanent(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    auth.require_role(
        UserRole::PersonnelManager,
        "Only personnel managers may permanently delete plans",
    )?;

    plan_service(&state).delete_permanent(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
