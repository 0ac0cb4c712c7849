//! Announcement Handlers
//!
//! Personnel managers publish and maintain announcements; the landing page
//! reads the active ones without authentication.

use std::sync::Arc;

use axum::{
    extract::{Extension, Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::application::dto::request::AnnouncementRequest;
use crate::application::dto::response::AnnouncementResponse;
use crate::application::services::{
    AnnouncementDto, AnnouncementService, AnnouncementServiceImpl,
};
use crate::domain::UserRole;
use crate::infrastructure::repositories::{
    PgAnnouncementRepository, PgPlanRepository, PgUserRepository,
};
use crate::presentation::middleware::AuthUser;
use crate::shared::error::AppError;
use crate::shared::validation::validation_error;
use crate::startup::AppState;

fn announcement_service(
    state: &AppState,
) -> AnnouncementServiceImpl<PgAnnouncementRepository, PgPlanRepository, PgUserRepository> {
    AnnouncementServiceImpl::new(
        Arc::new(PgAnnouncementRepository::new(state.db.clone())),
        Arc::new(PgPlanRepository::new(state.db.clone())),
        Arc::new(PgUserRepository::new(state.db.clone())),
    )
}

/// List active announcements (public landing page)
pub async fn get_public_announcements(
    State(state): State<AppState>,
) -> Result<Json<Vec<AnnouncementResponse>>, AppError> {
    let views = announcement_service(&state).get_active().await?;
    Ok(Json(views.into_iter().map(AnnouncementResponse::from).collect()))
}

/// List all announcements (staff)
pub async fn get_all_announcements(
    State(state): State<AppState>,
) -> Result<Json<Vec<AnnouncementResponse>>, AppError> {
    let views = announcement_service(&state).get_all().await?;
    Ok(Json(views.into_iter().map(AnnouncementResponse::from).collect()))
}

/// Publish an announcement (personnel managers)
pub async fn create_announcement(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Json(body): Json<AnnouncementRequest>,
) -> Result<(StatusCode, Json<AnnouncementResponse>), AppError> {
    auth.require_role(
        UserRole::PersonnelManager,
        "Only personnel managers may publish announcements",
    )?;
    body.validate().map_err(validation_error)?;

    let view = announcement_service(&state)
        .create(
            AnnouncementDto {
                title: body.title,
                content: body.content,
                plan_id: body.plan_id,
            },
            auth.user_id,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(AnnouncementResponse::from(view))))
}

/// Update an announcement's title and content (personnel managers)
pub async fn update_announcement(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<i32>,
    Json(body): Json<AnnouncementRequest>,
) -> Result<Json<AnnouncementResponse>, AppError> {
    auth.require_role(
        UserRole::PersonnelManager,
        "Only personnel managers may edit announcements",
    )?;
    body.validate().map_err(validation_error)?;

    let view = announcement_service(&state)
        .update(
            id,
            AnnouncementDto {
                title: body.title,
                content: body.content,
                plan_id: body.plan_id,
            },
        )
        .await?;

    Ok(Json(AnnouncementResponse::from(view)))
}

/// Delete an announcement (personnel managers)
pub async fn delete_announcement(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    auth.require_role(
        UserRole::PersonnelManager,
        "Only personnel managers may delete announcements",
    )?;

    announcement_service(&state).delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Whether a plan already has an announcement (staff)
pub async fn is_plan_announced(
    State(state): State<AppState>,
    Path(plan_id): Path<i32>,
) -> Result<Json<bool>, AppError> {
    let announced = announcement_service(&state).is_plan_announced(plan_id).await?;
    Ok(Json(announced))
}
