//! User Handlers
//!
//! `/me` endpoints act on the authenticated principal; the remaining
//! endpoints are admin-side account management.

use std::sync::Arc;

use axum::{
    extract::{Extension, Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::application::dto::request::{CreateUserRequest, UpdateUserRequest, UserSelfUpdateRequest};
use crate::application::dto::response::{MessageResponse, UserProfileResponse, UserResponse};
use crate::application::services::{
    CreateUserDto, SelfUpdateDto, UpdateUserDto, UserService, UserServiceImpl,
};
use crate::domain::UserRole;
use crate::infrastructure::repositories::{PgUnitManagerRepository, PgUserRepository};
use crate::presentation::middleware::AuthUser;
use crate::shared::error::AppError;
use crate::shared::validation::validation_error;
use crate::startup::AppState;

fn user_service(state: &AppState) -> UserServiceImpl<PgUserRepository, PgUnitManagerRepository> {
    UserServiceImpl::new(
        Arc::new(PgUserRepository::new(state.db.clone())),
        Arc::new(PgUnitManagerRepository::new(state.db.clone())),
    )
}

/// Profile of the authenticated user
pub async fn get_my_profile(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> Result<Json<UserProfileResponse>, AppError> {
    let view = user_service(&state).get_profile(&auth.username).await?;
    Ok(Json(UserProfileResponse::from(view)))
}

/// Self-service update of email/phone/address
pub async fn update_my_profile(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Json(body): Json<UserSelfUpdateRequest>,
) -> Result<Json<UserResponse>, AppError> {
    body.validate().map_err(validation_error)?;

    let user = user_service(&state)
        .update_self(
            &auth.username,
            SelfUpdateDto {
                email: body.email,
                phone: body.phone,
                address: body.address,
            },
        )
        .await?;

    Ok(Json(UserResponse::from(user)))
}

/// List all staff accounts (admin)
pub async fn get_all_users(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> Result<Json<Vec<UserResponse>>, AppError> {
    auth.require_role(UserRole::Admin, "Only administrators may list accounts")?;

    let users = user_service(&state).get_all().await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// Fetch a staff account by id (admin)
pub async fn get_user(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<i32>,
) -> Result<Json<UserResponse>, AppError> {
    auth.require_role(UserRole::Admin, "Only administrators may view accounts")?;

    let user = user_service(&state).get(id).await?;
    Ok(Json(UserResponse::from(user)))
}

/// Create a unit-manager account (admin)
pub async fn create_user(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Json(body): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    auth.require_role(UserRole::Admin, "Only administrators may create accounts")?;
    body.validate().map_err(validation_error)?;

    let user = user_service(&state)
        .create(CreateUserDto {
            username: body.username,
            password: body.password,
            full_name: body.full_name,
            date_of_birth: body.date_of_birth,
            phone_number: body.phone_number,
            email: body.email,
            address: body.address,
            role: body.role,
            sex: body.sex,
            department: body.department,
            position: body.position,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// Update a staff account (admin)
pub async fn update_user(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<i32>,
    Json(body): Json<UpdateUserRequest>,
) -> Result<Json<UserResponse>, AppError> {
    auth.require_role(UserRole::Admin, "Only administrators may update accounts")?;
    body.validate().map_err(validation_error)?;

    let user = user_service(&state)
        .update(
            id,
            UpdateUserDto {
                password: body.password,
                full_name: body.full_name,
                date_of_birth: body.date_of_birth,
                phone_number: body.phone_number,
                email: body.email,
                address: body.address,
                sex: body.sex,
            },
        )
        .await?;

    Ok(Json(UserResponse::from(user)))
}

/// Delete a unit-manager account (admin)
pub async fn delete_user(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<i32>,
) -> Result<Json<MessageResponse>, AppError> {
    auth.require_role(UserRole::Admin, "Only administrators may delete accounts")?;

    user_service(&state).delete(id).await?;

    Ok(Json(MessageResponse {
        message: "User deleted successfully".to_string(),
    }))
}
