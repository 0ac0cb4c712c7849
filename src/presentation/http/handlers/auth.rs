//! Authentication Handlers

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};

use crate::application::dto::request::{ForgotPasswordParams, LoginRequest};
use crate::application::dto::response::{LoginResponse, LoginUserInfo, MessageResponse};
use crate::application::services::{AuthService, AuthServiceImpl};
use crate::infrastructure::repositories::PgUserRepository;
use crate::shared::error::AppError;
use crate::startup::AppState;

fn auth_service(state: &AppState) -> AuthServiceImpl<PgUserRepository> {
    AuthServiceImpl::new(Arc::new(PgUserRepository::new(state.db.clone())))
}

/// Verify credentials and return the user's identity.
///
/// The access token is an opaque placeholder kept for frontend
/// compatibility; protected routes authenticate with HTTP Basic.
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let principal = auth_service(&state)
        .login(&body.username, &body.password)
        .await?;

    Ok(Json(LoginResponse {
        access_token: uuid::Uuid::new_v4().to_string(),
        token_type: "Bearer",
        expires_in: 3600,
        user: LoginUserInfo::from(principal),
    }))
}

/// Start a password reset (stub: the request is only logged)
pub async fn forgot_password(
    State(state): State<AppState>,
    Query(params): Query<ForgotPasswordParams>,
) -> Result<Json<MessageResponse>, AppError> {
    auth_service(&state)
        .initiate_password_reset(&params.email)
        .await?;

    Ok(Json(MessageResponse {
        message: format!("Password reset link sent to: {}", params.email),
    }))
}

/// Stateless logout acknowledgement; clients drop their credentials
pub async fn logout() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Logged out successfully".to_string(),
    })
}
