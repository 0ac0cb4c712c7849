//! Request DTOs
//!
//! Data structures for API request bodies. Wire names are camelCase to match
//! the frontend; id references keep their historical `...ID` spelling.

use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

/// Application submission request (public endpoint)
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationSubmitRequest {
    #[validate(length(min = 1, max = 50, message = "Full name must be 1-50 characters"))]
    pub full_name: String,

    pub date_of_birth: NaiveDate,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, max = 15, message = "Phone must be 1-15 characters"))]
    pub phone: String,

    pub position: String,
    pub department: String,
    pub address: String,
    pub cpa: f32,
    pub sex: String,

    /// Path returned by the CV upload endpoint
    pub cv_path: String,

    /// Target job position; when absent, the first existing position is used
    #[serde(rename = "positionID")]
    pub position_id: Option<i32>,
}

/// Application status update request
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationStatusRequest {
    /// New status; any string is accepted
    pub status: String,

    /// Stored only when the new status is the rejection value
    pub rejection_reason: Option<String>,
}

/// Plan creation request
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PlanCreateRequest {
    #[validate(length(min = 1, max = 30, message = "Title must be 1-30 characters"))]
    pub title: String,

    pub position: String,
    pub school: String,
    pub quantity: i32,
    pub cpa: f32,

    /// Defaults to today when absent
    pub created_date: Option<NaiveDate>,
}

/// Plan partial-update request (absent fields are left unchanged)
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanUpdateRequest {
    pub title: Option<String>,
    pub position: Option<String>,
    pub school: Option<String>,
    pub quantity: Option<i32>,
    pub cpa: Option<f32>,
    pub status: Option<String>,
    pub approval_date: Option<NaiveDate>,
}

/// Plan rejection request
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PlanRejectRequest {
    pub reject_reason: Option<String>,
}

/// Announcement create/update request
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AnnouncementRequest {
    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: String,

    pub content: String,

    /// Plan this announcement publishes; at most one announcement per plan
    #[serde(rename = "planID")]
    pub plan_id: Option<i32>,
}

/// Login request
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Forgot-password query parameter
#[derive(Debug, Deserialize)]
pub struct ForgotPasswordParams {
    pub email: String,
}

/// Admin user-creation request
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[validate(length(min = 3, max = 30, message = "Username must be 3-30 characters"))]
    pub username: String,

    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,

    pub full_name: String,
    pub date_of_birth: NaiveDate,
    pub phone_number: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    pub address: String,

    /// Role string; only UNIT_MANAGER accounts may be created this way
    pub role: String,

    pub sex: String,

    /// Required for UNIT_MANAGER accounts
    pub department: Option<String>,

    /// Required for UNIT_MANAGER accounts
    pub position: Option<String>,
}

/// Admin user-update request (absent or empty password keeps the current one)
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    pub password: Option<String>,

    pub full_name: String,
    pub date_of_birth: NaiveDate,
    pub phone_number: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    pub address: String,
    pub sex: String,
}

/// Self-service profile update (email/phone/address only)
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserSelfUpdateRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    pub phone: String,
    pub address: String,
}
