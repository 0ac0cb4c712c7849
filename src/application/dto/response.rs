//! Response DTOs
//!
//! Data structures for API response bodies.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::application::services::{
    AnnouncementView, ApplicationView, AuthenticatedUser, JobPostingView, PlanView,
    UserProfileView,
};
use crate::domain::{Candidate, User};

/// Candidate response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateResponse {
    pub id: i32,
    pub full_name: String,
    pub date_of_birth: String,
    pub email: String,
    pub phone: String,
    pub position: String,
    pub department: String,
    pub address: String,
    pub cpa: f32,
    pub sex: String,
    pub cv_path: String,
}

impl From<Candidate> for CandidateResponse {
    fn from(candidate: Candidate) -> Self {
        Self {
            id: candidate.id,
            full_name: candidate.full_name,
            date_of_birth: candidate.date_of_birth.to_string(),
            email: candidate.email,
            phone: candidate.phone,
            position: candidate.position,
            department: candidate.department,
            address: candidate.address,
            cpa: candidate.cpa,
            sex: candidate.sex,
            cv_path: candidate.cv_path,
        }
    }
}

/// Application read view with nested candidate data and position title
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationResponse {
    pub id: i32,
    pub apply_date: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
    pub candidate: CandidateResponse,
    #[serde(rename = "positionID")]
    pub position_id: i32,
    pub position_title: String,
}

impl From<ApplicationView> for ApplicationResponse {
    fn from(view: ApplicationView) -> Self {
        Self {
            id: view.id,
            apply_date: view.apply_date.to_string(),
            status: view.status,
            rejection_reason: view.rejection_reason,
            candidate: CandidateResponse::from(view.candidate),
            position_id: view.position_id,
            position_title: view.position_title,
        }
    }
}

/// Envelope for the submission endpoint: `{message, data}`
#[derive(Debug, Serialize)]
pub struct SubmitApplicationResponse {
    pub message: &'static str,
    pub data: ApplicationResponse,
}

/// Plain `{message}` acknowledgement
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Recruitment plan response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanResponse {
    pub id: i32,
    pub title: String,
    pub position: String,
    pub school: String,
    pub quantity: i32,
    pub cpa: f32,
    pub status: String,
    pub created_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approval_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approved_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reject_reason: Option<String>,
}

impl From<PlanView> for PlanResponse {
    fn from(view: PlanView) -> Self {
        Self {
            id: view.plan.id,
            title: view.plan.title,
            position: view.plan.position,
            school: view.plan.school,
            quantity: view.plan.quantity,
            cpa: view.plan.cpa,
            status: view.plan.status,
            created_date: view.plan.created_date.to_string(),
            approval_date: view.plan.approval_date.map(|d| d.to_string()),
            created_by: view.created_by_username,
            approved_by: view.approved_by_username,
            reject_reason: view.plan.reject_reason,
        }
    }
}

/// Job posting response with embedded plan details
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPostingResponse {
    pub id: i32,
    pub title: String,
    pub status: String,
    pub created_date: String,
    pub deadline: String,
    #[serde(rename = "planID")]
    pub plan_id: i32,
    pub position: String,
    pub school: String,
    pub quantity: i32,
    pub required_cpa: f32,
    /// First open role slot of the plan, used to prefill the application form
    #[serde(rename = "positionID", skip_serializing_if = "Option::is_none")]
    pub position_id: Option<i32>,
}

impl From<JobPostingView> for JobPostingResponse {
    fn from(view: JobPostingView) -> Self {
        Self {
            id: view.posting.id,
            title: view.posting.title,
            status: view.posting.status.as_str().to_string(),
            created_date: view.posting.created_date.to_string(),
            deadline: view.posting.deadline.to_string(),
            plan_id: view.posting.plan_id,
            position: view.position,
            school: view.school,
            quantity: view.quantity,
            required_cpa: view.required_cpa,
            position_id: view.position_id,
        }
    }
}

/// Announcement response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnouncementResponse {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub is_active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(rename = "planID", skip_serializing_if = "Option::is_none")]
    pub plan_id: Option<i32>,
}

impl From<AnnouncementView> for AnnouncementResponse {
    fn from(view: AnnouncementView) -> Self {
        Self {
            id: view.announcement.id,
            title: view.announcement.title,
            content: view.announcement.content,
            created_at: view.announcement.created_at,
            is_active: view.announcement.is_active,
            created_by: view.created_by_username,
            plan_id: view.announcement.plan_id,
        }
    }
}

/// Login response.
///
/// The token is an opaque placeholder kept for frontend compatibility;
/// protected routes authenticate with HTTP Basic.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: &'static str,
    pub expires_in: u32,
    pub user: LoginUserInfo,
}

/// User info embedded in the login response
#[derive(Debug, Serialize)]
pub struct LoginUserInfo {
    pub username: String,
    pub name: String,
    pub role: String,
}

impl From<AuthenticatedUser> for LoginUserInfo {
    fn from(user: AuthenticatedUser) -> Self {
        Self {
            username: user.username,
            name: user.full_name,
            role: user.role.as_str().to_string(),
        }
    }
}

/// Staff account response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: i32,
    pub username: String,
    pub full_name: String,
    pub date_of_birth: String,
    pub phone_number: String,
    pub email: String,
    pub address: String,
    pub role: String,
    pub sex: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            full_name: user.full_name,
            date_of_birth: user.date_of_birth.to_string(),
            phone_number: user.phone_number,
            email: user.email,
            address: user.address,
            role: user.role.as_str().to_string(),
            sex: user.sex,
        }
    }
}

/// Current-user profile response (unit managers also carry department and
/// position)
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfileResponse {
    #[serde(flatten)]
    pub user: UserResponse,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
}

impl From<UserProfileView> for UserProfileResponse {
    fn from(view: UserProfileView) -> Self {
        Self {
            user: UserResponse::from(view.user),
            department: view.department,
            position: view.position,
        }
    }
}

/// CV upload response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileUploadResponse {
    pub file_path: String,
    pub message: &'static str,
}
