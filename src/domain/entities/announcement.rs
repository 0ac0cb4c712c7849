//! Announcement entity and repository trait.
//!
//! Recruitment announcements published by personnel managers, shown on the
//! public landing page while active. At most one announcement per plan.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// A recruitment announcement, optionally tied to a plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Announcement {
    /// Identity primary key
    pub id: i32,

    pub title: String,

    /// Free-form body text
    pub content: String,

    pub created_at: DateTime<Utc>,

    /// Inactive announcements are hidden from the public listing
    pub is_active: bool,

    /// Personnel manager who published the announcement
    pub created_by: i32,

    /// Plan this announcement publishes, if any
    pub plan_id: Option<i32>,
}

/// Announcement data for insertion (id is database-generated).
#[derive(Debug, Clone)]
pub struct NewAnnouncement {
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub is_active: bool,
    pub created_by: i32,
    pub plan_id: Option<i32>,
}

/// Repository trait for Announcement data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AnnouncementRepository: Send + Sync {
    /// List all announcements, active and inactive.
    async fn find_all(&self) -> Result<Vec<Announcement>, AppError>;

    /// Find an announcement by id.
    async fn find_by_id(&self, id: i32) -> Result<Option<Announcement>, AppError>;

    /// List active announcements, newest first.
    async fn find_active(&self) -> Result<Vec<Announcement>, AppError>;

    /// Insert a new announcement.
    async fn create(&self, announcement: &NewAnnouncement) -> Result<Announcement, AppError>;

    /// Update an existing announcement.
    async fn update(&self, announcement: &Announcement) -> Result<Announcement, AppError>;

    /// Delete an announcement (hard delete).
    async fn delete(&self, id: i32) -> Result<(), AppError>;

    /// Whether the given plan already has an announcement.
    async fn exists_for_plan(&self, plan_id: i32) -> Result<bool, AppError>;
}
