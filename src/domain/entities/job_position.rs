//! JobPosition entity and repository trait.
//!
//! A job position is a concrete open role slot tied to a recruitment plan;
//! applications target positions, not plans. Positions are seeded alongside
//! their plan and are read-only from the HTTP surface.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// A specific open role slot within a recruitment plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobPosition {
    /// Identity primary key
    pub id: i32,

    /// Display title shown on application views
    pub title: String,

    /// Role name (e.g. "Lecturer")
    pub position: String,

    /// Owning recruitment plan
    pub plan_id: i32,
}

/// Repository trait for JobPosition data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait JobPositionRepository: Send + Sync {
    /// Find a position by id.
    async fn find_by_id(&self, id: i32) -> Result<Option<JobPosition>, AppError>;

    /// First existing position in id order, if any.
    ///
    /// Submission falls back to this when no target position is given.
    async fn find_first(&self) -> Result<Option<JobPosition>, AppError>;

    /// List positions belonging to a plan.
    async fn find_by_plan(&self, plan_id: i32) -> Result<Vec<JobPosition>, AppError>;
}
