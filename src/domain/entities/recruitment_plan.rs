//! RecruitmentPlan entity and repository trait.
//!
//! A plan authorizes a quantity of hires for a position, created by a unit
//! manager and approved or rejected by the rector.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// Well-known plan status values.
///
/// The plan update endpoint writes status strings through unchanged, so the
/// column stays an open string; approve/reject always write these values.
pub mod plan_status {
    pub const PENDING: &str = "Pending";
    pub const APPROVED: &str = "Approved";
    pub const REJECTED: &str = "Rejected";
}

/// A recruitment plan subject to rector approval.
///
/// Maps to the `recruitment_plans` table:
/// - id: INTEGER PRIMARY KEY (identity)
/// - title: VARCHAR(30) NOT NULL
/// - created_date: DATE NOT NULL
/// - status: VARCHAR(10)
/// - quantity: INTEGER NOT NULL
/// - cpa: REAL NOT NULL (minimum CPA requirement)
/// - position, school: NOT NULL
/// - approval_date: DATE NULL (set on approve and on reject)
/// - reject_reason: VARCHAR(500) NULL
/// - created_by: INTEGER NOT NULL REFERENCES users
/// - approved_by: INTEGER NULL REFERENCES users
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecruitmentPlan {
    /// Identity primary key
    pub id: i32,

    pub title: String,

    pub created_date: NaiveDate,

    /// Approval workflow status (see [`plan_status`])
    pub status: String,

    /// Number of hires authorized
    pub quantity: i32,

    /// Minimum CPA required of applicants
    pub cpa: f32,

    pub position: String,

    pub school: String,

    /// Date of the approve/reject decision
    pub approval_date: Option<NaiveDate>,

    pub reject_reason: Option<String>,

    /// Unit manager who created the plan
    pub created_by: i32,

    /// Rector who decided on the plan
    pub approved_by: Option<i32>,
}

impl RecruitmentPlan {
    /// Whether the plan has received a final decision.
    pub fn is_decided(&self) -> bool {
        self.status == plan_status::APPROVED || self.status == plan_status::REJECTED
    }
}

/// Plan data for insertion (id is database-generated).
#[derive(Debug, Clone)]
pub struct NewPlan {
    pub title: String,
    pub position: String,
    pub school: String,
    pub quantity: i32,
    pub cpa: f32,
    pub created_date: NaiveDate,
    pub status: String,
    pub created_by: i32,
}

/// Repository trait for RecruitmentPlan data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlanRepository: Send + Sync {
    /// List all plans.
    async fn find_all(&self) -> Result<Vec<RecruitmentPlan>, AppError>;

    /// Find a plan by id.
    async fn find_by_id(&self, id: i32) -> Result<Option<RecruitmentPlan>, AppError>;

    /// Insert a new plan.
    async fn create(&self, plan: &NewPlan) -> Result<RecruitmentPlan, AppError>;

    /// Update an existing plan.
    async fn update(&self, plan: &RecruitmentPlan) -> Result<RecruitmentPlan, AppError>;

    /// Delete a plan.
    ///
    /// Fails with `Conflict` when dependent rows (positions, postings,
    /// announcements) still reference the plan.
    async fn delete(&self, id: i32) -> Result<(), AppError>;

    /// Whether a plan with the given id exists.
    async fn exists(&self, id: i32) -> Result<bool, AppError>;
}
