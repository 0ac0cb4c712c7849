//! Application entity and repository trait.
//!
//! Maps to the `applications` table. An application links exactly one
//! candidate to exactly one job position.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// Well-known application status values.
///
/// The status column is an open string: review staff may write any value,
/// and no transition rules are enforced. These constants cover the values
/// the review workflow actually uses.
pub mod application_status {
    /// Initial status of every submitted application
    pub const PENDING: &str = "Pending";

    pub const APPROVED: &str = "Approved";

    /// The only status that carries a rejection reason
    pub const REJECTED: &str = "Rejected";
}

/// The record linking a candidate to a job position with a review status.
///
/// Maps to the `applications` table:
/// - id: INTEGER PRIMARY KEY (identity)
/// - apply_date: DATE NOT NULL
/// - status: VARCHAR(20)
/// - rejection_reason: VARCHAR(500) NULL
/// - candidate_id: INTEGER NOT NULL REFERENCES candidates
/// - position_id: INTEGER NOT NULL REFERENCES job_positions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Application {
    /// Identity primary key
    pub id: i32,

    /// Date the application was submitted
    pub apply_date: NaiveDate,

    /// Review status (open string, see [`application_status`])
    pub status: String,

    /// Reason recorded when the status is the rejection value
    pub rejection_reason: Option<String>,

    /// Owning candidate
    pub candidate_id: i32,

    /// Targeted job position
    pub position_id: i32,
}

impl Application {
    /// Whether the current status is the rejection value.
    pub fn is_rejected(&self) -> bool {
        self.status == application_status::REJECTED
    }
}

/// Application data for insertion (id is database-generated).
#[derive(Debug, Clone)]
pub struct NewApplication {
    pub apply_date: NaiveDate,
    pub status: String,
    pub candidate_id: i32,
    pub position_id: i32,
}

/// Repository trait for Application data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ApplicationRepository: Send + Sync {
    /// List all applications.
    async fn find_all(&self) -> Result<Vec<Application>, AppError>;

    /// Find an application by id.
    async fn find_by_id(&self, id: i32) -> Result<Option<Application>, AppError>;

    /// List applications with the given raw status string.
    async fn find_by_status(&self, status: &str) -> Result<Vec<Application>, AppError>;

    /// Insert a new application.
    async fn create(&self, application: &NewApplication) -> Result<Application, AppError>;

    /// Update an existing application (status and rejection reason).
    async fn update(&self, application: &Application) -> Result<Application, AppError>;

    /// Delete every application owned by the given candidate.
    ///
    /// Returns the number of rows removed.
    async fn delete_by_candidate(&self, candidate_id: i32) -> Result<u64, AppError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_rejected_only_for_rejection_status() {
        let mut application = Application {
            id: 1,
            apply_date: NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(),
            status: application_status::PENDING.to_string(),
            rejection_reason: None,
            candidate_id: 1,
            position_id: 1,
        };
        assert!(!application.is_rejected());

        application.status = application_status::REJECTED.to_string();
        assert!(application.is_rejected());

        // Arbitrary strings are storable but are not the rejection value
        application.status = "On hold".to_string();
        assert!(!application.is_rejected());
    }
}
