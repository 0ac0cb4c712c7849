//! JobPosting entity and repository trait.
//!
//! A posting is the published announcement of an approved plan, visible on
//! the public job board while open.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// Posting status matching the database VARCHAR constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PostingStatus {
    Open,
    #[default]
    Closed,
}

impl PostingStatus {
    /// Convert from database string representation.
    pub fn from_str(s: &str) -> Self {
        match s {
            "Open" => Self::Open,
            _ => Self::Closed,
        }
    }

    /// Convert to database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::Closed => "Closed",
        }
    }
}

impl std::fmt::Display for PostingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A published job announcement derived from a recruitment plan.
///
/// Maps to the `job_postings` table; `plan_id` is unique (one posting per
/// plan).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobPosting {
    /// Identity primary key
    pub id: i32,

    pub title: String,

    /// Last day applications are accepted
    pub deadline: NaiveDate,

    pub created_date: NaiveDate,

    pub status: PostingStatus,

    /// The plan this posting publishes
    pub plan_id: i32,

    /// Personnel manager who published the posting
    pub created_by: i32,
}

/// Repository trait for JobPosting data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait JobPostingRepository: Send + Sync {
    /// List all postings, open and closed.
    async fn find_all(&self) -> Result<Vec<JobPosting>, AppError>;

    /// Find a posting by id.
    async fn find_by_id(&self, id: i32) -> Result<Option<JobPosting>, AppError>;

    /// List currently open postings.
    async fn find_open(&self) -> Result<Vec<JobPosting>, AppError>;

    /// Find the posting publishing the given plan, if any.
    async fn find_by_plan(&self, plan_id: i32) -> Result<Option<JobPosting>, AppError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_posting_status_roundtrip() {
        for status in [PostingStatus::Open, PostingStatus::Closed] {
            assert_eq!(PostingStatus::from_str(status.as_str()), status);
        }
    }

    #[test]
    fn test_unknown_status_is_closed() {
        assert_eq!(PostingStatus::from_str(""), PostingStatus::Closed);
        assert_eq!(PostingStatus::from_str("Draft"), PostingStatus::Closed);
    }

    #[test]
    fn test_posting_status_display() {
        assert_eq!(format!("{}", PostingStatus::Open), "Open");
        assert_eq!(format!("{}", PostingStatus::Closed), "Closed");
    }
}
