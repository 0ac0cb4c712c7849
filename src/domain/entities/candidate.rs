//! Candidate entity and repository trait.
//!
//! Maps to the `candidates` table. Candidates are never created through a
//! dedicated endpoint: the first application submission inserts the row, and
//! later submissions matching by email or phone overwrite it in place.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// A natural person who has submitted at least one application.
///
/// Maps to the `candidates` table:
/// - id: INTEGER PRIMARY KEY (identity)
/// - full_name: VARCHAR(50) NOT NULL
/// - date_of_birth: DATE NOT NULL
/// - email: VARCHAR(50) NOT NULL UNIQUE
/// - phone: VARCHAR(15) NOT NULL UNIQUE
/// - position, department: VARCHAR(50) NOT NULL
/// - address: VARCHAR(255) NOT NULL
/// - cpa: REAL NOT NULL
/// - sex: VARCHAR(10) NOT NULL
/// - cv_path: VARCHAR(255) NOT NULL
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    /// Identity primary key
    pub id: i32,

    /// Full legal name
    pub full_name: String,

    pub date_of_birth: NaiveDate,

    /// Email address (unique, primary dedup key)
    pub email: String,

    /// Phone number (unique, secondary dedup key)
    pub phone: String,

    /// Position applied for
    pub position: String,

    /// Department applied to
    pub department: String,

    pub address: String,

    /// Cumulative grade point average
    pub cpa: f32,

    pub sex: String,

    /// Path of the uploaded CV file (as returned by the upload endpoint)
    pub cv_path: String,
}

impl Candidate {
    /// Overwrite every mutable field with the values of a new submission.
    ///
    /// Last-write-wins: the latest submission is authoritative, there is no
    /// field-level merge.
    pub fn overwrite_with(&mut self, data: &NewCandidate) {
        self.full_name = data.full_name.clone();
        self.date_of_birth = data.date_of_birth;
        self.email = data.email.clone();
        self.phone = data.phone.clone();
        self.position = data.position.clone();
        self.department = data.department.clone();
        self.address = data.address.clone();
        self.cpa = data.cpa;
        self.sex = data.sex.clone();
        self.cv_path = data.cv_path.clone();
    }
}

/// Candidate data for insertion (id is database-generated).
#[derive(Debug, Clone)]
pub struct NewCandidate {
    pub full_name: String,
    pub date_of_birth: NaiveDate,
    pub email: String,
    pub phone: String,
    pub position: String,
    pub department: String,
    pub address: String,
    pub cpa: f32,
    pub sex: String,
    pub cv_path: String,
}

/// Repository trait for Candidate data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CandidateRepository: Send + Sync {
    /// List all candidates.
    async fn find_all(&self) -> Result<Vec<Candidate>, AppError>;

    /// Find a candidate by id.
    async fn find_by_id(&self, id: i32) -> Result<Option<Candidate>, AppError>;

    /// Find a candidate by email address.
    async fn find_by_email(&self, email: &str) -> Result<Option<Candidate>, AppError>;

    /// Find a candidate by phone number.
    async fn find_by_phone(&self, phone: &str) -> Result<Option<Candidate>, AppError>;

    /// Insert a new candidate.
    async fn create(&self, candidate: &NewCandidate) -> Result<Candidate, AppError>;

    /// Update an existing candidate.
    async fn update(&self, candidate: &Candidate) -> Result<Candidate, AppError>;

    /// Delete a candidate (hard delete).
    async fn delete(&self, id: i32) -> Result<(), AppError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_candidate() -> Candidate {
        Candidate {
            id: 7,
            full_name: "Nguyen Van A".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1998, 4, 12).unwrap(),
            email: "a.nguyen@example.com".to_string(),
            phone: "0901234567".to_string(),
            position: "Lecturer".to_string(),
            department: "Computer Science".to_string(),
            address: "1 University Road".to_string(),
            cpa: 3.4,
            sex: "Male".to_string(),
            cv_path: "/uploads/cv/abc.pdf".to_string(),
        }
    }

    #[test]
    fn test_overwrite_replaces_every_mutable_field() {
        let mut candidate = sample_candidate();
        let submission = NewCandidate {
            full_name: "Nguyen Van B".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1999, 1, 1).unwrap(),
            email: "a.nguyen@example.com".to_string(),
            phone: "0909999999".to_string(),
            position: "Researcher".to_string(),
            department: "Mathematics".to_string(),
            address: "2 Campus Street".to_string(),
            cpa: 3.9,
            sex: "Male".to_string(),
            cv_path: "/uploads/cv/def.pdf".to_string(),
        };

        candidate.overwrite_with(&submission);

        assert_eq!(candidate.id, 7, "identity must survive the overwrite");
        assert_eq!(candidate.full_name, "Nguyen Van B");
        assert_eq!(candidate.phone, "0909999999");
        assert_eq!(candidate.position, "Researcher");
        assert_eq!(candidate.department, "Mathematics");
        assert_eq!(candidate.cpa, 3.9);
        assert_eq!(candidate.cv_path, "/uploads/cv/def.pdf");
    }
}
