//! Candidate Service
//!
//! Read and delete operations over candidates. Creation happens only through
//! application submission.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{ApplicationRepository, Candidate, CandidateRepository};
use crate::shared::error::AppError;

/// Candidate service trait
#[async_trait]
pub trait CandidateService: Send + Sync {
    /// List all candidates.
    async fn get_all(&self) -> Result<Vec<Candidate>, AppError>;

    /// Fetch a candidate by id.
    async fn get(&self, id: i32) -> Result<Candidate, AppError>;

    /// Delete a candidate and every application that references it.
    async fn delete(&self, id: i32) -> Result<(), AppError>;
}

/// CandidateService implementation
pub struct CandidateServiceImpl<C, A>
where
    C: CandidateRepository,
    A: ApplicationRepository,
{
    candidate_repo: Arc<C>,
    application_repo: Arc<A>,
}

impl<C, A> CandidateServiceImpl<C, A>
where
    C: CandidateRepository,
    A: ApplicationRepository,
{
    pub fn new(candidate_repo: Arc<C>, application_repo: Arc<A>) -> Self {
        Self {
            candidate_repo,
            application_repo,
        }
    }
}

#[async_trait]
impl<C, A> CandidateService for CandidateServiceImpl<C, A>
where
    C: CandidateRepository + 'static,
    A: ApplicationRepository + 'static,
{
    async fn get_all(&self) -> Result<Vec<Candidate>, AppError> {
        self.candidate_repo.find_all().await
    }

    async fn get(&self, id: i32) -> Result<Candidate, AppError> {
        self.candidate_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Candidate not found with id: {}", id)))
    }

    /// Hard delete, applications first so the candidate row has no
    /// remaining references.
    async fn delete(&self, id: i32) -> Result<(), AppError> {
        if self.candidate_repo.find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "Candidate not found with id: {}",
                id
            )));
        }

        let removed = self.application_repo.delete_by_candidate(id).await?;
        self.candidate_repo.delete(id).await?;

        tracing::info!(
            candidate_id = id,
            applications_removed = removed,
            "Candidate deleted"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::application::MockApplicationRepository;
    use crate::domain::entities::candidate::MockCandidateRepository;
    use chrono::NaiveDate;

    fn sample_candidate(id: i32) -> Candidate {
        Candidate {
            id,
            full_name: "Le Van C".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1995, 6, 15).unwrap(),
            email: "c.le@example.com".to_string(),
            phone: "0933333333".to_string(),
            position: "Lecturer".to_string(),
            department: "Chemistry".to_string(),
            address: "5 Lab Lane".to_string(),
            cpa: 3.1,
            sex: "Male".to_string(),
            cv_path: "/uploads/cv/c.pdf".to_string(),
        }
    }

    #[tokio::test]
    async fn test_delete_removes_applications_then_candidate() {
        let mut candidates = MockCandidateRepository::new();
        candidates
            .expect_find_by_id()
            .returning(|id| Ok(Some(sample_candidate(id))));
        candidates.expect_delete().times(1).returning(|_| Ok(()));

        let mut applications = MockApplicationRepository::new();
        applications
            .expect_delete_by_candidate()
            .times(1)
            .returning(|_| Ok(3));

        let service = CandidateServiceImpl::new(Arc::new(candidates), Arc::new(applications));
        service.delete(8).await.expect("delete should succeed");
    }

    #[tokio::test]
    async fn test_delete_unknown_candidate_fails_without_touching_applications() {
        let mut candidates = MockCandidateRepository::new();
        candidates.expect_find_by_id().returning(|_| Ok(None));
        candidates.expect_delete().never();

        let mut applications = MockApplicationRepository::new();
        applications.expect_delete_by_candidate().never();

        let service = CandidateServiceImpl::new(Arc::new(candidates), Arc::new(applications));
        let err = service.delete(404).await.expect_err("delete must fail");

        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_get_unknown_candidate_is_not_found() {
        let mut candidates = MockCandidateRepository::new();
        candidates.expect_find_by_id().returning(|_| Ok(None));

        let applications = MockApplicationRepository::new();

        let service = CandidateServiceImpl::new(Arc::new(candidates), Arc::new(applications));
        let err = service.get(404).await.expect_err("get must fail");

        assert!(matches!(err, AppError::NotFound(_)));
    }
}
