//! Application Service
//!
//! The submission and review workflow: candidate dedup by email/phone,
//! position resolution, and the status lifecycle.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};

use crate::domain::{
    application_status, Application, ApplicationRepository, Candidate, CandidateRepository,
    JobPosition, JobPositionRepository, NewApplication, NewCandidate,
};
use crate::shared::error::AppError;

/// Application service trait
#[async_trait]
pub trait ApplicationService: Send + Sync {
    /// Submit a new application, creating or updating the candidate.
    async fn submit(
        &self,
        submission: SubmitApplicationDto,
    ) -> Result<ApplicationView, ApplicationError>;

    /// All applications as read views.
    async fn get_all(&self) -> Result<Vec<ApplicationView>, ApplicationError>;

    /// Applications with the given raw status string.
    async fn get_by_status(&self, status: &str) -> Result<Vec<ApplicationView>, ApplicationError>;

    /// Overwrite an application's status; see [`ApplicationServiceImpl::update_status`].
    async fn update_status(
        &self,
        id: i32,
        status: String,
        rejection_reason: Option<String>,
    ) -> Result<ApplicationView, ApplicationError>;
}

/// Submission data as accepted by the service
#[derive(Debug, Clone)]
pub struct SubmitApplicationDto {
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
    pub position_id: Option<i32>,
}

impl SubmitApplicationDto {
    fn candidate_data(&self) -> NewCandidate {
        NewCandidate {
            full_name: self.full_name.clone(),
            date_of_birth: self.date_of_birth,
            email: self.email.clone(),
            phone: self.phone.clone(),
            position: self.position.clone(),
            department: self.department.clone(),
            address: self.address.clone(),
            cpa: self.cpa,
            sex: self.sex.clone(),
            cv_path: self.cv_path.clone(),
        }
    }
}

/// Application read view with the resolved candidate and position title
#[derive(Debug, Clone)]
pub struct ApplicationView {
    pub id: i32,
    pub apply_date: NaiveDate,
    pub status: String,
    pub rejection_reason: Option<String>,
    pub candidate: Candidate,
    pub position_id: i32,
    pub position_title: String,
}

impl ApplicationView {
    fn assemble(application: Application, candidate: Candidate, position: &JobPosition) -> Self {
        Self {
            id: application.id,
            apply_date: application.apply_date,
            status: application.status,
            rejection_reason: application.rejection_reason,
            candidate,
            position_id: position.id,
            position_title: position.title.clone(),
        }
    }
}

/// Application service errors
#[derive(Debug, thiserror::Error)]
pub enum ApplicationError {
    #[error("Job position not found with id: {0}")]
    PositionNotFound(i32),

    #[error("No job positions available")]
    NoPositionsAvailable,

    #[error("Application not found with id: {0}")]
    NotFound(i32),

    #[error("Candidate not found with id: {0}")]
    CandidateNotFound(i32),

    #[error(transparent)]
    Repository(#[from] AppError),
}

/// ApplicationService implementation
pub struct ApplicationServiceImpl<A, C, P>
where
    A: ApplicationRepository,
    C: CandidateRepository,
    P: JobPositionRepository,
{
    application_repo: Arc<A>,
    candidate_repo: Arc<C>,
    position_repo: Arc<P>,
}

impl<A, C, P> ApplicationServiceImpl<A, C, P>
where
    A: ApplicationRepository,
    C: CandidateRepository,
    P: JobPositionRepository,
{
    pub fn new(application_repo: Arc<A>, candidate_repo: Arc<C>, position_repo: Arc<P>) -> Self {
        Self {
            application_repo,
            candidate_repo,
            position_repo,
        }
    }

    /// Resolve the target position, or fall back to the first existing one.
    async fn resolve_position(
        &self,
        position_id: Option<i32>,
    ) -> Result<JobPosition, ApplicationError> {
        match position_id {
            Some(id) => self
                .position_repo
                .find_by_id(id)
                .await?
                .ok_or(ApplicationError::PositionNotFound(id)),
            None => self
                .position_repo
                .find_first()
                .await?
                .ok_or(ApplicationError::NoPositionsAvailable),
        }
    }

    /// Find the candidate by email, falling back to phone, and overwrite it
    /// with the new submission; create a fresh row when neither matches.
    ///
    /// Email wins when email and phone match different rows.
    async fn upsert_candidate(&self, data: &NewCandidate) -> Result<Candidate, ApplicationError> {
        let existing = match self.candidate_repo.find_by_email(&data.email).await? {
            Some(candidate) => Some(candidate),
            None => self.candidate_repo.find_by_phone(&data.phone).await?,
        };

        let candidate = match existing {
            Some(mut candidate) => {
                candidate.overwrite_with(data);
                self.candidate_repo.update(&candidate).await?
            }
            None => self.candidate_repo.create(data).await?,
        };

        Ok(candidate)
    }

    /// Rebuild the view of a stored application.
    async fn view_of(&self, application: Application) -> Result<ApplicationView, ApplicationError> {
        let candidate = self
            .candidate_repo
            .find_by_id(application.candidate_id)
            .await?
            .ok_or(ApplicationError::CandidateNotFound(application.candidate_id))?;

        let position = self
            .position_repo
            .find_by_id(application.position_id)
            .await?
            .ok_or(ApplicationError::PositionNotFound(application.position_id))?;

        Ok(ApplicationView::assemble(application, candidate, &position))
    }
}

#[async_trait]
impl<A, C, P> ApplicationService for ApplicationServiceImpl<A, C, P>
where
    A: ApplicationRepository + 'static,
    C: CandidateRepository + 'static,
    P: JobPositionRepository + 'static,
{
    async fn submit(
        &self,
        submission: SubmitApplicationDto,
    ) -> Result<ApplicationView, ApplicationError> {
        // Position first: a missing position aborts before anything is
        // persisted, keeping the submission all-or-nothing.
        let position = self.resolve_position(submission.position_id).await?;

        let candidate = self.upsert_candidate(&submission.candidate_data()).await?;

        let application = self
            .application_repo
            .create(&NewApplication {
                apply_date: Utc::now().date_naive(),
                status: application_status::PENDING.to_string(),
                candidate_id: candidate.id,
                position_id: position.id,
            })
            .await?;

        tracing::info!(
            application_id = application.id,
            candidate_id = candidate.id,
            position_id = position.id,
            "Application submitted"
        );

        Ok(ApplicationView::assemble(application, candidate, &position))
    }

    async fn get_all(&self) -> Result<Vec<ApplicationView>, ApplicationError> {
        let applications = self.application_repo.find_all().await?;

        let mut views = Vec::with_capacity(applications.len());
        for application in applications {
            views.push(self.view_of(application).await?);
        }
        Ok(views)
    }

    async fn get_by_status(&self, status: &str) -> Result<Vec<ApplicationView>, ApplicationError> {
        let applications = self.application_repo.find_by_status(status).await?;

        let mut views = Vec::with_capacity(applications.len());
        for application in applications {
            views.push(self.view_of(application).await?);
        }
        Ok(views)
    }

    /// Overwrite the status with the given string.
    ///
    /// No transition rules apply: any string is written as-is. A rejection
    /// reason is stored only when the new status is the rejection value; any
    /// non-rejection status clears a previously stored reason.
    async fn update_status(
        &self,
        id: i32,
        status: String,
        rejection_reason: Option<String>,
    ) -> Result<ApplicationView, ApplicationError> {
        let mut application = self
            .application_repo
            .find_by_id(id)
            .await?
            .ok_or(ApplicationError::NotFound(id))?;

        application.status = status;
        if application.is_rejected() {
            if let Some(reason) = rejection_reason {
                application.rejection_reason = Some(reason);
            }
        } else {
            application.rejection_reason = None;
        }

        let updated = self.application_repo.update(&application).await?;
        self.view_of(updated).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::application::MockApplicationRepository;
    use crate::domain::entities::candidate::MockCandidateRepository;
    use crate::domain::entities::job_position::MockJobPositionRepository;
    use pretty_assertions::assert_eq;

    fn sample_submission(position_id: Option<i32>) -> SubmitApplicationDto {
        SubmitApplicationDto {
            full_name: "Tran Thi B".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1997, 2, 20).unwrap(),
            email: "b.tran@example.com".to_string(),
            phone: "0912345678".to_string(),
            position: "Lecturer".to_string(),
            department: "Physics".to_string(),
            address: "3 Science Avenue".to_string(),
            cpa: 3.6,
            sex: "Female".to_string(),
            cv_path: "/uploads/cv/cv1.pdf".to_string(),
            position_id,
        }
    }

    fn stored_candidate(id: i32, email: &str, phone: &str) -> Candidate {
        Candidate {
            id,
            full_name: "Old Name".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
            email: email.to_string(),
            phone: phone.to_string(),
            position: "Old Position".to_string(),
            department: "Old Department".to_string(),
            address: "Old Address".to_string(),
            cpa: 2.0,
            sex: "Female".to_string(),
            cv_path: "/uploads/cv/old.pdf".to_string(),
        }
    }

    fn sample_position(id: i32) -> JobPosition {
        JobPosition {
            id,
            title: "Lecturer in Physics".to_string(),
            position: "Lecturer".to_string(),
            plan_id: 1,
        }
    }

    fn stored_application(id: i32, status: &str, reason: Option<&str>) -> Application {
        Application {
            id,
            apply_date: NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(),
            status: status.to_string(),
            rejection_reason: reason.map(|r| r.to_string()),
            candidate_id: 5,
            position_id: 2,
        }
    }

    fn service(
        applications: MockApplicationRepository,
        candidates: MockCandidateRepository,
        positions: MockJobPositionRepository,
    ) -> ApplicationServiceImpl<
        MockApplicationRepository,
        MockCandidateRepository,
        MockJobPositionRepository,
    > {
        ApplicationServiceImpl::new(Arc::new(applications), Arc::new(candidates), Arc::new(positions))
    }

    #[tokio::test]
    async fn test_submit_with_new_email_creates_candidate_and_pending_application() {
        let mut positions = MockJobPositionRepository::new();
        positions
            .expect_find_by_id()
            .returning(|id| Ok(Some(sample_position(id))));

        let mut candidates = MockCandidateRepository::new();
        candidates.expect_find_by_email().returning(|_| Ok(None));
        candidates.expect_find_by_phone().returning(|_| Ok(None));
        candidates.expect_update().never();
        candidates.expect_create().times(1).returning(|data| {
            let mut candidate = stored_candidate(42, &data.email, &data.phone);
            candidate.overwrite_with(data);
            Ok(candidate)
        });

        let mut applications = MockApplicationRepository::new();
        applications
            .expect_create()
            .withf(|new: &NewApplication| {
                new.status == application_status::PENDING
                    && new.candidate_id == 42
                    && new.position_id == 2
            })
            .times(1)
            .returning(|new| {
                Ok(Application {
                    id: 1,
                    apply_date: new.apply_date,
                    status: new.status.clone(),
                    rejection_reason: None,
                    candidate_id: new.candidate_id,
                    position_id: new.position_id,
                })
            });

        let view = service(applications, candidates, positions)
            .submit(sample_submission(Some(2)))
            .await
            .expect("submission should succeed");

        assert_eq!(view.status, "Pending");
        assert_eq!(view.candidate.id, 42);
        assert_eq!(view.candidate.full_name, "Tran Thi B");
        assert_eq!(view.position_id, 2);
        assert_eq!(view.position_title, "Lecturer in Physics");
    }

    #[tokio::test]
    async fn test_submit_with_existing_email_overwrites_candidate_in_place() {
        let mut positions = MockJobPositionRepository::new();
        positions
            .expect_find_by_id()
            .returning(|id| Ok(Some(sample_position(id))));

        let mut candidates = MockCandidateRepository::new();
        candidates
            .expect_find_by_email()
            .returning(|email| Ok(Some(stored_candidate(5, email, "0000000000"))));
        candidates.expect_create().never();
        candidates
            .expect_update()
            .withf(|candidate: &Candidate| {
                candidate.id == 5
                    && candidate.full_name == "Tran Thi B"
                    && candidate.phone == "0912345678"
                    && candidate.cpa == 3.6
            })
            .times(1)
            .returning(|candidate| Ok(candidate.clone()));

        let mut applications = MockApplicationRepository::new();
        applications.expect_create().times(1).returning(|new| {
            Ok(Application {
                id: 2,
                apply_date: new.apply_date,
                status: new.status.clone(),
                rejection_reason: None,
                candidate_id: new.candidate_id,
                position_id: new.position_id,
            })
        });

        let view = service(applications, candidates, positions)
            .submit(sample_submission(Some(2)))
            .await
            .expect("submission should succeed");

        // Second application, same candidate row
        assert_eq!(view.candidate.id, 5);
        assert_eq!(view.candidate.full_name, "Tran Thi B");
    }

    #[tokio::test]
    async fn test_email_match_wins_over_phone_match() {
        let mut positions = MockJobPositionRepository::new();
        positions
            .expect_find_by_id()
            .returning(|id| Ok(Some(sample_position(id))));

        let mut candidates = MockCandidateRepository::new();
        candidates
            .expect_find_by_email()
            .returning(|email| Ok(Some(stored_candidate(7, email, "0777777777"))));
        // The phone lookup must not run once the email matched
        candidates.expect_find_by_phone().never();
        candidates
            .expect_update()
            .withf(|candidate: &Candidate| candidate.id == 7)
            .returning(|candidate| Ok(candidate.clone()));

        let mut applications = MockApplicationRepository::new();
        applications
            .expect_create()
            .withf(|new: &NewApplication| new.candidate_id == 7)
            .returning(|new| {
                Ok(Application {
                    id: 3,
                    apply_date: new.apply_date,
                    status: new.status.clone(),
                    rejection_reason: None,
                    candidate_id: new.candidate_id,
                    position_id: new.position_id,
                })
            });

        let view = service(applications, candidates, positions)
            .submit(sample_submission(Some(2)))
            .await
            .expect("submission should succeed");

        assert_eq!(view.candidate.id, 7);
    }

    #[tokio::test]
    async fn test_submit_with_missing_position_persists_nothing() {
        let mut positions = MockJobPositionRepository::new();
        positions.expect_find_by_id().returning(|_| Ok(None));

        let mut candidates = MockCandidateRepository::new();
        candidates.expect_find_by_email().never();
        candidates.expect_create().never();
        candidates.expect_update().never();

        let mut applications = MockApplicationRepository::new();
        applications.expect_create().never();

        let err = service(applications, candidates, positions)
            .submit(sample_submission(Some(99)))
            .await
            .expect_err("submission must fail");

        assert!(matches!(err, ApplicationError::PositionNotFound(99)));
    }

    #[tokio::test]
    async fn test_submit_without_position_falls_back_to_first() {
        let mut positions = MockJobPositionRepository::new();
        positions
            .expect_find_first()
            .returning(|| Ok(Some(sample_position(11))));

        let mut candidates = MockCandidateRepository::new();
        candidates.expect_find_by_email().returning(|_| Ok(None));
        candidates.expect_find_by_phone().returning(|_| Ok(None));
        candidates.expect_create().returning(|data| {
            let mut candidate = stored_candidate(1, &data.email, &data.phone);
            candidate.overwrite_with(data);
            Ok(candidate)
        });

        let mut applications = MockApplicationRepository::new();
        applications
            .expect_create()
            .withf(|new: &NewApplication| new.position_id == 11)
            .returning(|new| {
                Ok(Application {
                    id: 4,
                    apply_date: new.apply_date,
                    status: new.status.clone(),
                    rejection_reason: None,
                    candidate_id: new.candidate_id,
                    position_id: new.position_id,
                })
            });

        let view = service(applications, candidates, positions)
            .submit(sample_submission(None))
            .await
            .expect("submission should succeed");

        assert_eq!(view.position_id, 11);
    }

    #[tokio::test]
    async fn test_submit_without_position_and_none_exist_fails() {
        let mut positions = MockJobPositionRepository::new();
        positions.expect_find_first().returning(|| Ok(None));

        let mut candidates = MockCandidateRepository::new();
        candidates.expect_create().never();

        let mut applications = MockApplicationRepository::new();
        applications.expect_create().never();

        let err = service(applications, candidates, positions)
            .submit(sample_submission(None))
            .await
            .expect_err("submission must fail");

        assert!(matches!(err, ApplicationError::NoPositionsAvailable));
    }

    #[tokio::test]
    async fn test_rejection_with_reason_persists_reason() {
        let mut applications = MockApplicationRepository::new();
        applications
            .expect_find_by_id()
            .returning(|id| Ok(Some(stored_application(id, "Pending", None))));
        applications
            .expect_update()
            .withf(|application: &Application| {
                application.status == "Rejected"
                    && application.rejection_reason.as_deref() == Some("CPA below minimum")
            })
            .times(1)
            .returning(|application| Ok(application.clone()));

        let mut candidates = MockCandidateRepository::new();
        candidates
            .expect_find_by_id()
            .returning(|id| Ok(Some(stored_candidate(id, "x@example.com", "0123"))));

        let mut positions = MockJobPositionRepository::new();
        positions
            .expect_find_by_id()
            .returning(|id| Ok(Some(sample_position(id))));

        let view = service(applications, candidates, positions)
            .update_status(9, "Rejected".to_string(), Some("CPA below minimum".to_string()))
            .await
            .expect("update should succeed");

        assert_eq!(view.rejection_reason.as_deref(), Some("CPA below minimum"));
    }

    #[tokio::test]
    async fn test_non_rejection_status_clears_stored_reason() {
        let mut applications = MockApplicationRepository::new();
        applications
            .expect_find_by_id()
            .returning(|id| Ok(Some(stored_application(id, "Rejected", Some("Too junior")))));
        applications
            .expect_update()
            .withf(|application: &Application| {
                application.status == "Pending" && application.rejection_reason.is_none()
            })
            .times(1)
            .returning(|application| Ok(application.clone()));

        let mut candidates = MockCandidateRepository::new();
        candidates
            .expect_find_by_id()
            .returning(|id| Ok(Some(stored_candidate(id, "x@example.com", "0123"))));

        let mut positions = MockJobPositionRepository::new();
        positions
            .expect_find_by_id()
            .returning(|id| Ok(Some(sample_position(id))));

        let view = service(applications, candidates, positions)
            .update_status(9, "Pending".to_string(), None)
            .await
            .expect("update should succeed");

        assert_eq!(view.rejection_reason, None);
    }

    #[tokio::test]
    async fn test_arbitrary_status_strings_are_written_through() {
        let mut applications = MockApplicationRepository::new();
        applications
            .expect_find_by_id()
            .returning(|id| Ok(Some(stored_application(id, "Pending", None))));
        applications
            .expect_update()
            .withf(|application: &Application| application.status == "On hold")
            .returning(|application| Ok(application.clone()));

        let mut candidates = MockCandidateRepository::new();
        candidates
            .expect_find_by_id()
            .returning(|id| Ok(Some(stored_candidate(id, "x@example.com", "0123"))));

        let mut positions = MockJobPositionRepository::new();
        positions
            .expect_find_by_id()
            .returning(|id| Ok(Some(sample_position(id))));

        let view = service(applications, candidates, positions)
            .update_status(9, "On hold".to_string(), None)
            .await
            .expect("update should succeed");

        assert_eq!(view.status, "On hold");
    }

    #[tokio::test]
    async fn test_update_status_for_unknown_id_fails() {
        let mut applications = MockApplicationRepository::new();
        applications.expect_find_by_id().returning(|_| Ok(None));
        applications.expect_update().never();

        let candidates = MockCandidateRepository::new();
        let positions = MockJobPositionRepository::new();

        let err = service(applications, candidates, positions)
            .update_status(404, "Approved".to_string(), None)
            .await
            .expect_err("update must fail");

        assert!(matches!(err, ApplicationError::NotFound(404)));
    }
}
