//! Job Posting Service
//!
//! Read-side assembly of posting views: the posting row plus the plan
//! details the public job board shows.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{
    JobPosition, JobPositionRepository, JobPosting, JobPostingRepository, PlanRepository,
};
use crate::shared::error::AppError;

/// Posting read view with embedded plan details
#[derive(Debug, Clone)]
pub struct JobPostingView {
    pub posting: JobPosting,
    pub position: String,
    pub school: String,
    pub quantity: i32,
    pub required_cpa: f32,
    /// First role slot of the plan, used to prefill the application form
    pub position_id: Option<i32>,
}

/// Job posting service trait
#[async_trait]
pub trait JobPostingService: Send + Sync {
    /// All postings, open and closed (staff listing).
    async fn get_all(&self) -> Result<Vec<JobPostingView>, AppError>;

    /// Currently open postings (public job board).
    async fn get_open(&self) -> Result<Vec<JobPostingView>, AppError>;

    /// Fetch a posting by id.
    async fn get(&self, id: i32) -> Result<JobPostingView, AppError>;

    /// Fetch the posting publishing the given plan.
    async fn get_by_plan(&self, plan_id: i32) -> Result<JobPostingView, AppError>;
}

/// JobPostingService implementation
pub struct JobPostingServiceImpl<J, P, R>
where
    J: JobPostingRepository,
    P: PlanRepository,
    R: JobPositionRepository,
{
    posting_repo: Arc<J>,
    plan_repo: Arc<P>,
    position_repo: Arc<R>,
}

impl<J, P, R> JobPostingServiceImpl<J, P, R>
where
    J: JobPostingRepository,
    P: PlanRepository,
    R: JobPositionRepository,
{
    pub fn new(posting_repo: Arc<J>, plan_repo: Arc<P>, position_repo: Arc<R>) -> Self {
        Self {
            posting_repo,
            plan_repo,
            position_repo,
        }
    }

    async fn view_of(&self, posting: JobPosting) -> Result<JobPostingView, AppError> {
        let plan = self
            .plan_repo
            .find_by_id(posting.plan_id)
            .await?
            .ok_or_else(|| {
                AppError::Internal(format!(
                    "posting {} references missing plan {}",
                    posting.id, posting.plan_id
                ))
            })?;

        let position_id = self
            .position_repo
            .find_by_plan(plan.id)
            .await?
            .first()
            .map(|p: &JobPosition| p.id);

        Ok(JobPostingView {
            posting,
            position: plan.position,
            school: plan.school,
            quantity: plan.quantity,
            required_cpa: plan.cpa,
            position_id,
        })
    }

    async fn views_of(&self, postings: Vec<JobPosting>) -> Result<Vec<JobPostingView>, AppError> {
        let mut views = Vec::with_capacity(postings.len());
        for posting in postings {
            views.push(self.view_of(posting).await?);
        }
        Ok(views)
    }
}

#[async_trait]
impl<J, P, R> JobPostingService for JobPostingServiceImpl<J, P, R>
where
    J: JobPostingRepository + 'static,
    P: PlanRepository + 'static,
    R: JobPositionRepository + 'static,
{
    async fn get_all(&self) -> Result<Vec<JobPostingView>, AppError> {
        let postings = self.posting_repo.find_all().await?;
        self.views_of(postings).await
    }

    async fn get_open(&self) -> Result<Vec<JobPostingView>, AppError> {
        let postings = self.posting_repo.find_open().await?;
        self.views_of(postings).await
    }

    async fn get(&self, id: i32) -> Result<JobPostingView, AppError> {
        let posting = self
            .posting_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Job posting not found with id: {}", id)))?;

        self.view_of(posting).await
    }

    async fn get_by_plan(&self, plan_id: i32) -> Result<JobPostingView, AppError> {
        let posting = self
            .posting_repo
            .find_by_plan(plan_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("No job posting for plan with id: {}", plan_id))
            })?;

        self.view_of(posting).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::job_position::MockJobPositionRepository;
    use crate::domain::entities::job_posting::MockJobPostingRepository;
    use crate::domain::entities::recruitment_plan::MockPlanRepository;
    use crate::domain::{plan_status, PostingStatus, RecruitmentPlan};
    use chrono::NaiveDate;

    fn sample_posting(id: i32, plan_id: i32) -> JobPosting {
        JobPosting {
            id,
            title: "We are hiring".to_string(),
            deadline: NaiveDate::from_ymd_opt(2025, 12, 31).unwrap(),
            created_date: NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(),
            status: PostingStatus::Open,
            plan_id,
            created_by: 30,
        }
    }

    fn sample_plan(id: i32) -> RecruitmentPlan {
        RecruitmentPlan {
            id,
            title: "Fall plan".to_string(),
            created_date: NaiveDate::from_ymd_opt(2025, 8, 1).unwrap(),
            status: plan_status::APPROVED.to_string(),
            quantity: 4,
            cpa: 3.25,
            position: "Lecturer".to_string(),
            school: "School of Arts".to_string(),
            approval_date: Some(NaiveDate::from_ymd_opt(2025, 8, 15).unwrap()),
            reject_reason: None,
            created_by: 10,
            approved_by: Some(20),
        }
    }

    #[tokio::test]
    async fn test_view_embeds_plan_details_and_first_position() {
        let mut postings = MockJobPostingRepository::new();
        postings
            .expect_find_by_id()
            .returning(|id| Ok(Some(sample_posting(id, 3))));

        let mut plans = MockPlanRepository::new();
        plans
            .expect_find_by_id()
            .returning(|id| Ok(Some(sample_plan(id))));

        let mut positions = MockJobPositionRepository::new();
        positions.expect_find_by_plan().returning(|plan_id| {
            Ok(vec![
                JobPosition {
                    id: 71,
                    title: "Slot A".to_string(),
                    position: "Lecturer".to_string(),
                    plan_id,
                },
                JobPosition {
                    id: 72,
                    title: "Slot B".to_string(),
                    position: "Lecturer".to_string(),
                    plan_id,
                },
            ])
        });

        let service =
            JobPostingServiceImpl::new(Arc::new(postings), Arc::new(plans), Arc::new(positions));
        let view = service.get(1).await.expect("get should succeed");

        assert_eq!(view.school, "School of Arts");
        assert_eq!(view.quantity, 4);
        assert_eq!(view.required_cpa, 3.25);
        assert_eq!(view.position_id, Some(71));
    }

    #[tokio::test]
    async fn test_missing_posting_is_not_found() {
        let mut postings = MockJobPostingRepository::new();
        postings.expect_find_by_id().returning(|_| Ok(None));

        let plans = MockPlanRepository::new();
        let positions = MockJobPositionRepository::new();

        let service =
            JobPostingServiceImpl::new(Arc::new(postings), Arc::new(plans), Arc::new(positions));
        let err = service.get(404).await.expect_err("get must fail");

        assert!(matches!(err, AppError::NotFound(_)));
    }
}
