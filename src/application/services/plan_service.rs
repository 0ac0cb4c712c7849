//! Recruitment Plan Service
//!
//! Plan CRUD and the approval workflow (unit manager creates, rector
//! decides).

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};

use crate::domain::{plan_status, NewPlan, PlanRepository, RecruitmentPlan, UserRepository};
use crate::shared::error::AppError;

/// Plan creation data as accepted by the service
#[derive(Debug, Clone)]
pub struct CreatePlanDto {
    pub title: String,
    pub position: String,
    pub school: String,
    pub quantity: i32,
    pub cpa: f32,
    pub created_date: Option<NaiveDate>,
}

/// Plan partial-update data; `None` fields are left unchanged
#[derive(Debug, Clone, Default)]
pub struct UpdatePlanDto {
    pub title: Option<String>,
    pub position: Option<String>,
    pub school: Option<String>,
    pub quantity: Option<i32>,
    pub cpa: Option<f32>,
    pub status: Option<String>,
    pub approval_date: Option<NaiveDate>,
}

/// Plan read view with creator/approver usernames resolved
#[derive(Debug, Clone)]
pub struct PlanView {
    pub plan: RecruitmentPlan,
    pub created_by_username: Option<String>,
    pub approved_by_username: Option<String>,
}

/// Plan service trait
#[async_trait]
pub trait PlanService: Send + Sync {
    /// List all plans.
    async fn get_all(&self) -> Result<Vec<PlanView>, AppError>;

    /// Fetch a plan by id.
    async fn get(&self, id: i32) -> Result<PlanView, AppError>;

    /// Fetch a plan only when it has been approved (public application form).
    async fn get_approved(&self, id: i32) -> Result<PlanView, AppError>;

    /// Create a plan with status `Pending`.
    async fn create(&self, dto: CreatePlanDto, creator_id: i32) -> Result<PlanView, AppError>;

    /// Partially update a plan.
    async fn update(&self, id: i32, dto: UpdatePlanDto) -> Result<PlanView, AppError>;

    /// Approve a plan, stamping the decision date and approver.
    async fn approve(&self, id: i32, approver_id: i32) -> Result<PlanView, AppError>;

    /// Reject a plan, stamping the decision date, approver, and optional reason.
    async fn reject(
        &self,
        id: i32,
        reason: Option<String>,
        approver_id: i32,
    ) -> Result<PlanView, AppError>;

    /// Delete a plan; dependent records surface as `Conflict`.
    async fn delete(&self, id: i32) -> Result<(), AppError>;

    /// Permanently delete a decided plan (`Approved`/`Rejected` only).
    async fn delete_permanent(&self, id: i32) -> Result<(), AppError>;
}

/// PlanService implementation
pub struct PlanServiceImpl<P, U>
where
    P: PlanRepository,
    U: UserRepository,
{
    plan_repo: Arc<P>,
    user_repo: Arc<U>,
}

impl<P, U> PlanServiceImpl<P, U>
where
    P: PlanRepository,
    U: UserRepository,
{
    pub fn new(plan_repo: Arc<P>, user_repo: Arc<U>) -> Self {
        Self {
            plan_repo,
            user_repo,
        }
    }

    async fn username_of(&self, user_id: Option<i32>) -> Result<Option<String>, AppError> {
        match user_id {
            Some(id) => Ok(self.user_repo.find_by_id(id).await?.map(|u| u.username)),
            None => Ok(None),
        }
    }

    async fn view_of(&self, plan: RecruitmentPlan) -> Result<PlanView, AppError> {
        let created_by_username = self.username_of(Some(plan.created_by)).await?;
        let approved_by_username = self.username_of(plan.approved_by).await?;

        Ok(PlanView {
            plan,
            created_by_username,
            approved_by_username,
        })
    }

    async fn fetch(&self, id: i32) -> Result<RecruitmentPlan, AppError> {
        self.plan_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Plan not found with id: {}", id)))
    }
}

#[async_trait]
impl<P, U> PlanService for PlanServiceImpl<P, U>
where
    P: PlanRepository + 'static,
    U: UserRepository + 'static,
{
    async fn get_all(&self) -> Result<Vec<PlanView>, AppError> {
        let plans = self.plan_repo.find_all().await?;

        let mut views = Vec::with_capacity(plans.len());
        for plan in plans {
            views.push(self.view_of(plan).await?);
        }
        Ok(views)
    }

    async fn get(&self, id: i32) -> Result<PlanView, AppError> {
        let plan = self.fetch(id).await?;
        self.view_of(plan).await
    }

    async fn get_approved(&self, id: i32) -> Result<PlanView, AppError> {
        let plan = self.fetch(id).await?;
        if plan.status != plan_status::APPROVED {
            return Err(AppError::NotFound(format!("Plan not found with id: {}", id)));
        }
        self.view_of(plan).await
    }

    async fn create(&self, dto: CreatePlanDto, creator_id: i32) -> Result<PlanView, AppError> {
        let plan = self
            .plan_repo
            .create(&NewPlan {
                title: dto.title,
                position: dto.position,
                school: dto.school,
                quantity: dto.quantity,
                cpa: dto.cpa,
                created_date: dto.created_date.unwrap_or_else(|| Utc::now().date_naive()),
                status: plan_status::PENDING.to_string(),
                created_by: creator_id,
            })
            .await?;

        tracing::info!(plan_id = plan.id, creator_id, "Recruitment plan created");
        self.view_of(plan).await
    }

    async fn update(&self, id: i32, dto: UpdatePlanDto) -> Result<PlanView, AppError> {
        let mut plan = self.fetch(id).await?;

        if let Some(title) = dto.title {
            plan.title = title;
        }
        if let Some(position) = dto.position {
            plan.position = position;
        }
        if let Some(school) = dto.school {
            plan.school = school;
        }
        if let Some(quantity) = dto.quantity {
            plan.quantity = quantity;
        }
        if let Some(cpa) = dto.cpa {
            plan.cpa = cpa;
        }
        if let Some(status) = dto.status {
            plan.status = status;
        }
        if let Some(approval_date) = dto.approval_date {
            plan.approval_date = Some(approval_date);
        }

        let updated = self.plan_repo.update(&plan).await?;
        self.view_of(updated).await
    }

    async fn approve(&self, id: i32, approver_id: i32) -> Result<PlanView, AppError> {
        let mut plan = self.fetch(id).await?;

        plan.status = plan_status::APPROVED.to_string();
        plan.approval_date = Some(Utc::now().date_naive());
        plan.approved_by = Some(approver_id);

        let updated = self.plan_repo.update(&plan).await?;
        tracing::info!(plan_id = id, approver_id, "Recruitment plan approved");
        self.view_of(updated).await
    }

    async fn reject(
        &self,
        id: i32,
        reason: Option<String>,
        approver_id: i32,
    ) -> Result<PlanView, AppError> {
        let mut plan = self.fetch(id).await?;

        plan.status = plan_status::REJECTED.to_string();
        plan.approval_date = Some(Utc::now().date_naive());
        plan.approved_by = Some(approver_id);
        if let Some(reason) = reason {
            plan.reject_reason = Some(reason);
        }

        let updated = self.plan_repo.update(&plan).await?;
        tracing::info!(plan_id = id, approver_id, "Recruitment plan rejected");
        self.view_of(updated).await
    }

    async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !self.plan_repo.exists(id).await? {
            return Err(AppError::NotFound(format!("Plan not found with id: {}", id)));
        }
        self.plan_repo.delete(id).await
    }

    async fn delete_permanent(&self, id: i32) -> Result<(), AppError> {
        let plan = self.fetch(id).await?;

        if !plan.is_decided() {
            return Err(AppError::Forbidden(
                "Only approved or rejected plans can be permanently deleted".to_string(),
            ));
        }

        self.plan_repo.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::recruitment_plan::MockPlanRepository;
    use crate::domain::entities::user::MockUserRepository;
    use crate::domain::{User, UserRole};

    fn sample_plan(id: i32, status: &str) -> RecruitmentPlan {
        RecruitmentPlan {
            id,
            title: "Spring hiring".to_string(),
            created_date: NaiveDate::from_ymd_opt(2025, 2, 1).unwrap(),
            status: status.to_string(),
            quantity: 2,
            cpa: 3.0,
            position: "Lecturer".to_string(),
            school: "School of Science".to_string(),
            approval_date: None,
            reject_reason: None,
            created_by: 10,
            approved_by: None,
        }
    }

    fn sample_user(id: i32, username: &str) -> User {
        User {
            id,
            username: username.to_string(),
            password_hash: "hash".to_string(),
            full_name: "Some User".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1980, 1, 1).unwrap(),
            phone_number: format!("09000000{:02}", id),
            email: format!("{}@example.edu", username),
            address: "Campus".to_string(),
            role: UserRole::UnitManager,
            sex: "Other".to_string(),
        }
    }

    #[tokio::test]
    async fn test_approve_stamps_date_and_approver() {
        let mut plans = MockPlanRepository::new();
        plans
            .expect_find_by_id()
            .returning(|id| Ok(Some(sample_plan(id, plan_status::PENDING))));
        plans
            .expect_update()
            .withf(|plan: &RecruitmentPlan| {
                plan.status == plan_status::APPROVED
                    && plan.approval_date.is_some()
                    && plan.approved_by == Some(20)
            })
            .times(1)
            .returning(|plan| Ok(plan.clone()));

        let mut users = MockUserRepository::new();
        users
            .expect_find_by_id()
            .returning(|id| Ok(Some(sample_user(id, "someone"))));

        let service = PlanServiceImpl::new(Arc::new(plans), Arc::new(users));
        let view = service.approve(1, 20).await.expect("approve should succeed");

        assert_eq!(view.plan.status, plan_status::APPROVED);
        assert_eq!(view.approved_by_username.as_deref(), Some("someone"));
    }

    #[tokio::test]
    async fn test_reject_stores_reason() {
        let mut plans = MockPlanRepository::new();
        plans
            .expect_find_by_id()
            .returning(|id| Ok(Some(sample_plan(id, plan_status::PENDING))));
        plans
            .expect_update()
            .withf(|plan: &RecruitmentPlan| {
                plan.status == plan_status::REJECTED
                    && plan.reject_reason.as_deref() == Some("Budget cut")
            })
            .returning(|plan| Ok(plan.clone()));

        let mut users = MockUserRepository::new();
        users
            .expect_find_by_id()
            .returning(|id| Ok(Some(sample_user(id, "rector"))));

        let service = PlanServiceImpl::new(Arc::new(plans), Arc::new(users));
        let view = service
            .reject(1, Some("Budget cut".to_string()), 20)
            .await
            .expect("reject should succeed");

        assert_eq!(view.plan.reject_reason.as_deref(), Some("Budget cut"));
    }

    #[tokio::test]
    async fn test_permanent_delete_requires_decided_plan() {
        let mut plans = MockPlanRepository::new();
        plans
            .expect_find_by_id()
            .returning(|id| Ok(Some(sample_plan(id, plan_status::PENDING))));
        plans.expect_delete().never();

        let users = MockUserRepository::new();

        let service = PlanServiceImpl::new(Arc::new(plans), Arc::new(users));
        let err = service
            .delete_permanent(1)
            .await
            .expect_err("delete must be refused");

        assert!(matches!(err, AppError::Forbidden(_)));
    }

    #[tokio::test]
    async fn test_get_approved_hides_pending_plans() {
        let mut plans = MockPlanRepository::new();
        plans
            .expect_find_by_id()
            .returning(|id| Ok(Some(sample_plan(id, plan_status::PENDING))));

        let users = MockUserRepository::new();

        let service = PlanServiceImpl::new(Arc::new(plans), Arc::new(users));
        let err = service.get_approved(1).await.expect_err("must be hidden");

        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_partial_update_keeps_absent_fields() {
        let mut plans = MockPlanRepository::new();
        plans
            .expect_find_by_id()
            .returning(|id| Ok(Some(sample_plan(id, plan_status::PENDING))));
        plans
            .expect_update()
            .withf(|plan: &RecruitmentPlan| {
                plan.quantity == 5 && plan.title == "Spring hiring" && plan.cpa == 3.0
            })
            .returning(|plan| Ok(plan.clone()));

        let mut users = MockUserRepository::new();
        users
            .expect_find_by_id()
            .returning(|id| Ok(Some(sample_user(id, "um"))));

        let service = PlanServiceImpl::new(Arc::new(plans), Arc::new(users));
        let view = service
            .update(
                1,
                UpdatePlanDto {
                    quantity: Some(5),
                    ..Default::default()
                },
            )
            .await
            .expect("update should succeed");

        assert_eq!(view.plan.quantity, 5);
    }
}
