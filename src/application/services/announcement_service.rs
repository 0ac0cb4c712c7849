//! Announcement Service
//!
//! Recruitment announcements published by personnel managers; the public
//! landing page lists the active ones.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::{
    Announcement, AnnouncementRepository, NewAnnouncement, PlanRepository, UserRepository,
};
use crate::shared::error::AppError;

/// Announcement creation/update data as accepted by the service
#[derive(Debug, Clone)]
pub struct AnnouncementDto {
    pub title: String,
    pub content: String,
    pub plan_id: Option<i32>,
}

/// Announcement read view with the author's username resolved
#[derive(Debug, Clone)]
pub struct AnnouncementView {
    pub announcement: Announcement,
    pub created_by_username: Option<String>,
}

/// Announcement service trait
#[async_trait]
pub trait AnnouncementService: Send + Sync {
    /// Active announcements, newest first (public landing page).
    async fn get_active(&self) -> Result<Vec<AnnouncementView>, AppError>;

    /// All announcements (staff listing).
    async fn get_all(&self) -> Result<Vec<AnnouncementView>, AppError>;

    /// Publish a new announcement.
    async fn create(&self, dto: AnnouncementDto, author_id: i32)
        -> Result<AnnouncementView, AppError>;

    /// Update an announcement's title and content.
    async fn update(&self, id: i32, dto: AnnouncementDto) -> Result<AnnouncementView, AppError>;

    /// Delete an announcement (hard delete).
    async fn delete(&self, id: i32) -> Result<(), AppError>;

    /// Whether the given plan already has an announcement.
    async fn is_plan_announced(&self, plan_id: i32) -> Result<bool, AppError>;
}

/// AnnouncementService implementation
pub struct AnnouncementServiceImpl<A, P, U>
where
    A: AnnouncementRepository,
    P: PlanRepository,
    U: UserRepository,
{
    announcement_repo: Arc<A>,
    plan_repo: Arc<P>,
    user_repo: Arc<U>,
}

impl<A, P, U> AnnouncementServiceImpl<A, P, U>
where
    A: AnnouncementRepository,
    P: PlanRepository,
    U: UserRepository,
{
    pub fn new(announcement_repo: Arc<A>, plan_repo: Arc<P>, user_repo: Arc<U>) -> Self {
        Self {
            announcement_repo,
            plan_repo,
            user_repo,
        }
    }

    async fn view_of(&self, announcement: Announcement) -> Result<AnnouncementView, AppError> {
        let created_by_username = self
            .user_repo
            .find_by_id(announcement.created_by)
            .await?
            .map(|u| u.username);

        Ok(AnnouncementView {
            announcement,
            created_by_username,
        })
    }

    async fn views_of(
        &self,
        announcements: Vec<Announcement>,
    ) -> Result<Vec<AnnouncementView>, AppError> {
        let mut views = Vec::with_capacity(announcements.len());
        for announcement in announcements {
            views.push(self.view_of(announcement).await?);
        }
        Ok(views)
    }
}

#[async_trait]
impl<A, P, U> AnnouncementService for AnnouncementServiceImpl<A, P, U>
where
    A: AnnouncementRepository + 'static,
    P: PlanRepository + 'static,
    U: UserRepository + 'static,
{
    async fn get_active(&self) -> Result<Vec<AnnouncementView>, AppError> {
        let announcements = self.announcement_repo.find_active().await?;
        self.views_of(announcements).await
    }

    async fn get_all(&self) -> Result<Vec<AnnouncementView>, AppError> {
        let announcements = self.announcement_repo.find_all().await?;
        self.views_of(announcements).await
    }

    async fn create(
        &self,
        dto: AnnouncementDto,
        author_id: i32,
    ) -> Result<AnnouncementView, AppError> {
        // A plan may be announced at most once
        if let Some(plan_id) = dto.plan_id {
            if !self.plan_repo.exists(plan_id).await? {
                return Err(AppError::NotFound(format!(
                    "Plan not found with id: {}",
                    plan_id
                )));
            }
            if self.announcement_repo.exists_for_plan(plan_id).await? {
                return Err(AppError::Conflict(
                    "This plan has already been announced".to_string(),
                ));
            }
        }

        let announcement = self
            .announcement_repo
            .create(&NewAnnouncement {
                title: dto.title,
                content: dto.content,
                created_at: Utc::now(),
                is_active: true,
                created_by: author_id,
                plan_id: dto.plan_id,
            })
            .await?;

        tracing::info!(
            announcement_id = announcement.id,
            author_id,
            "Announcement published"
        );
        self.view_of(announcement).await
    }

    async fn update(&self, id: i32, dto: AnnouncementDto) -> Result<AnnouncementView, AppError> {
        let mut announcement = self
            .announcement_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Announcement not found with id: {}", id)))?;

        announcement.title = dto.title;
        announcement.content = dto.content;

        let updated = self.announcement_repo.update(&announcement).await?;
        self.view_of(updated).await
    }

    async fn delete(&self, id: i32) -> Result<(), AppError> {
        self.announcement_repo.delete(id).await
    }

    async fn is_plan_announced(&self, plan_id: i32) -> Result<bool, AppError> {
        self.announcement_repo.exists_for_plan(plan_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::announcement::MockAnnouncementRepository;
    use crate::domain::entities::recruitment_plan::MockPlanRepository;
    use crate::domain::entities::user::MockUserRepository;
    use crate::domain::{User, UserRole};
    use chrono::NaiveDate;

    fn sample_dto(plan_id: Option<i32>) -> AnnouncementDto {
        AnnouncementDto {
            title: "Hiring lecturers".to_string(),
            content: "Apply before the deadline.".to_string(),
            plan_id,
        }
    }

    fn hr_user(id: i32) -> User {
        User {
            id,
            username: "hr".to_string(),
            password_hash: "hash".to_string(),
            full_name: "HR Staff".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1985, 3, 3).unwrap(),
            phone_number: "0911111111".to_string(),
            email: "hr@example.edu".to_string(),
            address: "Campus".to_string(),
            role: UserRole::PersonnelManager,
            sex: "Other".to_string(),
        }
    }

    #[tokio::test]
    async fn test_already_announced_plan_is_a_conflict() {
        let mut announcements = MockAnnouncementRepository::new();
        announcements
            .expect_exists_for_plan()
            .returning(|_| Ok(true));
        announcements.expect_create().never();

        let mut plans = MockPlanRepository::new();
        plans.expect_exists().returning(|_| Ok(true));

        let users = MockUserRepository::new();

        let service =
            AnnouncementServiceImpl::new(Arc::new(announcements), Arc::new(plans), Arc::new(users));
        let err = service
            .create(sample_dto(Some(3)), 30)
            .await
            .expect_err("create must be refused");

        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_create_without_plan_skips_plan_checks() {
        let mut announcements = MockAnnouncementRepository::new();
        announcements.expect_exists_for_plan().never();
        announcements.expect_create().times(1).returning(|new| {
            Ok(Announcement {
                id: 1,
                title: new.title.clone(),
                content: new.content.clone(),
                created_at: new.created_at,
                is_active: new.is_active,
                created_by: new.created_by,
                plan_id: new.plan_id,
            })
        });

        let mut plans = MockPlanRepository::new();
        plans.expect_exists().never();

        let mut users = MockUserRepository::new();
        users
            .expect_find_by_id()
            .returning(|id| Ok(Some(hr_user(id))));

        let service =
            AnnouncementServiceImpl::new(Arc::new(announcements), Arc::new(plans), Arc::new(users));
        let view = service
            .create(sample_dto(None), 30)
            .await
            .expect("create should succeed");

        assert!(view.announcement.is_active);
        assert_eq!(view.created_by_username.as_deref(), Some("hr"));
    }

    #[tokio::test]
    async fn test_create_for_missing_plan_is_not_found() {
        let mut announcements = MockAnnouncementRepository::new();
        announcements.expect_create().never();

        let mut plans = MockPlanRepository::new();
        plans.expect_exists().returning(|_| Ok(false));

        let users = MockUserRepository::new();

        let service =
            AnnouncementServiceImpl::new(Arc::new(announcements), Arc::new(plans), Arc::new(users));
        let err = service
            .create(sample_dto(Some(404)), 30)
            .await
            .expect_err("create must fail");

        assert!(matches!(err, AppError::NotFound(_)));
    }
}
