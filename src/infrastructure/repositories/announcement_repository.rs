//! Announcement Repository Implementation

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::{Announcement, AnnouncementRepository, NewAnnouncement};
use crate::shared::error::AppError;

/// Database row representation matching the `announcements` table schema.
#[derive(Debug, sqlx::FromRow)]
struct AnnouncementRow {
    id: i32,
    title: String,
    content: String,
    created_at: DateTime<Utc>,
    is_active: bool,
    created_by: i32,
    plan_id: Option<i32>,
}

impl AnnouncementRow {
    fn into_announcement(self) -> Announcement {
        Announcement {
            id: self.id,
            title: self.title,
            content: self.content,
            created_at: self.created_at,
            is_active: self.is_active,
            created_by: self.created_by,
            plan_id: self.plan_id,
        }
    }
}

/// PostgreSQL announcement repository implementation.
#[derive(Clone)]
pub struct PgAnnouncementRepository {
    pool: PgPool,
}

impl PgAnnouncementRepository {
    /// Create a new PgAnnouncementRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AnnouncementRepository for PgAnnouncementRepository {
    async fn find_all(&self) -> Result<Vec<Announcement>, AppError> {
        let rows = sqlx::query_as::<_, AnnouncementRow>(
            r#"
            SELECT id, title, content, created_at, is_active, created_by, plan_id
            FROM announcements
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_announcement()).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Announcement>, AppError> {
        let row = sqlx::query_as::<_, AnnouncementRow>(
            r#"
            SELECT id, title, content, created_at, is_active, created_by, plan_id
            FROM announcements
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_announcement()))
    }

    async fn find_active(&self) -> Result<Vec<Announcement>, AppError> {
        let rows = sqlx::query_as::<_, AnnouncementRow>(
            r#"
            SELECT id, title, content, created_at, is_active, created_by, plan_id
            FROM announcements
            WHERE is_active
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_announcement()).collect())
    }

    async fn create(&self, announcement: &NewAnnouncement) -> Result<Announcement, AppError> {
        let row = sqlx::query_as::<_, AnnouncementRow>(
            r#"
            INSERT INTO announcements (title, content, created_at, is_active, created_by, plan_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, title, content, created_at, is_active, created_by, plan_id
            "#,
        )
        .bind(&announcement.title)
        .bind(&announcement.content)
        .bind(announcement.created_at)
        .bind(announcement.is_active)
        .bind(announcement.created_by)
        .bind(announcement.plan_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_announcement())
    }

    async fn update(&self, announcement: &Announcement) -> Result<Announcement, AppError> {
        let row = sqlx::query_as::<_, AnnouncementRow>(
            r#"
            UPDATE announcements
            SET title = $2,
                content = $3,
                is_active = $4
            WHERE id = $1
            RETURNING id, title, content, created_at, is_active, created_by, plan_id
            "#,
        )
        .bind(announcement.id)
        .bind(&announcement.title)
        .bind(&announcement.content)
        .bind(announcement.is_active)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!("Announcement with id {} not found", announcement.id))
        })?;

        Ok(row.into_announcement())
    }

    async fn delete(&self, id: i32) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM announcements WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Announcement with id {} not found",
                id
            )));
        }

        Ok(())
    }

    async fn exists_for_plan(&self, plan_id: i32) -> Result<bool, AppError> {
        let result = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM announcements WHERE plan_id = $1)",
        )
        .bind(plan_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(result)
    }
}
