//! JobPosting Repository Implementation

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;

use crate::domain::{JobPosting, JobPostingRepository, PostingStatus};
use crate::shared::error::AppError;

/// Database row representation matching the `job_postings` table schema.
#[derive(Debug, sqlx::FromRow)]
struct JobPostingRow {
    id: i32,
    title: String,
    deadline: NaiveDate,
    created_date: NaiveDate,
    status: String,
    plan_id: i32,
    created_by: i32,
}

impl JobPostingRow {
    fn into_posting(self) -> JobPosting {
        JobPosting {
            id: self.id,
            title: self.title,
            deadline: self.deadline,
            created_date: self.created_date,
            status: PostingStatus::from_str(&self.status),
            plan_id: self.plan_id,
            created_by: self.created_by,
        }
    }
}

/// PostgreSQL job posting repository implementation.
#[derive(Clone)]
pub struct PgJobPostingRepository {
    pool: PgPool,
}

impl PgJobPostingRepository {
    /// Create a new PgJobPostingRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl JobPostingRepository for PgJobPostingRepository {
    async fn find_all(&self) -> Result<Vec<JobPosting>, AppError> {
        let rows = sqlx::query_as::<_, JobPostingRow>(
            r#"
            SELECT id, title, deadline, created_date, status, plan_id, created_by
            FROM job_postings
            ORDER BY created_date DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_posting()).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<JobPosting>, AppError> {
        let row = sqlx::query_as::<_, JobPostingRow>(
            r#"
            SELECT id, title, deadline, created_date, status, plan_id, created_by
            FROM job_postings
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_posting()))
    }

    async fn find_open(&self) -> Result<Vec<JobPosting>, AppError> {
        let rows = sqlx::query_as::<_, JobPostingRow>(
            r#"
            SELECT id, title, deadline, created_date, status, plan_id, created_by
            FROM job_postings
            WHERE status = $1
            ORDER BY created_date DESC, id DESC
            "#,
        )
        .bind(PostingStatus::Open.as_str())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_posting()).collect())
    }

    async fn find_by_plan(&self, plan_id: i32) -> Result<Option<JobPosting>, AppError> {
        let row = sqlx::query_as::<_, JobPostingRow>(
            r#"
            SELECT id, title, deadline, created_date, status, plan_id, created_by
            FROM job_postings
            WHERE plan_id = $1
            "#,
        )
        .bind(plan_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_posting()))
    }
}
