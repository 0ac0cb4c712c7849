//! JobPosition Repository Implementation

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::{JobPosition, JobPositionRepository};
use crate::shared::error::AppError;

/// Database row representation matching the `job_positions` table schema.
#[derive(Debug, sqlx::FromRow)]
struct JobPositionRow {
    id: i32,
    title: String,
    position: String,
    plan_id: i32,
}

impl JobPositionRow {
    fn into_position(self) -> JobPosition {
        JobPosition {
            id: self.id,
            title: self.title,
            position: self.position,
            plan_id: self.plan_id,
        }
    }
}

/// PostgreSQL job position repository implementation.
#[derive(Clone)]
pub struct PgJobPositionRepository {
    pool: PgPool,
}

impl PgJobPositionRepository {
    /// Create a new PgJobPositionRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl JobPositionRepository for PgJobPositionRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<JobPosition>, AppError> {
        let row = sqlx::query_as::<_, JobPositionRow>(
            "SELECT id, title, position, plan_id FROM job_positions WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_position()))
    }

    async fn find_first(&self) -> Result<Option<JobPosition>, AppError> {
        let row = sqlx::query_as::<_, JobPositionRow>(
            "SELECT id, title, position, plan_id FROM job_positions ORDER BY id LIMIT 1",
        )
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_position()))
    }

    async fn find_by_plan(&self, plan_id: i32) -> Result<Vec<JobPosition>, AppError> {
        let rows = sqlx::query_as::<_, JobPositionRow>(
            "SELECT id, title, position, plan_id FROM job_positions WHERE plan_id = $1 ORDER BY id",
        )
        .bind(plan_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_position()).collect())
    }
}
