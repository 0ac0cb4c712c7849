//! Application Repository Implementation
//!
//! PostgreSQL implementation of the ApplicationRepository trait.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;

use crate::domain::{Application, ApplicationRepository, NewApplication};
use crate::shared::error::AppError;

/// Database row representation matching the `applications` table schema.
#[derive(Debug, sqlx::FromRow)]
struct ApplicationRow {
    id: i32,
    apply_date: NaiveDate,
    status: String,
    rejection_reason: Option<String>,
    candidate_id: i32,
    position_id: i32,
}

impl ApplicationRow {
    /// Convert database row to domain Application entity.
    fn into_application(self) -> Application {
        Application {
            id: self.id,
            apply_date: self.apply_date,
            status: self.status,
            rejection_reason: self.rejection_reason,
            candidate_id: self.candidate_id,
            position_id: self.position_id,
        }
    }
}

/// PostgreSQL application repository implementation.
#[derive(Clone)]
pub struct PgApplicationRepository {
    pool: PgPool,
}

impl PgApplicationRepository {
    /// Create a new PgApplicationRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ApplicationRepository for PgApplicationRepository {
    async fn find_all(&self) -> Result<Vec<Application>, AppError> {
        let rows = sqlx::query_as::<_, ApplicationRow>(
            r#"
            SELECT id, apply_date, status, rejection_reason, candidate_id, position_id
            FROM applications
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_application()).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Application>, AppError> {
        let row = sqlx::query_as::<_, ApplicationRow>(
            r#"
            SELECT id, apply_date, status, rejection_reason, candidate_id, position_id
            FROM applications
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_application()))
    }

    async fn find_by_status(&self, status: &str) -> Result<Vec<Application>, AppError> {
        let rows = sqlx::query_as::<_, ApplicationRow>(
            r#"
            SELECT id, apply_date, status, rejection_reason, candidate_id, position_id
            FROM applications
            WHERE status = $1
            ORDER BY id
            "#,
        )
        .bind(status)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_application()).collect())
    }

    async fn create(&self, application: &NewApplication) -> Result<Application, AppError> {
        let row = sqlx::query_as::<_, ApplicationRow>(
            r#"
            INSERT INTO applications (apply_date, status, candidate_id, position_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, apply_date, status, rejection_reason, candidate_id, position_id
            "#,
        )
        .bind(application.apply_date)
        .bind(&application.status)
        .bind(application.candidate_id)
        .bind(application.position_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_application())
    }

    async fn update(&self, application: &Application) -> Result<Application, AppError> {
        let row = sqlx::query_as::<_, ApplicationRow>(
            r#"
            UPDATE applications
            SET status = $2,
                rejection_reason = $3
            WHERE id = $1
            RETURNING id, apply_date, status, rejection_reason, candidate_id, position_id
            "#,
        )
        .bind(application.id)
        .bind(&application.status)
        .bind(&application.rejection_reason)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!("Application with id {} not found", application.id))
        })?;

        Ok(row.into_application())
    }

    async fn delete_by_candidate(&self, candidate_id: i32) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM applications WHERE candidate_id = $1")
            .bind(candidate_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
