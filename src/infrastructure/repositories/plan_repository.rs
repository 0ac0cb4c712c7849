//! RecruitmentPlan Repository Implementation

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;

use crate::domain::{NewPlan, PlanRepository, RecruitmentPlan};
use crate::shared::error::AppError;

/// Database row representation matching the `recruitment_plans` table schema.
#[derive(Debug, sqlx::FromRow)]
struct PlanRow {
    id: i32,
    title: String,
    created_date: NaiveDate,
    status: String,
    quantity: i32,
    cpa: f32,
    position: String,
    school: String,
    approval_date: Option<NaiveDate>,
    reject_reason: Option<String>,
    created_by: i32,
    approved_by: Option<i32>,
}

impl PlanRow {
    fn into_plan(self) -> RecruitmentPlan {
        RecruitmentPlan {
            id: self.id,
            title: self.title,
            created_date: self.created_date,
            status: self.status,
            quantity: self.quantity,
            cpa: self.cpa,
            position: self.position,
            school: self.school,
            approval_date: self.approval_date,
            reject_reason: self.reject_reason,
            created_by: self.created_by,
            approved_by: self.approved_by,
        }
    }
}

const PLAN_COLUMNS: &str = "id, title, created_date, status, quantity, cpa, position, school, \
                            approval_date, reject_reason, created_by, approved_by";

/// PostgreSQL recruitment plan repository implementation.
#[derive(Clone)]
pub struct PgPlanRepository {
    pool: PgPool,
}

impl PgPlanRepository {
    /// Create a new PgPlanRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PlanRepository for PgPlanRepository {
    async fn find_all(&self) -> Result<Vec<RecruitmentPlan>, AppError> {
        let rows = sqlx::query_as::<_, PlanRow>(&format!(
            "SELECT {PLAN_COLUMNS} FROM recruitment_plans ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_plan()).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<RecruitmentPlan>, AppError> {
        let row = sqlx::query_as::<_, PlanRow>(&format!(
            "SELECT {PLAN_COLUMNS} FROM recruitment_plans WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_plan()))
    }

    async fn create(&self, plan: &NewPlan) -> Result<RecruitmentPlan, AppError> {
        let row = sqlx::query_as::<_, PlanRow>(&format!(
            r#"
            INSERT INTO recruitment_plans (title, position, school, quantity, cpa,
                                           created_date, status, created_by)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {PLAN_COLUMNS}
            "#
        ))
        .bind(&plan.title)
        .bind(&plan.position)
        .bind(&plan.school)
        .bind(plan.quantity)
        .bind(plan.cpa)
        .bind(plan.created_date)
        .bind(&plan.status)
        .bind(plan.created_by)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_plan())
    }

    async fn update(&self, plan: &RecruitmentPlan) -> Result<RecruitmentPlan, AppError> {
        let row = sqlx::query_as::<_, PlanRow>(&format!(
            r#"
            UPDATE recruitment_plans
            SET title = $2,
                position = $3,
                school = $4,
                quantity = $5,
                cpa = $6,
                status = $7,
                approval_date = $8,
                reject_reason = $9,
                approved_by = $10
            WHERE id = $1
            RETURNING {PLAN_COLUMNS}
            "#
        ))
        .bind(plan.id)
        .bind(&plan.title)
        .bind(&plan.position)
        .bind(&plan.school)
        .bind(plan.quantity)
        .bind(plan.cpa)
        .bind(&plan.status)
        .bind(plan.approval_date)
        .bind(&plan.reject_reason)
        .bind(plan.approved_by)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Plan with id {} not found", plan.id)))?;

        Ok(row.into_plan())
    }

    async fn delete(&self, id: i32) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM recruitment_plans WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| match &e {
                sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
                    AppError::Conflict(
                        "Plan cannot be deleted because dependent records reference it"
                            .to_string(),
                    )
                }
                _ => AppError::Database(e),
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Plan with id {} not found", id)));
        }

        Ok(())
    }

    async fn exists(&self, id: i32) -> Result<bool, AppError> {
        let result = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM recruitment_plans WHERE id = $1)",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(result)
    }
}
