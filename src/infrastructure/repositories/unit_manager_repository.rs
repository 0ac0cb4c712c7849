//! UnitManager Profile Repository Implementation

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::{UnitManagerProfile, UnitManagerRepository};
use crate::shared::error::AppError;

/// Database row representation matching the `unit_manager_profiles` table.
#[derive(Debug, sqlx::FromRow)]
struct UnitManagerRow {
    user_id: i32,
    department: String,
    position: String,
}

impl UnitManagerRow {
    fn into_profile(self) -> UnitManagerProfile {
        UnitManagerProfile {
            user_id: self.user_id,
            department: self.department,
            position: self.position,
        }
    }
}

/// PostgreSQL unit-manager profile repository implementation.
#[derive(Clone)]
pub struct PgUnitManagerRepository {
    pool: PgPool,
}

impl PgUnitManagerRepository {
    /// Create a new PgUnitManagerRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UnitManagerRepository for PgUnitManagerRepository {
    async fn find_by_user_id(&self, user_id: i32) -> Result<Option<UnitManagerProfile>, AppError> {
        let row = sqlx::query_as::<_, UnitManagerRow>(
            "SELECT user_id, department, position FROM unit_manager_profiles WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_profile()))
    }

    async fn create(&self, profile: &UnitManagerProfile) -> Result<UnitManagerProfile, AppError> {
        let row = sqlx::query_as::<_, UnitManagerRow>(
            r#"
            INSERT INTO unit_manager_profiles (user_id, department, position)
            VALUES ($1, $2, $3)
            RETURNING user_id, department, position
            "#,
        )
        .bind(profile.user_id)
        .bind(&profile.department)
        .bind(&profile.position)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_profile())
    }
}
