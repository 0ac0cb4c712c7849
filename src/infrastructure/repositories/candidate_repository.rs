//! Candidate Repository Implementation
//!
//! PostgreSQL implementation of the CandidateRepository trait.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;

use crate::domain::{Candidate, CandidateRepository, NewCandidate};
use crate::shared::error::AppError;

/// Database row representation matching the `candidates` table schema.
#[derive(Debug, sqlx::FromRow)]
struct CandidateRow {
    id: i32,
    full_name: String,
    date_of_birth: NaiveDate,
    email: String,
    phone: String,
    position: String,
    department: String,
    address: String,
    cpa: f32,
    sex: String,
    cv_path: String,
}

impl CandidateRow {
    /// Convert database row to domain Candidate entity.
    fn into_candidate(self) -> Candidate {
        Candidate {
            id: self.id,
            full_name: self.full_name,
            date_of_birth: self.date_of_birth,
            email: self.email,
            phone: self.phone,
            position: self.position,
            department: self.department,
            address: self.address,
            cpa: self.cpa,
            sex: self.sex,
            cv_path: self.cv_path,
        }
    }
}

/// PostgreSQL candidate repository implementation.
#[derive(Clone)]
pub struct PgCandidateRepository {
    pool: PgPool,
}

impl PgCandidateRepository {
    /// Create a new PgCandidateRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const CANDIDATE_COLUMNS: &str = "id, full_name, date_of_birth, email, phone, position, \
                                 department, address, cpa, sex, cv_path";

#[async_trait]
impl CandidateRepository for PgCandidateRepository {
    async fn find_all(&self) -> Result<Vec<Candidate>, AppError> {
        let rows = sqlx::query_as::<_, CandidateRow>(&format!(
            "SELECT {CANDIDATE_COLUMNS} FROM candidates ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_candidate()).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Candidate>, AppError> {
        let row = sqlx::query_as::<_, CandidateRow>(&format!(
            "SELECT {CANDIDATE_COLUMNS} FROM candidates WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_candidate()))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Candidate>, AppError> {
        let row = sqlx::query_as::<_, CandidateRow>(&format!(
            "SELECT {CANDIDATE_COLUMNS} FROM candidates WHERE email = $1"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_candidate()))
    }

    async fn find_by_phone(&self, phone: &str) -> Result<Option<Candidate>, AppError> {
        let row = sqlx::query_as::<_, CandidateRow>(&format!(
            "SELECT {CANDIDATE_COLUMNS} FROM candidates WHERE phone = $1"
        ))
        .bind(phone)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_candidate()))
    }

    async fn create(&self, candidate: &NewCandidate) -> Result<Candidate, AppError> {
        let row = sqlx::query_as::<_, CandidateRow>(&format!(
            r#"
            INSERT INTO candidates (full_name, date_of_birth, email, phone, position,
                                    department, address, cpa, sex, cv_path)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING {CANDIDATE_COLUMNS}
            "#
        ))
        .bind(&candidate.full_name)
        .bind(candidate.date_of_birth)
        .bind(&candidate.email)
        .bind(&candidate.phone)
        .bind(&candidate.position)
        .bind(&candidate.department)
        .bind(&candidate.address)
        .bind(candidate.cpa)
        .bind(&candidate.sex)
        .bind(&candidate.cv_path)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => AppError::Conflict(
                "Candidate with this email or phone already exists".to_string(),
            ),
            _ => AppError::Database(e),
        })?;

        Ok(row.into_candidate())
    }

    async fn update(&self, candidate: &Candidate) -> Result<Candidate, AppError> {
        let row = sqlx::query_as::<_, CandidateRow>(&format!(
            r#"
            UPDATE candidates
            SET full_name = $2,
                date_of_birth = $3,
                email = $4,
                phone = $5,
                position = $6,
                department = $7,
                address = $8,
                cpa = $9,
                sex = $10,
                cv_path = $11
            WHERE id = $1
            RETURNING {CANDIDATE_COLUMNS}
            "#
        ))
        .bind(candidate.id)
        .bind(&candidate.full_name)
        .bind(candidate.date_of_birth)
        .bind(&candidate.email)
        .bind(&candidate.phone)
        .bind(&candidate.position)
        .bind(&candidate.department)
        .bind(&candidate.address)
        .bind(candidate.cpa)
        .bind(&candidate.sex)
        .bind(&candidate.cv_path)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => AppError::Conflict(
                "Candidate with this email or phone already exists".to_string(),
            ),
            _ => AppError::Database(e),
        })?
        .ok_or_else(|| AppError::NotFound(format!("Candidate with id {} not found", candidate.id)))?;

        Ok(row.into_candidate())
    }

    async fn delete(&self, id: i32) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM candidates WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Candidate with id {} not found",
                id
            )));
        }

        Ok(())
    }
}
