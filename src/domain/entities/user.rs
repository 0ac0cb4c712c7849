//! User entity and repository traits.
//!
//! Maps to the `users` table. A user is a staff account; candidates are a
//! separate aggregate and never log in.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// Staff role matching the database VARCHAR constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Admin,
    Rector,
    UnitManager,
    PersonnelManager,
}

impl UserRole {
    /// Parse the database string representation.
    ///
    /// Unknown strings are rejected rather than defaulted: roles gate
    /// authorization decisions.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "ADMIN" => Some(Self::Admin),
            "RECTOR" => Some(Self::Rector),
            "UNIT_MANAGER" => Some(Self::UnitManager),
            "PERSONNEL_MANAGER" => Some(Self::PersonnelManager),
            _ => None,
        }
    }

    /// Convert to database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::Rector => "RECTOR",
            Self::UnitManager => "UNIT_MANAGER",
            Self::PersonnelManager => "PERSONNEL_MANAGER",
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A staff account.
///
/// Maps to the `users` table:
/// - id: INTEGER PRIMARY KEY (identity)
/// - username: VARCHAR(30) NOT NULL UNIQUE
/// - password_hash: VARCHAR(255) NOT NULL (argon2)
/// - full_name: VARCHAR(50) NOT NULL
/// - date_of_birth: DATE NOT NULL
/// - phone_number: VARCHAR(15) NOT NULL UNIQUE
/// - email: VARCHAR(50) NOT NULL UNIQUE
/// - address: VARCHAR(255) NOT NULL
/// - role: VARCHAR(20) NOT NULL
/// - sex: VARCHAR(10) NOT NULL
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Identity primary key
    pub id: i32,

    /// Login name (unique)
    pub username: String,

    /// Argon2 password hash
    #[serde(skip_serializing)]
    pub password_hash: String,

    pub full_name: String,

    pub date_of_birth: NaiveDate,

    /// Phone number (unique)
    pub phone_number: String,

    /// Email address (unique)
    pub email: String,

    pub address: String,

    pub role: UserRole,

    pub sex: String,
}

/// User data for insertion (id is database-generated).
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
    pub full_name: String,
    pub date_of_birth: NaiveDate,
    pub phone_number: String,
    pub email: String,
    pub address: String,
    pub role: UserRole,
    pub sex: String,
}

/// One-to-one extension of a unit-manager account.
///
/// Only `UNIT_MANAGER` users carry a profile row; other roles are fully
/// described by the role column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitManagerProfile {
    pub user_id: i32,
    pub department: String,
    pub position: String,
}

/// Repository trait for User data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// List all users.
    async fn find_all(&self) -> Result<Vec<User>, AppError>;

    /// Find a user by id.
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, AppError>;

    /// Find a user by login name.
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError>;

    /// Find a user by email address.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    /// Find a user by phone number.
    async fn find_by_phone(&self, phone: &str) -> Result<Option<User>, AppError>;

    /// Insert a new user.
    async fn create(&self, user: &NewUser) -> Result<User, AppError>;

    /// Update an existing user.
    async fn update(&self, user: &User) -> Result<User, AppError>;

    /// Delete a user (hard delete).
    async fn delete(&self, id: i32) -> Result<(), AppError>;

    /// Check if a username is taken.
    async fn username_exists(&self, username: &str) -> Result<bool, AppError>;

    /// Check if an email address is already registered.
    async fn email_exists(&self, email: &str) -> Result<bool, AppError>;

    /// Check if a phone number is already registered.
    async fn phone_exists(&self, phone: &str) -> Result<bool, AppError>;
}

/// Repository trait for unit-manager profile rows.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UnitManagerRepository: Send + Sync {
    /// Find the profile of the given user, if any.
    async fn find_by_user_id(&self, user_id: i32) -> Result<Option<UnitManagerProfile>, AppError>;

    /// Insert a profile row for a freshly created unit manager.
    async fn create(&self, profile: &UnitManagerProfile) -> Result<UnitManagerProfile, AppError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_roundtrip() {
        for role in [
            UserRole::Admin,
            UserRole::Rector,
            UserRole::UnitManager,
            UserRole::PersonnelManager,
        ] {
            assert_eq!(UserRole::parse(role.as_str()), Some(role));
        }
    }

    #[test]
    fn test_unknown_role_is_rejected() {
        assert_eq!(UserRole::parse(""), None);
        assert_eq!(UserRole::parse("admin"), None);
        assert_eq!(UserRole::parse("SUPERUSER"), None);
    }

    #[test]
    fn test_role_display() {
        assert_eq!(format!("{}", UserRole::UnitManager), "UNIT_MANAGER");
        assert_eq!(format!("{}", UserRole::PersonnelManager), "PERSONNEL_MANAGER");
    }

    #[test]
    fn test_password_hash_not_serialized() {
        let user = User {
            id: 1,
            username: "admin".to_string(),
            password_hash: "secret-hash".to_string(),
            full_name: "Site Admin".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
            phone_number: "0900000001".to_string(),
            email: "admin@example.edu".to_string(),
            address: "1 Admin Way".to_string(),
            role: UserRole::Admin,
            sex: "Other".to_string(),
        };

        let serialized = serde_json::to_string(&user).expect("Failed to serialize user");

        assert!(!serialized.contains("password_hash"));
        assert!(!serialized.contains("secret-hash"));
        assert!(serialized.contains("\"role\":\"ADMIN\""));
    }
}
