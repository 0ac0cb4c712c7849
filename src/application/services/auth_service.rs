//! Authentication Service
//!
//! Credential verification against the user store. There is no token
//! lifecycle: the login endpoint verifies credentials and protected routes
//! authenticate every request with HTTP Basic.

use std::sync::Arc;

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use async_trait::async_trait;

use crate::domain::{UserRepository, UserRole};
use crate::shared::error::AppError;

/// Hash a password using Argon2id
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::Internal(format!("Password hashing failed: {}", e)))
}

/// Verify a password against its hash
pub fn verify_password(password: &str, hash: &str) -> bool {
    let Ok(parsed_hash) = PasswordHash::new(hash) else {
        return false;
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok()
}

/// The authenticated principal of a request
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub id: i32,
    pub username: String,
    pub full_name: String,
    pub role: UserRole,
}

/// Authentication service trait
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Verify credentials, returning the authenticated principal.
    async fn login(&self, username: &str, password: &str)
        -> Result<AuthenticatedUser, AppError>;

    /// Start a password reset for the given email address.
    async fn initiate_password_reset(&self, email: &str) -> Result<(), AppError>;
}

/// AuthService implementation
pub struct AuthServiceImpl<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> AuthServiceImpl<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }
}

#[async_trait]
impl<U> AuthService for AuthServiceImpl<U>
where
    U: UserRepository + 'static,
{
    async fn login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<AuthenticatedUser, AppError> {
        let user = self
            .user_repo
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Invalid username or password".to_string()))?;

        if !verify_password(password, &user.password_hash) {
            return Err(AppError::Unauthorized(
                "Invalid username or password".to_string(),
            ));
        }

        tracing::info!(username, "User logged in");

        Ok(AuthenticatedUser {
            id: user.id,
            username: user.username,
            full_name: user.full_name,
            role: user.role,
        })
    }

    /// Reset tokens and mail delivery are not implemented; the request is
    /// only recorded.
    async fn initiate_password_reset(&self, email: &str) -> Result<(), AppError> {
        tracing::info!(email, "Password reset requested");
        Ok(())
    }
}
