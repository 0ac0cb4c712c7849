//! Authentication Middleware
//!
//! HTTP Basic verification against the user store for protected routes.
//! Every request re-verifies credentials; there is no session or token
//! state to invalidate.

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use base64::Engine;

use crate::application::services::verify_password;
use crate::domain::{UserRepository, UserRole};
use crate::infrastructure::repositories::PgUserRepository;
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Authenticated principal injected into request extensions
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: i32,
    pub username: String,
    pub role: UserRole,
}

impl AuthUser {
    /// Guard an endpoint behind a single role.
    pub fn require_role(&self, role: UserRole, message: &str) -> Result<(), AppError> {
        if self.role == role {
            Ok(())
        } else {
            Err(AppError::Forbidden(message.to_string()))
        }
    }
}

/// Parse an HTTP Basic authorization header into credentials
fn parse_basic(auth_header: &str) -> Result<(String, String), AppError> {
    let encoded = auth_header
        .strip_prefix("Basic ")
        .ok_or_else(|| AppError::Unauthorized("Invalid authorization header format".into()))?;

    let decoded = base64::engine::general_purpose::STANDARD
        .decode(encoded)
        .map_err(|_| AppError::Unauthorized("Invalid authorization header".into()))?;

    let credentials = String::from_utf8(decoded)
        .map_err(|_| AppError::Unauthorized("Invalid authorization header".into()))?;

    let (username, password) = credentials
        .split_once(':')
        .ok_or_else(|| AppError::Unauthorized("Invalid authorization header".into()))?;

    Ok((username.to_string(), password.to_string()))
}

/// Authentication middleware validating HTTP Basic credentials
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("Missing authorization header".into()))?;

    let (username, password) = parse_basic(auth_header)?;

    let user_repo = PgUserRepository::new(state.db.clone());
    let user = user_repo
        .find_by_username(&username)
        .await?
        .filter(|user| verify_password(&password, &user.password_hash))
        .ok_or_else(|| AppError::Unauthorized("Invalid username or password".into()))?;

    // Insert authenticated user into request extensions
    request.extensions_mut().insert(AuthUser {
        user_id: user.id,
        username: user.username,
        role: user.role,
    });

    // Continue to the next handler
    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_extracts_credentials() {
        // "hr:secret" base64-encoded
        let (username, password) = parse_basic("Basic aHI6c2VjcmV0").unwrap();

        assert_eq!(username, "hr");
        assert_eq!(password, "secret");
    }

    #[test]
    fn test_parse_basic_allows_colons_in_password() {
        // "hr:se:cr:et"
        let encoded = base64::engine::general_purpose::STANDARD.encode("hr:se:cr:et");
        let (username, password) = parse_basic(&format!("Basic {}", encoded)).unwrap();

        assert_eq!(username, "hr");
        assert_eq!(password, "se:cr:et");
    }

    #[test]
    fn test_parse_basic_rejects_other_schemes() {
        assert!(parse_basic("Bearer some-token").is_err());
        assert!(parse_basic("Basic not!base64").is_err());
    }

    #[test]
    fn test_require_role() {
        let auth = AuthUser {
            user_id: 1,
            username: "hr".to_string(),
            role: UserRole::PersonnelManager,
        };

        assert!(auth
            .require_role(UserRole::PersonnelManager, "forbidden")
            .is_ok());
        assert!(auth.require_role(UserRole::Admin, "forbidden").is_err());
    }
}
