//! User Service
//!
//! Current-user profile operations and admin account management. Account
//! management is deliberately narrow: only unit-manager accounts are created
//! and deleted through the API, the other roles are provisioned with the
//! database.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::application::services::auth_service::hash_password;
use crate::domain::{NewUser, UnitManagerProfile, UnitManagerRepository, User, UserRepository, UserRole};
use crate::shared::error::AppError;

/// Admin user-creation data as accepted by the service
#[derive(Debug, Clone)]
pub struct CreateUserDto {
    pub username: String,
    pub password: String,
    pub full_name: String,
    pub date_of_birth: NaiveDate,
    pub phone_number: String,
    pub email: String,
    pub address: String,
    pub role: String,
    pub sex: String,
    pub department: Option<String>,
    pub position: Option<String>,
}

/// Admin user-update data; password is re-hashed when present
#[derive(Debug, Clone)]
pub struct UpdateUserDto {
    pub password: Option<String>,
    pub full_name: String,
    pub date_of_birth: NaiveDate,
    pub phone_number: String,
    pub email: String,
    pub address: String,
    pub sex: String,
}

/// Self-service profile update data
#[derive(Debug, Clone)]
pub struct SelfUpdateDto {
    pub email: String,
    pub phone: String,
    pub address: String,
}

/// Profile view; unit managers carry department and position
#[derive(Debug, Clone)]
pub struct UserProfileView {
    pub user: User,
    pub department: Option<String>,
    pub position: Option<String>,
}

/// User service trait
#[async_trait]
pub trait UserService: Send + Sync {
    /// Profile of the given user (by login name).
    async fn get_profile(&self, username: &str) -> Result<UserProfileView, AppError>;

    /// Self-service update of email/phone/address.
    async fn update_self(&self, username: &str, dto: SelfUpdateDto) -> Result<User, AppError>;

    /// List all staff accounts.
    async fn get_all(&self) -> Result<Vec<User>, AppError>;

    /// Fetch a staff account by id.
    async fn get(&self, id: i32) -> Result<User, AppError>;

    /// Create a unit-manager account.
    async fn create(&self, dto: CreateUserDto) -> Result<User, AppError>;

    /// Update a staff account.
    async fn update(&self, id: i32, dto: UpdateUserDto) -> Result<User, AppError>;

    /// Delete a unit-manager account.
    async fn delete(&self, id: i32) -> Result<(), AppError>;
}

/// UserService implementation
pub struct UserServiceImpl<U, M>
where
    U: UserRepository,
    M: UnitManagerRepository,
{
    user_repo: Arc<U>,
    unit_manager_repo: Arc<M>,
}

impl<U, M> UserServiceImpl<U, M>
where
    U: UserRepository,
    M: UnitManagerRepository,
{
    pub fn new(user_repo: Arc<U>, unit_manager_repo: Arc<M>) -> Self {
        Self {
            user_repo,
            unit_manager_repo,
        }
    }

    async fn fetch_by_username(&self, username: &str) -> Result<User, AppError> {
        self.user_repo
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User not found: {}", username)))
    }
}

#[async_trait]
impl<U, M> UserService for UserServiceImpl<U, M>
where
    U: UserRepository + 'static,
    M: UnitManagerRepository + 'static,
{
    async fn get_profile(&self, username: &str) -> Result<UserProfileView, AppError> {
        let user = self.fetch_by_username(username).await?;

        let profile = if user.role == UserRole::UnitManager {
            self.unit_manager_repo.find_by_user_id(user.id).await?
        } else {
            None
        };

        Ok(UserProfileView {
            user,
            department: profile.as_ref().map(|p| p.department.clone()),
            position: profile.map(|p| p.position),
        })
    }

    async fn update_self(&self, username: &str, dto: SelfUpdateDto) -> Result<User, AppError> {
        let mut user = self.fetch_by_username(username).await?;

        if user.email != dto.email && self.user_repo.email_exists(&dto.email).await? {
            return Err(AppError::BadRequest("Email is already in use".to_string()));
        }
        if user.phone_number != dto.phone && self.user_repo.phone_exists(&dto.phone).await? {
            return Err(AppError::BadRequest(
                "Phone number is already in use".to_string(),
            ));
        }

        user.email = dto.email;
        user.phone_number = dto.phone;
        user.address = dto.address;

        self.user_repo.update(&user).await
    }

    async fn get_all(&self) -> Result<Vec<User>, AppError> {
        self.user_repo.find_all().await
    }

    async fn get(&self, id: i32) -> Result<User, AppError> {
        self.user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User not found with id: {}", id)))
    }

    async fn create(&self, dto: CreateUserDto) -> Result<User, AppError> {
        let role = UserRole::parse(&dto.role)
            .ok_or_else(|| AppError::BadRequest(format!("Unknown role: {}", dto.role)))?;

        if role != UserRole::UnitManager {
            return Err(AppError::BadRequest(
                "Only UNIT_MANAGER accounts can be created".to_string(),
            ));
        }

        let department = dto
            .department
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .ok_or_else(|| AppError::BadRequest("Department is required".to_string()))?
            .to_string();
        let position = dto
            .position
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .ok_or_else(|| AppError::BadRequest("Position is required".to_string()))?
            .to_string();

        if self.user_repo.username_exists(&dto.username).await? {
            return Err(AppError::BadRequest("Username already exists".to_string()));
        }
        if self.user_repo.email_exists(&dto.email).await? {
            return Err(AppError::BadRequest("Email already exists".to_string()));
        }
        if self.user_repo.phone_exists(&dto.phone_number).await? {
            return Err(AppError::BadRequest(
                "Phone number already exists".to_string(),
            ));
        }

        let user = self
            .user_repo
            .create(&NewUser {
                username: dto.username,
                password_hash: hash_password(&dto.password)?,
                full_name: dto.full_name,
                date_of_birth: dto.date_of_birth,
                phone_number: dto.phone_number,
                email: dto.email,
                address: dto.address,
                role,
                sex: dto.sex,
            })
            .await?;

        self.unit_manager_repo
            .create(&UnitManagerProfile {
                user_id: user.id,
                department,
                position,
            })
            .await?;

        tracing::info!(user_id = user.id, "Unit manager account created");
        Ok(user)
    }

    async fn update(&self, id: i32, dto: UpdateUserDto) -> Result<User, AppError> {
        let mut user = self.get(id).await?;

        user.full_name = dto.full_name;
        user.date_of_birth = dto.date_of_birth;
        user.phone_number = dto.phone_number;
        user.email = dto.email;
        user.address = dto.address;
        user.sex = dto.sex;

        if let Some(password) = dto.password.filter(|p| !p.is_empty()) {
            user.password_hash = hash_password(&password)?;
        }

        self.user_repo.update(&user).await
    }

    async fn delete(&self, id: i32) -> Result<(), AppError> {
        let user = self.get(id).await?;

        if user.role != UserRole::UnitManager {
            return Err(AppError::Forbidden(
                "Only unit manager accounts can be deleted".to_string(),
            ));
        }

        self.user_repo.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::user::{MockUnitManagerRepository, MockUserRepository};

    fn sample_dto(role: &str) -> CreateUserDto {
        CreateUserDto {
            username: "um01".to_string(),
            password: "super-secret-1".to_string(),
            full_name: "Unit Manager".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1982, 7, 7).unwrap(),
            phone_number: "0905555555".to_string(),
            email: "um01@example.edu".to_string(),
            address: "Campus".to_string(),
            role: role.to_string(),
            sex: "Other".to_string(),
            department: Some("Mathematics".to_string()),
            position: Some("Head of Department".to_string()),
        }
    }

    fn stored_user(id: i32, role: UserRole) -> User {
        User {
            id,
            username: format!("user{}", id),
            password_hash: "hash".to_string(),
            full_name: "Stored User".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1985, 1, 1).unwrap(),
            phone_number: format!("090000{:04}", id),
            email: format!("user{}@example.edu", id),
            address: "Campus".to_string(),
            role,
            sex: "Other".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_rejects_non_unit_manager_roles() {
        let mut users = MockUserRepository::new();
        users.expect_create().never();

        let mut profiles = MockUnitManagerRepository::new();
        profiles.expect_create().never();

        let service = UserServiceImpl::new(Arc::new(users), Arc::new(profiles));
        let err = service
            .create(sample_dto("ADMIN"))
            .await
            .expect_err("create must be refused");

        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[tokio::test]
    async fn test_create_requires_department_and_position() {
        let mut users = MockUserRepository::new();
        users.expect_create().never();

        let profiles = MockUnitManagerRepository::new();

        let service = UserServiceImpl::new(Arc::new(users), Arc::new(profiles));
        let mut dto = sample_dto("UNIT_MANAGER");
        dto.department = Some("   ".to_string());

        let err = service.create(dto).await.expect_err("create must fail");
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[tokio::test]
    async fn test_create_hashes_password_and_writes_profile() {
        let mut users = MockUserRepository::new();
        users.expect_username_exists().returning(|_| Ok(false));
        users.expect_email_exists().returning(|_| Ok(false));
        users.expect_phone_exists().returning(|_| Ok(false));
        users
            .expect_create()
            .withf(|new: &NewUser| {
                new.role == UserRole::UnitManager && new.password_hash != "super-secret-1"
            })
            .times(1)
            .returning(|new| {
                let mut user = stored_user(77, new.role);
                user.username = new.username.clone();
                Ok(user)
            });

        let mut profiles = MockUnitManagerRepository::new();
        profiles
            .expect_create()
            .withf(|profile: &UnitManagerProfile| {
                profile.user_id == 77 && profile.department == "Mathematics"
            })
            .times(1)
            .returning(|profile| Ok(profile.clone()));

        let service = UserServiceImpl::new(Arc::new(users), Arc::new(profiles));
        let user = service
            .create(sample_dto("UNIT_MANAGER"))
            .await
            .expect("create should succeed");

        assert_eq!(user.username, "um01");
    }

    #[tokio::test]
    async fn test_delete_refuses_non_unit_manager_accounts() {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_id()
            .returning(|id| Ok(Some(stored_user(id, UserRole::Rector))));
        users.expect_delete().never();

        let profiles = MockUnitManagerRepository::new();

        let service = UserServiceImpl::new(Arc::new(users), Arc::new(profiles));
        let err = service.delete(3).await.expect_err("delete must be refused");

        assert!(matches!(err, AppError::Forbidden(_)));
    }

    #[tokio::test]
    async fn test_self_update_rejects_taken_email() {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_username()
            .returning(|_| Ok(Some(stored_user(4, UserRole::PersonnelManager))));
        users.expect_email_exists().returning(|_| Ok(true));
        users.expect_update().never();

        let profiles = MockUnitManagerRepository::new();

        let service = UserServiceImpl::new(Arc::new(users), Arc::new(profiles));
        let err = service
            .update_self(
                "user4",
                SelfUpdateDto {
                    email: "taken@example.edu".to_string(),
                    phone: "0900000004".to_string(),
                    address: "Campus".to_string(),
                },
            )
            .await
            .expect_err("update must fail");

        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[tokio::test]
    async fn test_profile_includes_department_for_unit_managers() {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_username()
            .returning(|_| Ok(Some(stored_user(5, UserRole::UnitManager))));

        let mut profiles = MockUnitManagerRepository::new();
        profiles.expect_find_by_user_id().returning(|user_id| {
            Ok(Some(UnitManagerProfile {
                user_id,
                department: "Physics".to_string(),
                position: "Dean".to_string(),
            }))
        });

        let service = UserServiceImpl::new(Arc::new(users), Arc::new(profiles));
        let view = service
            .get_profile("user5")
            .await
            .expect("profile should resolve");

        assert_eq!(view.department.as_deref(), Some("Physics"));
        assert_eq!(view.position.as_deref(), Some("Dean"));
    }
}
