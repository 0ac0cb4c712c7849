//! Application Services
//!
//! Business logic services that coordinate domain operations.
//!
//! ## Available Services
//!
//! - **ApplicationService**: submission workflow and status lifecycle
//! - **CandidateService**: candidate listing and cascading deletion
//! - **PlanService**: recruitment plan CRUD and approval workflow
//! - **JobPostingService**: public job board views
//! - **AnnouncementService**: recruitment announcements
//! - **UserService**: profiles and account management
//! - **AuthService**: credential verification, password hashing
//! - **FileStorage**: CV upload/download passthrough

pub mod announcement_service;
pub mod application_service;
pub mod auth_service;
pub mod candidate_service;
pub mod file_storage;
pub mod job_posting_service;
pub mod plan_service;
pub mod user_service;

// Re-export application service types
pub use application_service::{
    ApplicationError, ApplicationService, ApplicationServiceImpl, ApplicationView,
    SubmitApplicationDto,
};

// Re-export candidate service types
pub use candidate_service::{CandidateService, CandidateServiceImpl};

// Re-export plan service types
pub use plan_service::{CreatePlanDto, PlanService, PlanServiceImpl, PlanView, UpdatePlanDto};

// Re-export job posting service types
pub use job_posting_service::{JobPostingService, JobPostingServiceImpl, JobPostingView};

// Re-export announcement service types
pub use announcement_service::{
    AnnouncementDto, AnnouncementService, AnnouncementServiceImpl, AnnouncementView,
};

// Re-export user service types
pub use user_service::{
    CreateUserDto, SelfUpdateDto, UpdateUserDto, UserProfileView, UserService, UserServiceImpl,
};

// Re-export auth service types
pub use auth_service::{
    hash_password, verify_password, AuthService, AuthServiceImpl, AuthenticatedUser,
};

// Re-export file storage
pub use file_storage::{content_type_for, FileStorage, ALLOWED_CONTENT_TYPES, PUBLIC_PREFIX};
