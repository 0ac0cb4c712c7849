//! Repository Implementations
//!
//! PostgreSQL implementations of the domain repository traits.
//!
//! Each repository handles data access for a single aggregate and maps rows
//! to entities through an explicit row struct — no ORM.
//!
//! ## Available Repositories
//!
//! - **CandidateRepository** - candidate lookups and the submission upsert
//! - **ApplicationRepository** - application CRUD and per-candidate deletes
//! - **JobPositionRepository** - open role slots (read-only)
//! - **JobPostingRepository** - published postings (read-only)
//! - **PlanRepository** - recruitment plan CRUD with approval fields
//! - **AnnouncementRepository** - recruitment announcements
//! - **UserRepository** / **UnitManagerRepository** - staff accounts

pub mod announcement_repository;
pub mod application_repository;
pub mod candidate_repository;
pub mod job_position_repository;
pub mod job_posting_repository;
pub mod plan_repository;
pub mod unit_manager_repository;
pub mod user_repository;

// Re-export repository structs for convenience
pub use announcement_repository::PgAnnouncementRepository;
pub use application_repository::PgApplicationRepository;
pub use candidate_repository::PgCandidateRepository;
pub use job_position_repository::PgJobPositionRepository;
pub use job_posting_repository::PgJobPostingRepository;
pub use plan_repository::PgPlanRepository;
pub use unit_manager_repository::PgUnitManagerRepository;
pub use user_repository::PgUserRepository;
