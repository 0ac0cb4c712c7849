//! # Domain Layer
//!
//! Core entities of the recruitment system and the repository traits that
//! define their data-access contracts. The layer has no dependency on the
//! web framework or on the database driver beyond error plumbing.
//!
//! ## Structure
//!
//! - **entities**: Candidate, Application, JobPosition, JobPosting,
//!   RecruitmentPlan, Announcement, User

pub mod entities;

// Re-export commonly used types
pub use entities::*;
