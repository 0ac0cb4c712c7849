//! Domain Entities
//!
//! One module per aggregate; each module carries the entity struct, any
//! status/role vocabulary, and the repository trait implemented by the
//! infrastructure layer.

pub mod announcement;
pub mod application;
pub mod candidate;
pub mod job_position;
pub mod job_posting;
pub mod recruitment_plan;
pub mod user;

pub use announcement::{Announcement, AnnouncementRepository, NewAnnouncement};
pub use application::{application_status, Application, ApplicationRepository, NewApplication};
pub use candidate::{Candidate, CandidateRepository, NewCandidate};
pub use job_position::{JobPosition, JobPositionRepository};
pub use job_posting::{JobPosting, JobPostingRepository, PostingStatus};
pub use recruitment_plan::{plan_status, NewPlan, PlanRepository, RecruitmentPlan};
pub use user::{NewUser, UnitManagerProfile, UnitManagerRepository, User, UserRepository, UserRole};
