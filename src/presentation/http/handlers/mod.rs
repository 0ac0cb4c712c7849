//! HTTP Handlers
//!
//! Request handlers for all HTTP endpoints.

pub mod announcement;
pub mod application;
pub mod auth;
pub mod candidate;
pub mod file;
pub mod health;
pub mod job_posting;
pub mod plan;
pub mod user;
