//! REST API endpoint tests

mod application_tests;
mod health_tests;
