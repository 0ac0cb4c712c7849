//! Route Configuration
//!
//! Configures all HTTP routes for the API. Each resource router merges its
//! public endpoints with a Basic-auth protected remainder.

use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use tower_http::services::ServeDir;

use super::handlers;
use crate::application::services::PUBLIC_PREFIX;
use crate::presentation::middleware::auth_middleware;
use crate::startup::AppState;

/// Create the main API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api", api_routes(state.clone()))
        // Health check endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/health/live", get(handlers::health::liveness))
        .route("/health/ready", get(handlers::health::readiness))
        // Stored CVs are also served statically under their public prefix
        .nest_service(PUBLIC_PREFIX, ServeDir::new(&state.settings.upload.dir))
        .with_state(state)
}

/// API routes
fn api_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .nest("/auth", auth_routes())
        .nest("/applications", application_routes(state.clone()))
        .nest("/candidates", candidate_routes(state.clone()))
        .nest("/jobs", job_routes(state.clone()))
        .nest("/plans", plan_routes(state.clone()))
        .nest("/announcements", announcement_routes(state.clone()))
        .nest("/users", user_routes(state.clone()))
        .nest("/files", file_routes(state))
}

/// Authentication routes (public)
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(handlers::auth::login))
        .route("/forgot-password", post(handlers::auth::forgot_password))
        .route("/logout", post(handlers::auth::logout))
}

/// Application routes: submission is public, review is staff-only
fn application_routes(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/", get(handlers::application::get_all_applications))
        .route(
            "/status/{status}",
            get(handlers::application::get_applications_by_status),
        )
        .route(
            "/{id}/status",
            put(handlers::application::update_application_status),
        )
        .route_layer(middleware::from_fn_with_state(state, auth_middleware));

    Router::new()
        .route("/submit", post(handlers::application::submit_application))
        .merge(protected)
}

/// Candidate routes (staff)
fn candidate_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::candidate::get_all_candidates))
        .route("/{id}", get(handlers::candidate::get_candidate))
        .route("/{id}", delete(handlers::candidate::delete_candidate))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}

/// Job posting routes: the public job board plus a staff listing
fn job_routes(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/", get(handlers::job_posting::get_all_postings))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware));

    Router::new()
        .route("/public", get(handlers::job_posting::get_open_postings))
        .route("/public/{id}", get(handlers::job_posting::get_posting))
        .route(
            "/public/by-plan/{plan_id}",
            get(handlers::job_posting::get_posting_by_plan),
        )
        .merge(protected)
}

/// Recruitment plan routes: approved plans are publicly readable
fn plan_routes(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/", get(handlers::plan::get_all_plans))
        .route("/", post(handlers::plan::create_plan))
        .route("/{id}", get(handlers::plan::get_plan))
        .route("/{id}", put(handlers::plan::update_plan))
        .route("/{id}", delete(handlers::plan::delete_plan))
        .route("/{id}/permanent", delete(handlers::plan::delete_plan_permanent))
        .route("/{id}/approve", put(handlers::plan::approve_plan))
        .route("/{id}/reject", put(handlers::plan::reject_plan))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware));

    Router::new()
        .route("/public/{id}", get(handlers::plan::get_approved_plan))
        .merge(protected)
}

/// Announcement routes: active announcements are publicly readable
fn announcement_routes(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/", get(handlers::announcement::get_all_announcements))
        .route("/", post(handlers::announcement::create_announcement))
        .route("/{id}", put(handlers::announcement::update_announcement))
        .route("/{id}", delete(handlers::announcement::delete_announcement))
        .route(
            "/check-plan/{plan_id}",
            get(handlers::announcement::is_plan_announced),
        )
        .route_layer(middleware::from_fn_with_state(state, auth_middleware));

    Router::new()
        .route("/public", get(handlers::announcement::get_public_announcements))
        .merge(protected)
}

/// User routes: `/me` for the principal, the rest is account management
fn user_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/me", get(handlers::user::get_my_profile))
        .route("/me", put(handlers::user::update_my_profile))
        .route("/", get(handlers::user::get_all_users))
        .route("/", post(handlers::user::create_user))
        .route("/{id}", get(handlers::user::get_user))
        .route("/{id}", put(handlers::user::update_user))
        .route("/{id}", delete(handlers::user::delete_user))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}

/// CV file routes (public). The body limit leaves headroom over the upload
/// size cap so oversized files are rejected with the proper message.
fn file_routes(state: AppState) -> Router<AppState> {
    let body_limit = state.settings.upload.max_size_bytes + 1024 * 1024;

    Router::new()
        .route("/upload-cv", post(handlers::file::upload_cv))
        .route("/download/{file_name}", get(handlers::file::download_cv))
        .layer(DefaultBodyLimit::max(body_limit))
}
