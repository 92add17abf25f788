//! Route definitions
//!
//! API routes are mounted under /api/v1; health routes sit at the root.

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{audit_logs, health};
use crate::state::AppState;

/// Create the main API router (health routes are kept separate so they
/// bypass rate limiting)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .route("/audit-logs", post(audit_logs::create_audit_log))
        .route("/audit-logs/:audit_log_id", get(audit_logs::get_audit_log))
        .route("/users/:user_id/audit-logs", get(audit_logs::get_user_audit_logs))
}
