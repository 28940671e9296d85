//! Authentication Routes

mod handler;

use axum::{Router, routing::get, routing::post, routing::put};

use crate::core::ServerState;

/// Build authentication router
/// - /api/auth/login, /api/auth/register: public (skipped by the guard)
/// - /api/auth/me, /api/auth/logout, /api/auth/profile: require a session
pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/auth/login", post(handler::login))
        .route("/api/auth/register", post(handler::register))
        .route("/api/auth/me", get(handler::me))
        .route("/api/auth/logout", post(handler::logout))
        .route("/api/auth/profile", put(handler::update_profile))
}
