//! Analytics API Module

mod handler;

use axum::{Router, middleware, routing::get};

use crate::auth::require_admin;
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/analytics", routes())
}

fn routes() -> Router<ServerState> {
    // Aggregate views are admin territory
    Router::new()
        .route("/", get(handler::get_analytics))
        .layer(middleware::from_fn(require_admin))
}
