//! Employee API Module

mod handler;

use axum::{Router, middleware, routing::get, routing::patch};

use crate::auth::require_admin;
use crate::core::ServerState;

/// Employee router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/employees", routes())
}

fn routes() -> Router<ServerState> {
    // Own record: any authenticated user (employee dashboard/profile)
    let self_routes = Router::new().route("/profile", get(handler::profile));

    // Management: admin only
    let manage_routes = Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route(
            "/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
        .route("/{id}/status", patch(handler::set_status))
        .layer(middleware::from_fn(require_admin));

    self_routes.merge(manage_routes)
}
