//! Authentication Handlers
//!
//! Handles login, registration, logout, and profile updates.

use axum::{Extension, Json, extract::State};
use validator::Validate;

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::utils::AppError;
use shared::client::{LoginRequest, LoginResponse, RegisterRequest, UpdateProfileRequest};
use shared::models::User;

/// Login handler
///
/// Validates credentials and opens a session. Unknown email and wrong
/// password return the same error body.
pub async fn login(
    State(state): State<ServerState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let (token, user) = state.sessions.login(&req.email, &req.password)?;
    Ok(Json(LoginResponse { token, user }))
}

/// Registration handler
///
/// Creates the account and logs it in immediately; the response carries
/// the fresh session token.
pub async fn register(
    State(state): State<ServerState>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    req.validate()?;

    let (token, user) = state
        .sessions
        .register(&req.email, &req.password, &req.name, req.role)?;
    Ok(Json(LoginResponse { token, user }))
}

/// Current user info
pub async fn me(Extension(user): Extension<CurrentUser>) -> Json<User> {
    Json(User {
        id: user.id,
        email: user.email,
        name: user.name,
        role: user.role,
    })
}

/// Logout handler
pub async fn logout(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
) -> Result<Json<()>, AppError> {
    state.sessions.logout()?;
    tracing::info!(user_id = %user.id, email = %user.email, "User logged out");
    Ok(Json(()))
}

/// Profile update handler - display name only
pub async fn update_profile(
    State(state): State<ServerState>,
    Json(req): Json<UpdateProfileRequest>,
) -> Result<Json<User>, AppError> {
    req.validate()?;
    let user = state.sessions.update_profile(&req.name)?;
    Ok(Json(user))
}
