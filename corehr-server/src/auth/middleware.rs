//! Route-guard middleware
//!
//! Gates the API surface on session state and role:
//! unauthenticated access to a protected route is 401, authenticated
//! access with the wrong role is 403.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::security_log;
use crate::utils::AppError;

/// Authentication middleware - requires a live session
///
/// Extracts `Authorization: Bearer <token>` and validates the token against
/// the stored session. On success injects [`CurrentUser`] into the request
/// extensions.
///
/// # Paths that skip the guard
///
/// - `OPTIONS *` (CORS preflight)
/// - non-`/api/` paths (fall through to 404)
/// - `/api/auth/login`, `/api/auth/register` (session entry points)
/// - `/api/health`
pub async fn require_auth(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let path = req.uri().path();

    if req.method() == http::Method::OPTIONS {
        return Ok(next.run(req).await);
    }

    if !path.starts_with("/api/") {
        return Ok(next.run(req).await);
    }

    let is_public_api_route =
        path == "/api/auth/login" || path == "/api/auth/register" || path == "/api/health";
    if is_public_api_route {
        return Ok(next.run(req).await);
    }

    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let token = match auth_header {
        Some(header) => header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::invalid_token("Invalid authorization header"))?,
        None => {
            security_log!("WARN", "auth_missing", uri = format!("{:?}", req.uri()));
            return Err(AppError::unauthorized());
        }
    };

    match state.sessions.authenticate(token) {
        Ok(Some(user)) => {
            req.extensions_mut().insert(CurrentUser::from(user));
            Ok(next.run(req).await)
        }
        Ok(None) => {
            security_log!("WARN", "auth_failed", uri = format!("{:?}", req.uri()));
            Err(AppError::invalid_token("Invalid or stale token"))
        }
        Err(e) => Err(AppError::internal(e.to_string())),
    }
}

/// Admin middleware - requires the admin role
///
/// Layered after [`require_auth`] on admin routers. Non-admin callers get
/// 403 Forbidden.
pub async fn require_admin(req: Request, next: Next) -> Result<Response, AppError> {
    let user = req
        .extensions()
        .get::<CurrentUser>()
        .ok_or(AppError::unauthorized())?;
    if !user.is_admin() {
        security_log!(
            "WARN",
            "admin_required",
            user_id = user.id,
            email = user.email.clone(),
            role = user.role.to_string()
        );
        return Err(AppError::forbidden("Admin role required".to_string()));
    }

    Ok(next.run(req).await)
}

/// Extension method for pulling the authenticated caller off a request
pub trait CurrentUserExt {
    /// # Errors
    ///
    /// 401 Unauthorized when no session user was injected
    fn current_user(&self) -> Result<&CurrentUser, AppError>;
}

impl CurrentUserExt for Request {
    fn current_user(&self) -> Result<&CurrentUser, AppError> {
        self.extensions()
            .get::<CurrentUser>()
            .ok_or(AppError::unauthorized())
    }
}
