//! Authentication
//!
//! Opaque-token session management plus the Axum route-guard middleware.
//!
//! There is exactly one session at a time, persisted under the two fixed
//! session keys. A token is valid iff it equals the stored token; there is
//! no expiry, refresh, or revocation list.

pub mod middleware;
pub mod session;

pub use middleware::{CurrentUserExt, require_admin, require_auth};
pub use session::{AuthError, CurrentUser, SessionService};
