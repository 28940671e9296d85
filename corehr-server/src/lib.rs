//! CoreHR Server - HR administration backend
//!
//! # Architecture overview
//!
//! - **Record store** (`db`): embedded redb key/value storage; every
//!   persisted blob lives under a fixed string key
//! - **Repositories** (`db::repository`): typed CRUD over the blobs
//! - **Authentication** (`auth`): opaque-token sessions, argon2
//!   credential hashing, role-gated route guard
//! - **Analytics** (`analytics`): pure aggregation over the employee list
//! - **HTTP API** (`api`): RESTful interface
//!
//! # Module structure
//!
//! ```text
//! corehr-server/src/
//! ├── core/          # config, state, server
//! ├── auth/          # session service, route guard
//! ├── api/           # HTTP routes and handlers
//! ├── analytics/     # derived aggregates
//! ├── db/            # record store and repositories
//! └── utils/         # error envelope, logging
//! ```

pub mod analytics;
pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod utils;

// Re-export public types
pub use auth::{CurrentUser, SessionService};
pub use core::{Config, Server, ServerState};
pub use db::{RecordStore, StoreError};
pub use utils::{AppError, AppResponse, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

// Security logging macro - structured auth events
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
    ($level:expr, $event:expr) => {
        tracing::info!(target: "security", level = $level, event = $event);
    };
}

pub fn print_banner() {
    println!(
        r#"
   ______              __  ______
  / ____/___  ________/ / / / __ \
 / /   / __ \/ ___/ _ \ /_/ / /_/ /
/ /___/ /_/ / /  /  __/ __  / _, _/
\____/\____/_/   \___/_/ /_/_/ |_|
    "#
    );
}
