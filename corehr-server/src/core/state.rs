//! Server state
//!
//! [`ServerState`] holds shared handles to the record store and the
//! services built over it. Cloning is cheap (every handle is `Arc`-backed),
//! so handlers receive it by value through axum's `State` extractor.

use std::path::PathBuf;

use crate::auth::SessionService;
use crate::core::Config;
use crate::db::RecordStore;
use crate::db::repository::EmployeeRepository;
use crate::utils::AppError;

#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// Record store (redb)
    pub store: RecordStore,
    /// Session manager
    pub sessions: SessionService,
    /// Employee repository
    pub employees: EmployeeRepository,
}

impl ServerState {
    /// Initialize state against the on-disk store
    ///
    /// Creates `{work_dir}/database` if needed, opens the store, and seeds
    /// the default admin credential on first run.
    pub fn initialize(config: &Config) -> Result<Self, AppError> {
        let db_dir = PathBuf::from(&config.work_dir).join("database");
        std::fs::create_dir_all(&db_dir)
            .map_err(|e| AppError::internal(format!("Failed to create {:?}: {}", db_dir, e)))?;

        let store = RecordStore::open(db_dir.join("corehr.redb"))
            .map_err(|e| AppError::database(format!("Failed to open record store: {}", e)))?;
        tracing::info!(path = %db_dir.display(), "Record store opened");

        Self::with_store(config.clone(), store)
    }

    /// Initialize state over an in-memory store (tests and demos)
    pub fn initialize_in_memory(config: &Config) -> Result<Self, AppError> {
        let store = RecordStore::open_in_memory()
            .map_err(|e| AppError::database(format!("Failed to open record store: {}", e)))?;
        Self::with_store(config.clone(), store)
    }

    fn with_store(config: Config, store: RecordStore) -> Result<Self, AppError> {
        let sessions = SessionService::new(store.clone());
        let employees = EmployeeRepository::new(store.clone());

        sessions
            .seed_default_admin(&config.admin_email, &config.admin_password)
            .map_err(AppError::from)?;

        Ok(Self {
            config,
            store,
            sessions,
            employees,
        })
    }
}
