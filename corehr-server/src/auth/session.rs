//! Session Service
//!
//! Validates credentials against the credential table, issues opaque
//! session tokens, and owns the persisted `(token, user)` pair.

use thiserror::Error;

use crate::db::repository::{CredentialRepository, RepoError};
use crate::db::{RecordStore, SESSION_TOKEN_KEY, SESSION_USER_KEY, StoreError};
use shared::models::{User, UserRole};
use shared::util::{session_token, snowflake_id};

/// Session errors
#[derive(Debug, Error)]
pub enum AuthError {
    /// Unified message for unknown email and wrong password, so the login
    /// surface cannot be used to enumerate registered emails
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Email '{0}' is already registered")]
    EmailTaken(String),

    #[error("Not authenticated")]
    NotAuthenticated,

    #[error("Storage error: {0}")]
    Store(String),
}

impl From<StoreError> for AuthError {
    fn from(err: StoreError) -> Self {
        AuthError::Store(err.to_string())
    }
}

impl From<RepoError> for AuthError {
    fn from(err: RepoError) -> Self {
        // Duplicate emails are checked before insert, so every repo error
        // reaching here is a storage-level failure
        AuthError::Store(err.to_string())
    }
}

/// The authenticated caller, injected into request extensions by the
/// route-guard middleware
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub role: UserRole,
}

impl CurrentUser {
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}

impl From<User> for CurrentUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
            role: user.role,
        }
    }
}

#[derive(Clone)]
pub struct SessionService {
    store: RecordStore,
    credentials: CredentialRepository,
}

impl SessionService {
    pub fn new(store: RecordStore) -> Self {
        let credentials = CredentialRepository::new(store.clone());
        Self { store, credentials }
    }

    pub fn credentials(&self) -> &CredentialRepository {
        &self.credentials
    }

    /// Authenticate with email + password
    ///
    /// On success persists a fresh `(token, user)` session (replacing any
    /// existing one) and returns it.
    pub fn login(&self, email: &str, password: &str) -> Result<(String, User), AuthError> {
        let entry = match self.credentials.find(email)? {
            Some(entry) => entry,
            None => {
                tracing::warn!(email = %email, "Login failed - email not registered");
                return Err(AuthError::InvalidCredentials);
            }
        };

        let password_valid = entry
            .verify_password(password)
            .map_err(|e| AuthError::Store(format!("Password verification failed: {}", e)))?;
        if !password_valid {
            tracing::warn!(email = %email, "Login failed - invalid credentials");
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.open_session(&entry.user)?;
        tracing::info!(user_id = %entry.user.id, email = %email, role = %entry.user.role, "User logged in");
        Ok((token, entry.user))
    }

    /// Register a new account and log it in immediately
    pub fn register(
        &self,
        email: &str,
        password: &str,
        name: &str,
        role: UserRole,
    ) -> Result<(String, User), AuthError> {
        if self.credentials.find(email)?.is_some() {
            return Err(AuthError::EmailTaken(email.to_string()));
        }

        let user = User {
            id: snowflake_id(),
            email: email.to_string(),
            name: name.to_string(),
            role,
        };
        self.credentials.insert(email, password, user.clone())?;

        let token = self.open_session(&user)?;
        tracing::info!(user_id = %user.id, email = %email, role = %role, "User registered");
        Ok((token, user))
    }

    /// Destroy the current session (no-op when none exists)
    pub fn logout(&self) -> Result<(), AuthError> {
        self.store
            .remove_all(&[SESSION_TOKEN_KEY, SESSION_USER_KEY])?;
        Ok(())
    }

    /// Merge a new display name into the current session user
    ///
    /// Re-persists both the session copy and the credential-table copy, so
    /// the next login sees the change too.
    pub fn update_profile(&self, name: &str) -> Result<User, AuthError> {
        let (_token, mut user) = self.current()?.ok_or(AuthError::NotAuthenticated)?;
        user.name = name.to_string();

        // Token unchanged; only the user blob is rewritten
        self.credentials.update_user(&user.email, user.clone())?;
        self.store.put_json(SESSION_USER_KEY, &user)?;
        Ok(user)
    }

    /// The current `(token, user)` pair, if a session exists
    ///
    /// The token key is present iff a user is authenticated; the two keys
    /// are written and removed together, so a half-present pair is treated
    /// as no session.
    pub fn current(&self) -> Result<Option<(String, User)>, AuthError> {
        let token: Option<String> = self.store.get_json(SESSION_TOKEN_KEY)?;
        let user: Option<User> = self.store.get_json(SESSION_USER_KEY)?;
        match (token, user) {
            (Some(token), Some(user)) => Ok(Some((token, user))),
            _ => Ok(None),
        }
    }

    /// Resolve a presented token to the session user
    ///
    /// Validity is plain equality against the stored token.
    pub fn authenticate(&self, token: &str) -> Result<Option<User>, AuthError> {
        match self.current()? {
            Some((stored, user)) if stored == token => Ok(Some(user)),
            _ => Ok(None),
        }
    }

    /// Seed the default admin credential on first run
    pub fn seed_default_admin(&self, email: &str, password: &str) -> Result<(), AuthError> {
        if !self.credentials.is_empty()? {
            return Ok(());
        }
        let admin = User {
            id: snowflake_id(),
            email: email.to_string(),
            name: "Admin User".to_string(),
            role: UserRole::Admin,
        };
        self.credentials.insert(email, password, admin)?;
        tracing::info!(email = %email, "Seeded default admin account");
        Ok(())
    }

    fn open_session(&self, user: &User) -> Result<String, AuthError> {
        let token = session_token();
        self.store.put_json(SESSION_TOKEN_KEY, &token)?;
        self.store.put_json(SESSION_USER_KEY, user)?;
        Ok(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> SessionService {
        SessionService::new(RecordStore::open_in_memory().unwrap())
    }

    #[test]
    fn register_then_login_roundtrip() {
        let svc = service();
        let (token, user) = svc
            .register("jane@corehr.com", "secret123", "Jane", UserRole::Employee)
            .unwrap();
        assert_eq!(user.email, "jane@corehr.com");
        // Register authenticates immediately
        assert!(svc.authenticate(&token).unwrap().is_some());

        let (token2, user2) = svc.login("jane@corehr.com", "secret123").unwrap();
        assert_eq!(user2.email, user.email);
        assert_eq!(user2.id, user.id);
        // A new login replaces the session token
        assert!(svc.authenticate(&token).unwrap().is_none());
        assert!(svc.authenticate(&token2).unwrap().is_some());
    }

    #[test]
    fn wrong_password_and_unknown_email_fail_alike() {
        let svc = service();
        svc.register("jane@corehr.com", "secret123", "Jane", UserRole::Employee)
            .unwrap();

        let wrong = svc.login("jane@corehr.com", "nope").unwrap_err();
        let unknown = svc.login("ghost@corehr.com", "secret123").unwrap_err();
        assert!(matches!(wrong, AuthError::InvalidCredentials));
        assert!(matches!(unknown, AuthError::InvalidCredentials));
        // Same message either way - no email enumeration
        assert_eq!(wrong.to_string(), unknown.to_string());
    }

    #[test]
    fn duplicate_registration_is_a_conflict() {
        let svc = service();
        svc.register("jane@corehr.com", "secret123", "Jane", UserRole::Employee)
            .unwrap();
        let err = svc
            .register("jane@corehr.com", "other456", "Impostor", UserRole::Admin)
            .unwrap_err();
        assert!(matches!(err, AuthError::EmailTaken(_)));
    }

    #[test]
    fn logout_clears_the_session() {
        let svc = service();
        let (token, _) = svc
            .register("jane@corehr.com", "secret123", "Jane", UserRole::Employee)
            .unwrap();
        svc.logout().unwrap();
        assert!(svc.current().unwrap().is_none());
        assert!(svc.authenticate(&token).unwrap().is_none());
        // Logging out twice is fine
        svc.logout().unwrap();
    }

    #[test]
    fn update_profile_persists_to_both_copies() {
        let svc = service();
        svc.register("jane@corehr.com", "secret123", "Jane", UserRole::Employee)
            .unwrap();
        let updated = svc.update_profile("Jane D.").unwrap();
        assert_eq!(updated.name, "Jane D.");

        // Session copy
        let (_, session_user) = svc.current().unwrap().unwrap();
        assert_eq!(session_user.name, "Jane D.");

        // Credential copy survives a fresh login
        svc.logout().unwrap();
        let (_, user) = svc.login("jane@corehr.com", "secret123").unwrap();
        assert_eq!(user.name, "Jane D.");
    }

    #[test]
    fn update_profile_without_session_fails() {
        let svc = service();
        assert!(matches!(
            svc.update_profile("Nobody"),
            Err(AuthError::NotAuthenticated)
        ));
    }

    #[test]
    fn seed_default_admin_runs_once() {
        let svc = service();
        svc.seed_default_admin("admin@corehr.com", "admin123").unwrap();
        let (_, admin) = svc.login("admin@corehr.com", "admin123").unwrap();
        assert!(admin.is_admin());

        // Second seed is a no-op even with different credentials
        svc.seed_default_admin("other@corehr.com", "x").unwrap();
        assert!(svc.credentials().find("other@corehr.com").unwrap().is_none());
    }
}
