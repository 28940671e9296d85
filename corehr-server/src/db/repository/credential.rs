//! Credential Repository
//!
//! The credential table is one blob under `corehr_users`: email ->
//! `{ password_hash, user }`. One entry per email; emails are the unique
//! key. Passwords are stored as argon2 hashes only.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{RepoError, RepoResult};
use crate::db::{RecordStore, USERS_KEY};
use shared::models::User;

/// One row of the credential table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CredentialEntry {
    pub password_hash: String,
    pub user: User,
}

impl CredentialEntry {
    /// Verify a password against the stored argon2 hash
    pub fn verify_password(&self, password: &str) -> Result<bool, argon2::password_hash::Error> {
        use argon2::{
            Argon2,
            password_hash::{PasswordHash, PasswordVerifier},
        };

        let parsed_hash = PasswordHash::new(&self.password_hash)?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }

    /// Hash a password with argon2 and a fresh salt
    pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
        use argon2::{
            Argon2,
            password_hash::{PasswordHasher, SaltString, rand_core::OsRng},
        };

        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();
        let password_hash = argon2.hash_password(password.as_bytes(), &salt)?;
        Ok(password_hash.to_string())
    }
}

type CredentialTable = BTreeMap<String, CredentialEntry>;

#[derive(Clone)]
pub struct CredentialRepository {
    store: RecordStore,
}

impl CredentialRepository {
    pub fn new(store: RecordStore) -> Self {
        Self { store }
    }

    fn load(&self) -> RepoResult<CredentialTable> {
        Ok(self.store.get_json(USERS_KEY)?.unwrap_or_default())
    }

    fn save(&self, table: &CredentialTable) -> RepoResult<()> {
        Ok(self.store.put_json(USERS_KEY, table)?)
    }

    /// Find the credential entry for an email
    pub fn find(&self, email: &str) -> RepoResult<Option<CredentialEntry>> {
        Ok(self.load()?.remove(email))
    }

    /// True if the table has no entries yet (first run)
    pub fn is_empty(&self) -> RepoResult<bool> {
        Ok(self.load()?.is_empty())
    }

    /// Insert a new credential entry
    ///
    /// Fails with [`RepoError::Duplicate`] if the email is already
    /// registered.
    pub fn insert(&self, email: &str, password: &str, user: User) -> RepoResult<()> {
        let mut table = self.load()?;
        if table.contains_key(email) {
            return Err(RepoError::Duplicate(format!(
                "Email '{}' is already registered",
                email
            )));
        }

        let password_hash = CredentialEntry::hash_password(password)
            .map_err(|e| RepoError::Database(format!("Failed to hash password: {}", e)))?;

        table.insert(
            email.to_string(),
            CredentialEntry {
                password_hash,
                user,
            },
        );
        self.save(&table)
    }

    /// Replace the stored user object for an existing entry
    ///
    /// Keeps the credential-table copy in sync after a profile update.
    pub fn update_user(&self, email: &str, user: User) -> RepoResult<()> {
        let mut table = self.load()?;
        let entry = table
            .get_mut(email)
            .ok_or_else(|| RepoError::NotFound(format!("No credential entry for '{}'", email)))?;
        entry.user = user;
        self.save(&table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::UserRole;

    fn repo() -> CredentialRepository {
        CredentialRepository::new(RecordStore::open_in_memory().unwrap())
    }

    fn user(email: &str) -> User {
        User {
            id: shared::util::snowflake_id(),
            email: email.to_string(),
            name: "Test User".into(),
            role: UserRole::Employee,
        }
    }

    #[test]
    fn insert_then_find_verifies_password() {
        let repo = repo();
        repo.insert("a@corehr.com", "secret123", user("a@corehr.com"))
            .unwrap();

        let entry = repo.find("a@corehr.com").unwrap().unwrap();
        assert!(entry.verify_password("secret123").unwrap());
        assert!(!entry.verify_password("wrong").unwrap());
        // Plaintext never hits the store
        assert_ne!(entry.password_hash, "secret123");
    }

    #[test]
    fn duplicate_email_is_rejected() {
        let repo = repo();
        repo.insert("a@corehr.com", "secret123", user("a@corehr.com"))
            .unwrap();
        let err = repo
            .insert("a@corehr.com", "other", user("a@corehr.com"))
            .unwrap_err();
        assert!(matches!(err, RepoError::Duplicate(_)));
    }

    #[test]
    fn update_user_replaces_stored_copy() {
        let repo = repo();
        let mut u = user("a@corehr.com");
        repo.insert("a@corehr.com", "secret123", u.clone()).unwrap();

        u.name = "Renamed".into();
        repo.update_user("a@corehr.com", u).unwrap();
        let entry = repo.find("a@corehr.com").unwrap().unwrap();
        assert_eq!(entry.user.name, "Renamed");
    }

    #[test]
    fn update_user_on_unknown_email_is_not_found() {
        let repo = repo();
        let err = repo.update_user("ghost@corehr.com", user("ghost@corehr.com"));
        assert!(matches!(err, Err(RepoError::NotFound(_))));
    }
}
