//! Credential service
//!
//! Registration and authentication against the shared account store, plus
//! the reserved admin identity that bypasses the store entirely.
//!
//! Passwords are stored and compared as plaintext because that is the
//! on-disk format of the account store. Any real deployment must replace
//! this with proper credential hashing before exposure.

use crate::error::{PocketbookError, PocketbookResult};
use crate::models::User;
use crate::storage::Storage;

/// Reserved admin username; never written to the account store
pub const ADMIN_USERNAME: &str = "admin";

/// Reserved admin password
pub const ADMIN_PASSWORD: &str = "admin123";

/// Service for account registration and login
pub struct CredentialService<'a> {
    storage: &'a Storage,
}

impl<'a> CredentialService<'a> {
    /// Create a new credential service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Register a new user with default balance, points, and limit
    ///
    /// Rejects empty fields, fields containing the record delimiter (they
    /// would corrupt the account store), and usernames already present —
    /// including the reserved admin name.
    pub fn register(&self, username: &str, password: &str) -> PocketbookResult<User> {
        let username = username.trim();
        let password = password.trim();

        if username.is_empty() || password.is_empty() {
            return Err(PocketbookError::Validation(
                "Username and password cannot be empty".into(),
            ));
        }
        if username.contains(',') || password.contains(',') {
            return Err(PocketbookError::Validation(
                "Username and password cannot contain ','".into(),
            ));
        }

        if username == ADMIN_USERNAME || self.storage.accounts.contains(username)? {
            return Err(PocketbookError::DuplicateUsername(username.to_string()));
        }

        let user = User::new(username, password);
        self.storage.accounts.append(&user)?;
        Ok(user)
    }

    /// Authenticate a username/password pair
    ///
    /// The reserved admin pair short-circuits the file lookup and yields a
    /// synthetic admin identity. Everything else is a linear scan of the
    /// account store; a corrupt matching record surfaces as `Corrupt`
    /// rather than a crash.
    pub fn authenticate(&self, username: &str, password: &str) -> PocketbookResult<User> {
        if username == ADMIN_USERNAME && password == ADMIN_PASSWORD {
            return Ok(admin_identity());
        }

        match self.storage.accounts.find(username)? {
            Some(user) if user.password == password => Ok(user),
            _ => Err(PocketbookError::InvalidCredentials),
        }
    }
}

/// The hard-coded admin identity
fn admin_identity() -> User {
    User {
        username: ADMIN_USERNAME.to_string(),
        password: String::new(),
        balance: crate::models::Money::zero(),
        reward_points: 0,
        daily_limit: 0,
        is_admin: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::PocketbookPaths;
    use crate::models::Money;
    use tempfile::TempDir;

    fn test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = PocketbookPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_register_defaults() {
        let (_tmp, storage) = test_storage();
        let service = CredentialService::new(&storage);

        let user = service.register("alice", "pw1").unwrap();
        assert_eq!(user.balance, Money::from_cents(100_000));
        assert_eq!(user.reward_points, 0);
        assert_eq!(user.daily_limit, 0);
        assert!(!user.is_admin);
    }

    #[test]
    fn test_register_duplicate() {
        let (_tmp, storage) = test_storage();
        let service = CredentialService::new(&storage);

        service.register("alice", "pw1").unwrap();
        let err = service.register("alice", "other").unwrap_err();
        assert!(matches!(err, PocketbookError::DuplicateUsername(_)));
    }

    #[test]
    fn test_register_reserved_admin_name() {
        let (_tmp, storage) = test_storage();
        let service = CredentialService::new(&storage);

        let err = service.register(ADMIN_USERNAME, "whatever").unwrap_err();
        assert!(matches!(err, PocketbookError::DuplicateUsername(_)));
    }

    #[test]
    fn test_register_rejects_empty_and_delimiter() {
        let (_tmp, storage) = test_storage();
        let service = CredentialService::new(&storage);

        assert!(service.register("", "pw").is_err());
        assert!(service.register("alice", "  ").is_err());
        assert!(service.register("al,ice", "pw").is_err());
    }

    #[test]
    fn test_authenticate() {
        let (_tmp, storage) = test_storage();
        let service = CredentialService::new(&storage);

        service.register("alice", "pw1").unwrap();

        let user = service.authenticate("alice", "pw1").unwrap();
        assert_eq!(user.username, "alice");

        let err = service.authenticate("alice", "wrong").unwrap_err();
        assert!(matches!(err, PocketbookError::InvalidCredentials));

        let err = service.authenticate("nobody", "pw1").unwrap_err();
        assert!(matches!(err, PocketbookError::InvalidCredentials));
    }

    #[test]
    fn test_admin_bypasses_store() {
        let (_tmp, storage) = test_storage();
        let service = CredentialService::new(&storage);

        let admin = service.authenticate(ADMIN_USERNAME, ADMIN_PASSWORD).unwrap();
        assert!(admin.is_admin);
        // never file-backed
        assert!(!storage.accounts.contains(ADMIN_USERNAME).unwrap());
    }
}
