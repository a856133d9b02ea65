use tracing::{debug, info, warn};

use super::{AccountRepository, AuthError, SecretHasher};
use crate::models::{Account, User};
use crate::utils::next_stamp;

/// Minimum password length accepted at sign-up, in characters
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Secret hashed once per store; unknown emails are verified against it
const DUMMY_SECRET: &str = "tubesmith-no-such-account";

/// Registry of local accounts backing sign-up and sign-in.
///
/// Both operations read the full collection from the repository; sign-up
/// writes the full collection back. There is no locking across processes.
pub struct CredentialStore {
    repository: Box<dyn AccountRepository>,
    hasher: Box<dyn SecretHasher>,
    /// Hash checked when no account matches, so sign-in costs one
    /// verification whether or not the email is registered
    dummy_hash: String,
}

impl CredentialStore {
    pub fn new(repository: Box<dyn AccountRepository>, hasher: Box<dyn SecretHasher>) -> Self {
        let dummy_hash = hasher.hash(DUMMY_SECRET).unwrap_or_else(|e| {
            warn!(error = %e, "Failed to prepare dummy hash");
            String::new()
        });
        Self {
            repository,
            hasher,
            dummy_hash,
        }
    }

    /// Create a new account and return it without its secret
    pub fn register(&self, name: &str, email: &str, password: &str) -> Result<User, AuthError> {
        let mut accounts = self.repository.load()?;

        if accounts.iter().any(|a| a.matches_email(email)) {
            debug!(email = email, "Sign-up rejected: email already registered");
            return Err(AuthError::DuplicateAccount);
        }

        if password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(AuthError::WeakCredential {
                min: MIN_PASSWORD_LENGTH,
            });
        }

        let account = Account {
            id: next_stamp().id,
            name: name.to_string(),
            email: email.to_string(),
            password_hash: self.hasher.hash(password)?,
        };
        let user = account.to_user();

        accounts.push(account);
        self.repository.save(&accounts)?;

        info!(user_id = %user.id, "Registered new account");
        Ok(user)
    }

    /// Check an email/password pair and return the matching account's user.
    /// Unknown emails and wrong passwords fail identically.
    pub fn authenticate(&self, email: &str, password: &str) -> Result<User, AuthError> {
        let accounts = self.repository.load()?;

        let Some(account) = accounts.iter().find(|a| a.matches_email(email)) else {
            // Same work as a wrong password, so timing does not reveal the email
            self.hasher.verify(password, &self.dummy_hash);
            return Err(AuthError::InvalidCredentials);
        };

        if !self.hasher.verify(password, &account.password_hash) {
            return Err(AuthError::InvalidCredentials);
        }

        debug!(user_id = %account.id, "Authenticated");
        Ok(account.to_user())
    }

    /// Number of registered accounts
    pub fn account_count(&self) -> Result<usize, AuthError> {
        Ok(self.repository.load()?.len())
    }
}
