//! Storage backends for the account registry.
//!
//! Every backend keeps the whole account collection as one serialized JSON
//! array under a single key: a file, an OS keychain entry, or a string held
//! in memory. Reads and writes always move the entire collection.

use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use keyring::Entry;
use tracing::error;

use crate::models::Account;

/// Storage key for the account collection
pub const USERS_DB_KEY: &str = "youtube_automator_users";

/// Keychain service name for the keyring backend
const SERVICE_NAME: &str = "tubesmith";

/// File name used by the file backend
const USERS_FILE: &str = "users.json";

pub trait AccountRepository: Send + Sync {
    /// Load the full account collection. A missing collection is empty.
    fn load(&self) -> Result<Vec<Account>>;

    /// Replace the stored collection with `accounts`.
    fn save(&self, accounts: &[Account]) -> Result<()>;
}

/// Decode a stored blob. A blob that does not parse is treated as an empty
/// registry so a damaged store never locks users out of signing up.
fn decode_accounts(blob: &str) -> Vec<Account> {
    match serde_json::from_str(blob) {
        Ok(accounts) => accounts,
        Err(e) => {
            error!(error = %e, "Could not parse stored accounts");
            Vec::new()
        }
    }
}

fn encode_accounts(accounts: &[Account]) -> Result<String> {
    serde_json::to_string(accounts).context("Failed to serialize accounts")
}

// ============================================================================
// File backend
// ============================================================================

/// Accounts stored as a JSON array in `<data_dir>/users.json`.
pub struct FileAccountRepository {
    data_dir: PathBuf,
}

impl FileAccountRepository {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    fn users_path(&self) -> PathBuf {
        self.data_dir.join(USERS_FILE)
    }
}

impl AccountRepository for FileAccountRepository {
    fn load(&self) -> Result<Vec<Account>> {
        let path = self.users_path();
        if !path.exists() {
            return Ok(Vec::new());
        }
        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read account file: {}", path.display()))?;
        Ok(decode_accounts(&contents))
    }

    fn save(&self, accounts: &[Account]) -> Result<()> {
        std::fs::create_dir_all(&self.data_dir)
            .context("Failed to create data directory")?;
        let contents = encode_accounts(accounts)?;
        std::fs::write(self.users_path(), contents).context("Failed to write account file")?;
        Ok(())
    }
}

// ============================================================================
// Keychain backend
// ============================================================================

/// Accounts stored as a single secret in the OS keychain.
///
/// The entry is created once and reused, so every load sees the credential
/// the previous save wrote.
pub struct KeyringAccountRepository {
    entry: Entry,
}

impl KeyringAccountRepository {
    pub fn new() -> Result<Self> {
        let entry = Entry::new(SERVICE_NAME, USERS_DB_KEY).context("Failed to create keyring entry")?;
        Ok(Self { entry })
    }
}

impl AccountRepository for KeyringAccountRepository {
    fn load(&self) -> Result<Vec<Account>> {
        match self.entry.get_password() {
            Ok(blob) => Ok(decode_accounts(&blob)),
            Err(keyring::Error::NoEntry) => Ok(Vec::new()),
            Err(e) => Err(e).context("Failed to retrieve accounts from keychain"),
        }
    }

    fn save(&self, accounts: &[Account]) -> Result<()> {
        let blob = encode_accounts(accounts)?;
        self.entry
            .set_password(&blob)
            .context("Failed to store accounts in keychain")?;
        Ok(())
    }
}

// ============================================================================
// In-memory backend
// ============================================================================

/// Accounts held in a string blob for the lifetime of the process.
#[derive(Default)]
pub struct MemoryAccountRepository {
    blob: Mutex<Option<String>>,
}

impl MemoryAccountRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing serialized blob
    pub fn with_blob(blob: impl Into<String>) -> Self {
        Self {
            blob: Mutex::new(Some(blob.into())),
        }
    }

    /// The raw stored blob, if anything has been written
    pub fn blob(&self) -> Option<String> {
        self.blob.lock().ok().and_then(|guard| guard.clone())
    }
}

impl AccountRepository for MemoryAccountRepository {
    fn load(&self) -> Result<Vec<Account>> {
        let guard = self
            .blob
            .lock()
            .map_err(|_| anyhow!("Account store lock poisoned"))?;
        Ok(guard.as_deref().map(decode_accounts).unwrap_or_default())
    }

    fn save(&self, accounts: &[Account]) -> Result<()> {
        let blob = encode_accounts(accounts)?;
        let mut guard = self
            .blob
            .lock()
            .map_err(|_| anyhow!("Account store lock poisoned"))?;
        *guard = Some(blob);
        Ok(())
    }
}
