//! Authentication module for local accounts and session state.
//!
//! This module provides:
//! - `CredentialStore`: sign-up and sign-in against an account registry
//! - `AccountRepository`: where the registry lives (file, keychain, memory)
//! - `SecretHasher`: Argon2id hashing of stored passwords
//! - `Session`: the signed-in user and the videos generated this session

pub mod credentials;
pub mod error;
pub mod hasher;
pub mod repository;
pub mod session;

pub use credentials::{CredentialStore, MIN_PASSWORD_LENGTH};
pub use error::AuthError;
pub use hasher::{Argon2SecretHasher, SecretHasher};
pub use repository::{
    AccountRepository, FileAccountRepository, KeyringAccountRepository, MemoryAccountRepository,
};
pub use session::Session;
