//! Application configuration management.
//!
//! Configuration lives at `~/.config/tubesmith/config.json` and selects the
//! generation provider, its models, and where accounts are stored. The API
//! key is never written to this file; it comes from the environment.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::api::{GeminiClient, MockProvider, DEFAULT_BASE_URL, DEFAULT_IMAGE_MODEL, DEFAULT_TEXT_MODEL};
use crate::auth::{
    AccountRepository, Argon2SecretHasher, CredentialStore, FileAccountRepository,
    KeyringAccountRepository,
};
use crate::generator::{ArtifactGenerator, DEFAULT_TEMPERATURE};

/// Application name used for config/data directory paths
const APP_NAME: &str = "tubesmith";

/// Config file name
const CONFIG_FILE: &str = "config.json";

/// Environment variables checked, in order, for the provider API key
pub const API_KEY_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    #[default]
    Gemini,
    Mock,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AccountStoreKind {
    #[default]
    File,
    Keyring,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub provider: ProviderKind,
    pub text_model: String,
    pub image_model: String,
    pub base_url: String,
    pub temperature: f32,
    pub account_store: AccountStoreKind,
    pub last_email: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            provider: ProviderKind::default(),
            text_model: DEFAULT_TEXT_MODEL.to_string(),
            image_model: DEFAULT_IMAGE_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            account_store: AccountStoreKind::default(),
            last_email: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        if path.exists() {
            let contents = std::fs::read_to_string(path).context("Failed to read config file")?;
            serde_json::from_str(&contents).context("Failed to parse config file")
        } else {
            Ok(Self::default())
        }
    }

    /// Load the config, falling back to defaults when the file is unreadable
    /// or does not parse. A missing config directory is still an error.
    pub fn load_or_default() -> Result<Self> {
        Ok(Self::load_from_or_default(&Self::config_path()?))
    }

    pub fn load_from_or_default(path: &std::path::Path) -> Self {
        Self::load_from(path).unwrap_or_else(|e| {
            warn!(error = %e, path = %path.display(), "Ignoring unusable config file");
            Self::default()
        })
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &std::path::Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }

    /// Directory for the account file and logs
    pub fn data_dir() -> Result<PathBuf> {
        let data_dir = dirs::data_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find data directory"))?;
        Ok(data_dir.join(APP_NAME))
    }

    /// First non-empty API key found in the environment
    pub fn api_key_from_env() -> Option<String> {
        API_KEY_VARS
            .iter()
            .filter_map(|var| std::env::var(var).ok())
            .find(|key| !key.trim().is_empty())
    }

    /// Build the account repository selected by `account_store`
    pub fn account_repository(&self) -> Result<Box<dyn AccountRepository>> {
        Ok(match self.account_store {
            AccountStoreKind::File => Box::new(FileAccountRepository::new(Self::data_dir()?)),
            AccountStoreKind::Keyring => Box::new(KeyringAccountRepository::new()?),
        })
    }

    pub fn credential_store(&self) -> Result<CredentialStore> {
        Ok(CredentialStore::new(
            self.account_repository()?,
            Box::new(Argon2SecretHasher::new()),
        ))
    }

    /// Build the generator for the configured provider.
    /// The Gemini provider requires an API key.
    pub fn artifact_generator(&self, api_key: Option<String>) -> Result<ArtifactGenerator> {
        let generator = match self.provider {
            ProviderKind::Mock => {
                let mock = Arc::new(MockProvider::new());
                ArtifactGenerator::new(mock.clone(), mock)
            }
            ProviderKind::Gemini => {
                let Some(api_key) = api_key else {
                    bail!(
                        "No API key found. Set {} or {}, or run with --mock.",
                        API_KEY_VARS[0],
                        API_KEY_VARS[1]
                    );
                };
                let client = Arc::new(
                    GeminiClient::new(api_key)?
                        .with_base_url(self.base_url.clone())
                        .with_models(self.text_model.clone(), self.image_model.clone()),
                );
                ArtifactGenerator::new(client.clone(), client)
            }
        };
        Ok(generator.with_temperature(self.temperature))
    }
}
