//! Core library for tubesmith.
//!
//! Local accounts, session state, and generation of short-video content
//! (title, script, thumbnail) through an external generative provider.
//! The shell in `tubesmith-cli` drives these pieces; nothing here does I/O
//! on a terminal.

pub mod api;
pub mod auth;
pub mod chat;
pub mod config;
pub mod generator;
pub mod models;
pub mod utils;

pub use auth::{AuthError, CredentialStore, Session};
pub use chat::{ChatStep, Conversation};
pub use config::Config;
pub use generator::{ArtifactGenerator, GenerationError};
pub use models::{User, Video};
