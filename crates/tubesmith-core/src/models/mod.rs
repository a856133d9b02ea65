//! Data models for accounts and generated videos.
//!
//! - `Account`: persisted registry record, including the password hash
//! - `User`: the secret-free projection held by a session
//! - `Video`: a generated artifact

pub mod account;
pub mod video;

pub use account::{Account, User};
pub use video::Video;
