//! Utility functions for identifiers and display formatting.

pub mod format;
pub mod stamp;

pub use format::{format_timestamp, truncate_string, word_count};
pub use stamp::{next_stamp, Stamp};
