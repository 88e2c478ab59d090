//! Commit Module
//!
//! Commit types and conventional commit message formatting.

pub mod message;
pub mod types;

pub use message::{CommitRequest, format_commit_message};
pub use types::CommitType;
