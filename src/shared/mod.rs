//! Shared kernel: typed errors, exit codes and the crate-wide `Result` alias.

pub mod error;

/// Result alias used across every layer.
///
/// Typed failures are raised as [`error::ClearbomError`] and travel inside
/// `anyhow::Error`; callers that care about the kind use `downcast_ref`.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
