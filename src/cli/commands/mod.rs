//! Subcommand implementations.

/// Cache inspection command handler.
pub mod cache;

/// Translation command handler.
pub mod translate;
