//! Unified error types for lintbell
//!
//! This module defines all error types used throughout the crate.
//! Uses thiserror for ergonomic error definitions.

use thiserror::Error;

/// Top-level error type
#[derive(Error, Debug)]
pub enum NotifyError {
    /// Error from notification dispatch
    #[error("Dispatch error: {0}")]
    Dispatch(#[from] DispatchError),

    /// Error from configuration parsing/validation
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors from notification dispatch operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// A dispatch operation was called without a usable body
    #[error("Invalid notification request: {0}")]
    InvalidRequest(String),

    /// The rendering engine refused the handoff
    ///
    /// A single handoff attempt is made per dispatch; the failure propagates
    /// to the caller unchanged, never retried.
    #[error("Rendering engine unavailable: {0}")]
    RenderingUnavailable(String),
}

/// Errors from configuration parsing and loading
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// TOML parsing error
    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),
}

/// Result type alias using NotifyError
pub type Result<T> = std::result::Result<T, NotifyError>;
