//! Error types for componentgen operations.
//!
//! This module defines [`ComponentgenError`], the primary error type used
//! throughout the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Usage errors (an unknown category) are detected before any filesystem
//!   side effect and carry enough context for an actionable message
//! - Filesystem errors are fatal for the invocation and carry the path
//! - Use `anyhow::Error` (via `ComponentgenError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for componentgen operations.
#[derive(Debug, Error)]
pub enum ComponentgenError {
    /// Requested component category is not registered.
    #[error("Unknown component category '{name}'. Choose one of: {}", .known.join(", "))]
    UnknownCategory { name: String, known: Vec<String> },

    /// A component name that cannot be used as an identifier or file name.
    #[error("Invalid component name '{name}': expected a capitalized identifier such as Button")]
    InvalidComponentName { name: String },

    /// Failed to create the component directory.
    #[error("Failed to create directory {path}: {source}")]
    DirectoryCreationFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the component file.
    #[error("Failed to write {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A built-in template or the template manifest is malformed.
    #[error("Invalid template '{template}': {message}")]
    TemplateInvalid { template: String, message: String },

    /// Failed to parse the project configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for componentgen operations.
pub type Result<T> = std::result::Result<T, ComponentgenError>;
