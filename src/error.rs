//! Application error types using thiserror
//!
//! Error hierarchy:
//! - ManifestError: Issues with reading or parsing package.json
//! - ContextError: Required runtime context (GitHub environment) absent or malformed
//! - DeliveryError: Issues with posting statuses or comments to GitHub
//! - IoError: File system operation failures while writing the report

use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Manifest file related errors
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    /// Runtime context related errors
    #[error(transparent)]
    Context(#[from] ContextError),

    /// GitHub delivery related errors
    #[error(transparent)]
    Delivery(#[from] DeliveryError),

    /// IO related errors
    #[error(transparent)]
    Io(#[from] IoError),
}

/// Errors related to manifest file operations
#[derive(Error, Debug)]
pub enum ManifestError {
    /// Manifest file not found
    #[error("manifest file not found: {path}")]
    NotFound { path: PathBuf },

    /// Failed to read manifest file
    #[error("failed to read manifest file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Contents are not well-formed JSON or have an unexpected shape
    #[error("failed to parse manifest {path}: {message}")]
    ParseError { path: PathBuf, message: String },
}

/// Errors raised while loading the runtime context from the environment
#[derive(Error, Debug)]
pub enum ContextError {
    /// A required variable is absent or empty
    #[error("missing runtime context: you have to set {name} in your secrets configuration")]
    Missing { name: String },

    /// A variable is present but cannot be interpreted
    #[error("invalid runtime context in {name}: {message}")]
    Invalid { name: String, message: String },
}

/// Errors related to GitHub API delivery
#[derive(Error, Debug)]
pub enum DeliveryError {
    /// Transport level failure
    #[error("failed to reach GitHub for {target}: {message}")]
    Network { target: String, message: String },

    /// Timeout
    #[error("timeout while posting {target} to GitHub")]
    Timeout { target: String },

    /// GitHub answered with a non-success status
    #[error("GitHub rejected {target} with status {status}: {body}")]
    Rejected {
        target: String,
        status: u16,
        body: String,
    },
}

/// Errors related to IO operations
#[derive(Error, Debug)]
pub enum IoError {
    /// Failed to create the report directory
    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the report file
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ManifestError {
    /// Creates a new NotFound error
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        ManifestError::NotFound { path: path.into() }
    }

    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ManifestError::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new ParseError
    pub fn parse_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ManifestError::ParseError {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl ContextError {
    /// Creates a new Missing error
    pub fn missing(name: impl Into<String>) -> Self {
        ContextError::Missing { name: name.into() }
    }

    /// Creates a new Invalid error
    pub fn invalid(name: impl Into<String>, message: impl Into<String>) -> Self {
        ContextError::Invalid {
            name: name.into(),
            message: message.into(),
        }
    }
}

impl DeliveryError {
    /// Creates a new Network error
    pub fn network(target: impl Into<String>, message: impl Into<String>) -> Self {
        DeliveryError::Network {
            target: target.into(),
            message: message.into(),
        }
    }

    /// Creates a new Timeout error
    pub fn timeout(target: impl Into<String>) -> Self {
        DeliveryError::Timeout {
            target: target.into(),
        }
    }

    /// Creates a new Rejected error
    pub fn rejected(target: impl Into<String>, status: u16, body: impl Into<String>) -> Self {
        DeliveryError::Rejected {
            target: target.into(),
            status,
            body: body.into(),
        }
    }
}
