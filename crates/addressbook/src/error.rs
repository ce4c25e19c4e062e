//! Error types for addressbook.
//!
//! This module defines all error types used throughout the addressbook crate,
//! providing detailed context for debugging and user-friendly error messages.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for addressbook operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Contact File Errors ===
    /// Failed to read the contact file.
    #[error("failed to read contact file {path}: {source}")]
    FileRead {
        /// Path to the contact file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the contact file.
    #[error("failed to write contact file {path}: {source}")]
    FileWrite {
        /// Path to the contact file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to create the directory holding the contact file.
    #[error("failed to create directory {path}: {source}")]
    DirectoryCreate {
        /// Path that couldn't be created.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    // === Encoding Errors ===
    /// The contact file exists but does not hold a valid directory.
    #[error("contact file {path} is malformed: {source}")]
    Decode {
        /// Path to the contact file.
        path: PathBuf,
        /// The underlying decoder error.
        #[source]
        source: std::io::Error,
    },

    /// The directory could not be encoded.
    #[error("failed to encode contacts: {0}")]
    Encode(#[source] std::io::Error),

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === Console Errors ===
    /// The input stream reached end of file.
    #[error("input closed")]
    InputClosed,

    // === I/O Errors ===
    /// Console or other file system operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for addressbook operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a contact file read error.
    #[must_use]
    pub fn file_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileRead {
            path: path.into(),
            source,
        }
    }

    /// Create a contact file write error.
    #[must_use]
    pub fn file_write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileWrite {
            path: path.into(),
            source,
        }
    }

    /// Check if this error means the input stream was closed.
    #[must_use]
    pub fn is_input_closed(&self) -> bool {
        matches!(self, Self::InputClosed)
    }

    /// Check if this error is a missing contact file.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::FileRead { source, .. } | Self::Io(source) => {
                source.kind() == std::io::ErrorKind::NotFound
            }
            _ => false,
        }
    }
}
