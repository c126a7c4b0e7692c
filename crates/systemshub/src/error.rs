//! Error types for systemshub.
//!
//! Startup-time failures (configuration and catalogue construction) live
//! here. Request-time failures are mapped to HTTP responses by
//! [`crate::api::ApiError`] and never reach this type.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for systemshub operations.
#[derive(Error, Debug)]
pub enum Error {
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

    // === Catalogue Errors ===
    /// The catalogue contains no items.
    #[error("catalogue is empty: at least one item must be configured")]
    EmptyCatalogue,

    /// Two items share the same key.
    #[error("duplicate item key '{key}'")]
    DuplicateKey {
        /// The repeated key.
        key: String,
    },

    /// An item key is not URL-safe.
    #[error("invalid item key '{key}': keys may only contain letters, digits, '_' and '-'")]
    InvalidKey {
        /// The offending key.
        key: String,
    },

    // === Server Errors ===
    /// Failed to bind the HTTP listener.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        /// Address that couldn't be bound.
        addr: String,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    // === I/O Errors ===
    /// File system or socket operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to read a configuration file.
    #[error("failed to read {path}: {source}")]
    FileRead {
        /// Path that couldn't be read.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },
}

/// A specialized Result type for systemshub operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a configuration validation error.
    #[must_use]
    pub fn config_validation(message: impl Into<String>) -> Self {
        Self::ConfigValidation {
            message: message.into(),
        }
    }

    /// Check if this error means the configuration or catalogue is unusable.
    ///
    /// These errors are fatal at startup and cannot be recovered at request time.
    #[must_use]
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            Self::ConfigLoad(_)
                | Self::ConfigValidation { .. }
                | Self::EmptyCatalogue
                | Self::DuplicateKey { .. }
                | Self::InvalidKey { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::EmptyCatalogue;
        assert!(err.to_string().contains("catalogue is empty"));
    }

    #[test]
    fn test_duplicate_key_display() {
        let err = Error::DuplicateKey {
            key: "combat-system".to_string(),
        };
        assert_eq!(err.to_string(), "duplicate item key 'combat-system'");
    }

    #[test]
    fn test_invalid_key_display() {
        let err = Error::InvalidKey {
            key: "bad key".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("bad key"));
        assert!(msg.contains("letters, digits"));
    }

    #[test]
    fn test_is_configuration_error() {
        assert!(Error::EmptyCatalogue.is_configuration_error());
        assert!(Error::config_validation("bad bind").is_configuration_error());
        assert!(Error::DuplicateKey {
            key: "a".to_string()
        }
        .is_configuration_error());
        let io_err = std::io::Error::new(std::io::ErrorKind::AddrInUse, "in use");
        assert!(!Error::Bind {
            addr: "127.0.0.1:3000".to_string(),
            source: io_err,
        }
        .is_configuration_error());
    }

    #[test]
    fn test_config_validation_error_display() {
        let err = Error::config_validation("invalid bind address");
        assert!(err.to_string().contains("invalid bind address"));
    }

    #[test]
    fn test_bind_error_display() {
        let io_err = std::io::Error::new(std::io::ErrorKind::AddrInUse, "address in use");
        let err = Error::Bind {
            addr: "127.0.0.1:8080".to_string(),
            source: io_err,
        };
        let msg = err.to_string();
        assert!(msg.contains("127.0.0.1:8080"));
        assert!(msg.contains("address in use"));
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_file_read_error_display() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = Error::FileRead {
            path: PathBuf::from("/root/forbidden.toml"),
            source: io_err,
        };
        assert!(err.to_string().contains("/root/forbidden.toml"));
    }
}
