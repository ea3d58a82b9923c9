//! Error types for the flightdesk library.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for all store and parsing operations.
#[derive(Error, Debug)]
pub enum FlightDeskError {
    /// Database connection or query errors
    #[error("{message}: {source}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// No flight row matched the given ID
    #[error("Flight with ID {id} not found")]
    FlightNotFound { id: u64 },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Text that does not parse into the requested field type
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
}

/// Builder for creating database errors with context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> FlightDeskError {
        FlightDeskError::Database {
            message: self.message,
            source,
        }
    }
}

impl FlightDeskError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates an input validation error for a named field.
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| FlightDeskError::database(message).with_source(e))
    }
}

/// Result type alias for flightdesk operations
pub type Result<T> = std::result::Result<T, FlightDeskError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_error_keeps_context_and_source() {
        let err = Err::<(), _>(rusqlite::Error::InvalidQuery)
            .db_context("Failed to list flights")
            .unwrap_err();

        assert!(err.to_string().starts_with("Failed to list flights: "));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_not_found_message() {
        let err = FlightDeskError::FlightNotFound { id: 42 };
        assert_eq!(err.to_string(), "Flight with ID 42 not found");
    }
}
