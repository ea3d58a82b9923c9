//! Builder for opening the flight database.

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::info;

use super::Database;
use crate::error::{FlightDeskError, Result};

/// Builder for locating and opening a [`Database`].
#[derive(Debug, Clone, Default)]
pub struct DatabaseBuilder {
    database_path: Option<PathBuf>,
}

impl DatabaseBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/flightdesk/flightdesk.db` or
    /// `~/.local/share/flightdesk/flightdesk.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Resolves the path, creates missing parent directories and opens the
    /// database.
    ///
    /// # Errors
    ///
    /// Returns `FlightDeskError::XdgDirectory` if no default path can be
    /// determined, `FlightDeskError::FileSystem` if the parent directory
    /// cannot be created, and `FlightDeskError::Database` if opening or
    /// schema initialization fails.
    pub fn build(self) -> Result<Database> {
        let db_path = match self.database_path {
            Some(path) => path,
            None => Self::default_database_path()?,
        };

        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| FlightDeskError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        info!("Opening flight database at {}", db_path.display());
        Database::new(&db_path)
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("flightdesk")
            .place_data_file("flightdesk.db")
            .map_err(|e| FlightDeskError::XdgDirectory(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::store::{FlightRepository, LookupProvider};

    #[test]
    fn test_build_creates_parent_directories() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let db_path = temp_dir.path().join("nested").join("deeper").join("flights.db");

        let db = DatabaseBuilder::new()
            .with_database_path(Some(&db_path))
            .build()
            .expect("Failed to build database");

        assert!(db_path.exists());
        assert!(db.list_flights().unwrap().is_empty());
    }

    #[test]
    fn test_reopen_keeps_data() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let db_path = temp_dir.path().join("flights.db");

        let mut db = DatabaseBuilder::new()
            .with_database_path(Some(&db_path))
            .build()
            .unwrap();
        db.add_airline("Delta", "DL").unwrap();
        drop(db);

        let db = DatabaseBuilder::new()
            .with_database_path(Some(&db_path))
            .build()
            .unwrap();
        assert_eq!(db.list_airlines().unwrap().len(), 1);
    }
}
