//! SQLite persistence for flights and their reference data.
//!
//! [`Database`] owns a single `rusqlite` connection and implements the
//! [`LookupProvider`](crate::store::LookupProvider) and
//! [`FlightRepository`](crate::store::FlightRepository) contracts. The schema
//! is embedded in the binary and applied on open.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod builder;
pub mod flight_queries;
pub mod reference_queries;
pub mod schema;

pub use builder::DatabaseBuilder;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Opens (or creates) the database file and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}
