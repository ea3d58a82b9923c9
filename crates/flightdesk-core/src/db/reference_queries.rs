//! Airline and aircraft reference queries.

use log::{debug, info};
use rusqlite::params;

use crate::{
    error::{DatabaseResultExt, Result},
    models::{Aircraft, Airline},
    store::LookupProvider,
};

const SELECT_AIRLINES_SQL: &str = "SELECT id, name, iata_code FROM airlines ORDER BY id";
const SELECT_AIRCRAFT_SQL: &str = "SELECT id, model, capacity FROM aircraft ORDER BY id";
const INSERT_AIRLINE_SQL: &str = "INSERT INTO airlines (name, iata_code) VALUES (?1, ?2)";
const INSERT_AIRCRAFT_SQL: &str = "INSERT INTO aircraft (model, capacity) VALUES (?1, ?2)";
const COUNT_REFERENCE_ROWS_SQL: &str =
    "SELECT (SELECT COUNT(*) FROM airlines) + (SELECT COUNT(*) FROM aircraft)";

const DEMO_AIRLINES: &[(&str, &str)] = &[
    ("Delta", "DL"),
    ("United", "UA"),
    ("American", "AA"),
    ("Lufthansa", "LH"),
];

const DEMO_AIRCRAFT: &[(&str, u32)] = &[("A320", 150), ("737", 180), ("787", 242), ("A350", 300)];

impl super::Database {
    /// Adds an airline to the reference table.
    pub fn add_airline(&mut self, name: &str, iata_code: &str) -> Result<Airline> {
        self.connection
            .execute(INSERT_AIRLINE_SQL, params![name, iata_code])
            .db_context("Failed to insert airline")?;
        let id = self.connection.last_insert_rowid() as u64;
        debug!("Added airline {id} {name} ({iata_code})");

        Ok(Airline {
            id,
            name: name.to_string(),
            iata_code: iata_code.to_string(),
        })
    }

    /// Adds an aircraft type to the reference table.
    pub fn add_aircraft(&mut self, model: &str, capacity: u32) -> Result<Aircraft> {
        self.connection
            .execute(INSERT_AIRCRAFT_SQL, params![model, capacity])
            .db_context("Failed to insert aircraft")?;
        let id = self.connection.last_insert_rowid() as u64;
        debug!("Added aircraft {id} {model} ({capacity} seats)");

        Ok(Aircraft {
            id,
            model: model.to_string(),
            capacity,
        })
    }

    /// Fills both reference tables with a small demo set when they are empty.
    ///
    /// Returns `false` without touching the store if either table already
    /// holds rows.
    pub fn seed_demo_reference_data(&mut self) -> Result<bool> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let existing: i64 = tx
            .query_row(COUNT_REFERENCE_ROWS_SQL, [], |row| row.get(0))
            .db_context("Failed to count reference rows")?;
        if existing > 0 {
            debug!("Reference tables already populated, skipping demo seed");
            return Ok(false);
        }

        for (name, iata_code) in DEMO_AIRLINES {
            tx.execute(INSERT_AIRLINE_SQL, params![name, iata_code])
                .db_context("Failed to insert airline")?;
        }
        for (model, capacity) in DEMO_AIRCRAFT {
            tx.execute(INSERT_AIRCRAFT_SQL, params![model, capacity])
                .db_context("Failed to insert aircraft")?;
        }

        tx.commit().db_context("Failed to commit transaction")?;
        info!(
            "Seeded {} airlines and {} aircraft",
            DEMO_AIRLINES.len(),
            DEMO_AIRCRAFT.len()
        );
        Ok(true)
    }
}

impl LookupProvider for super::Database {
    fn list_airlines(&self) -> Result<Vec<Airline>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_AIRLINES_SQL)
            .db_context("Failed to prepare query")?;

        let airlines = stmt
            .query_map([], |row| {
                Ok(Airline {
                    id: row.get::<_, i64>(0)? as u64,
                    name: row.get(1)?,
                    iata_code: row.get(2)?,
                })
            })
            .db_context("Failed to query airlines")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch airlines")?;

        Ok(airlines)
    }

    fn list_aircraft(&self) -> Result<Vec<Aircraft>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_AIRCRAFT_SQL)
            .db_context("Failed to prepare query")?;

        let aircraft = stmt
            .query_map([], |row| {
                Ok(Aircraft {
                    id: row.get::<_, i64>(0)? as u64,
                    model: row.get(1)?,
                    capacity: row.get(2)?,
                })
            })
            .db_context("Failed to query aircraft")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch aircraft")?;

        Ok(aircraft)
    }
}
