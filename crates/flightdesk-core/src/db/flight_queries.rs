//! Flight CRUD operations and queries.

use jiff::civil::DateTime;
use log::debug;
use rusqlite::{params, types::Type, OptionalExtension, Row};

use crate::{
    error::{DatabaseResultExt, FlightDeskError, Result},
    fields::FLIGHT_TIME_FORMAT,
    models::FlightRecord,
    store::FlightRepository,
};

const FLIGHT_COLUMNS: &str = "id, flight_number, airline_id, airline_name, origin, destination, departure_time, arrival_time, price, aircraft_id, aircraft_model";
const INSERT_FLIGHT_SQL: &str = "INSERT INTO flights (flight_number, airline_id, airline_name, origin, destination, departure_time, arrival_time, price, aircraft_id, aircraft_model) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)";
const UPDATE_FLIGHT_SQL: &str = "UPDATE flights SET flight_number = ?1, airline_id = ?2, airline_name = ?3, origin = ?4, destination = ?5, departure_time = ?6, arrival_time = ?7, price = ?8, aircraft_id = ?9, aircraft_model = ?10 WHERE id = ?11";
const DELETE_FLIGHT_SQL: &str = "DELETE FROM flights WHERE id = ?1";

impl super::Database {
    fn flight_from_row(row: &Row<'_>) -> rusqlite::Result<FlightRecord> {
        Ok(FlightRecord {
            id: row.get::<_, i64>(0)? as u64,
            flight_number: row.get(1)?,
            airline_id: row.get::<_, i64>(2)? as u64,
            airline_name: row.get(3)?,
            origin: row.get(4)?,
            destination: row.get(5)?,
            departure_time: time_from_row(row, 6)?,
            arrival_time: time_from_row(row, 7)?,
            price: row.get(8)?,
            aircraft_id: row.get::<_, i64>(9)? as u64,
            aircraft_model: row.get(10)?,
        })
    }
}

/// Reads a timestamp column stored in the console text format.
fn time_from_row(row: &Row<'_>, index: usize) -> rusqlite::Result<DateTime> {
    let text: String = row.get(index)?;
    DateTime::strptime(FLIGHT_TIME_FORMAT, &text)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(index, Type::Text, Box::new(e)))
}

fn time_to_sql(time: &DateTime) -> String {
    time.strftime(FLIGHT_TIME_FORMAT).to_string()
}

impl FlightRepository for super::Database {
    fn list_flights(&self) -> Result<Vec<FlightRecord>> {
        let mut stmt = self
            .connection
            .prepare(&format!("SELECT {FLIGHT_COLUMNS} FROM flights ORDER BY id"))
            .db_context("Failed to prepare query")?;

        let flights = stmt
            .query_map([], Self::flight_from_row)
            .db_context("Failed to query flights")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch flights")?;

        Ok(flights)
    }

    fn get_flight(&self, id: u64) -> Result<Option<FlightRecord>> {
        self.connection
            .query_row(
                &format!("SELECT {FLIGHT_COLUMNS} FROM flights WHERE id = ?1"),
                params![id as i64],
                Self::flight_from_row,
            )
            .optional()
            .db_context("Failed to query flight")
    }

    fn insert_flight(&mut self, flight: &FlightRecord) -> Result<u64> {
        if !flight.is_new() {
            return Err(FlightDeskError::invalid_input(
                "id",
                format!("flight {} already has an identifier", flight.id),
            ));
        }

        self.connection
            .execute(
                INSERT_FLIGHT_SQL,
                params![
                    flight.flight_number,
                    flight.airline_id as i64,
                    flight.airline_name,
                    flight.origin,
                    flight.destination,
                    time_to_sql(&flight.departure_time),
                    time_to_sql(&flight.arrival_time),
                    flight.price,
                    flight.aircraft_id as i64,
                    flight.aircraft_model,
                ],
            )
            .db_context("Failed to insert flight")?;

        let id = self.connection.last_insert_rowid() as u64;
        debug!("Inserted flight {id} ({})", flight.flight_number);
        Ok(id)
    }

    fn update_flight(&mut self, flight: &FlightRecord) -> Result<()> {
        let rows_affected = self
            .connection
            .execute(
                UPDATE_FLIGHT_SQL,
                params![
                    flight.flight_number,
                    flight.airline_id as i64,
                    flight.airline_name,
                    flight.origin,
                    flight.destination,
                    time_to_sql(&flight.departure_time),
                    time_to_sql(&flight.arrival_time),
                    flight.price,
                    flight.aircraft_id as i64,
                    flight.aircraft_model,
                    flight.id as i64,
                ],
            )
            .db_context("Failed to update flight")?;

        if rows_affected == 0 {
            return Err(FlightDeskError::FlightNotFound { id: flight.id });
        }
        debug!("Updated flight {}", flight.id);
        Ok(())
    }

    fn delete_flight(&mut self, id: u64) -> Result<()> {
        let rows_affected = self
            .connection
            .execute(DELETE_FLIGHT_SQL, params![id as i64])
            .db_context("Failed to delete flight")?;

        if rows_affected == 0 {
            return Err(FlightDeskError::FlightNotFound { id });
        }
        debug!("Deleted flight {id}");
        Ok(())
    }
}
