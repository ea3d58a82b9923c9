//! Store contracts used by the console.
//!
//! The console only talks to persistence through these two traits.
//! [`crate::Database`] implements both against SQLite; tests substitute
//! in-memory fakes.

use crate::{
    error::Result,
    models::{Aircraft, Airline, FlightRecord},
};

/// Read-only access to the reference tables behind the selection menus.
///
/// Each call returns the complete current set in store order, with no
/// caching between calls.
pub trait LookupProvider {
    /// All airlines.
    fn list_airlines(&self) -> Result<Vec<Airline>>;

    /// All aircraft types.
    fn list_aircraft(&self) -> Result<Vec<Aircraft>>;
}

/// CRUD access to flight records keyed by identifier.
pub trait FlightRepository {
    /// All flights in store order.
    fn list_flights(&self) -> Result<Vec<FlightRecord>>;

    /// The flight with the given identifier, if any.
    fn get_flight(&self, id: u64) -> Result<Option<FlightRecord>>;

    /// Inserts a new flight and returns the identifier the store assigned.
    ///
    /// The record must be new (`id == 0`).
    fn insert_flight(&mut self, flight: &FlightRecord) -> Result<u64>;

    /// Replaces every field of the flight identified by `flight.id`.
    ///
    /// Fails with [`crate::FlightDeskError::FlightNotFound`] when no row
    /// matches.
    fn update_flight(&mut self, flight: &FlightRecord) -> Result<()>;

    /// Deletes the flight with the given identifier.
    ///
    /// Fails with [`crate::FlightDeskError::FlightNotFound`] when no row
    /// matches.
    fn delete_flight(&mut self, id: u64) -> Result<()>;
}
