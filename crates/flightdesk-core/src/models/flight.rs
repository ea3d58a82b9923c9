//! Flight record model.

use jiff::civil::DateTime;
use serde::{Deserialize, Serialize};

use super::{Aircraft, Airline};

/// A single scheduled flight as stored in the flights table.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FlightRecord {
    /// Store-assigned identifier; 0 until the record has been inserted
    pub id: u64,

    /// Marketing flight number, e.g. `DL100`
    pub flight_number: String,

    /// ID of the operating airline
    pub airline_id: u64,

    /// Airline name copied at write time
    pub airline_name: String,

    /// Origin airport code (upper case)
    pub origin: String,

    /// Destination airport code (upper case)
    pub destination: String,

    /// Scheduled departure, civil time
    pub departure_time: DateTime,

    /// Scheduled arrival, civil time
    pub arrival_time: DateTime,

    /// Ticket price, never negative
    pub price: f64,

    /// ID of the aircraft type
    pub aircraft_id: u64,

    /// Aircraft model copied at write time
    pub aircraft_model: String,
}

impl FlightRecord {
    /// Returns true while the record has not been assigned an ID by the store.
    pub fn is_new(&self) -> bool {
        self.id == 0
    }

    /// Points the record at `airline` and snapshots its name.
    pub fn assign_airline(&mut self, airline: &Airline) {
        self.airline_id = airline.id;
        self.airline_name = airline.name.clone();
    }

    /// Points the record at `aircraft` and snapshots its model name.
    pub fn assign_aircraft(&mut self, aircraft: &Aircraft) {
        self.aircraft_id = aircraft.id;
        self.aircraft_model = aircraft.model.clone();
    }
}
