//! Data models for flights and their reference data.
//!
//! This module contains the value types moved between the console and the
//! store. Display implementations live in [`crate::display`] so that the
//! models stay plain data.
//!
//! # Denormalized names
//!
//! A [`FlightRecord`] carries the airline name and aircraft model next to the
//! foreign keys. Both are copied from the referenced [`Airline`] and
//! [`Aircraft`] when the record is built for a write (see
//! [`FlightRecord::assign_airline`] and [`FlightRecord::assign_aircraft`]) and
//! are not refreshed if the reference row is renamed later.
//!
//! # Examples
//!
//! ```rust
//! use flightdesk_core::models::{Aircraft, Airline, FlightRecord};
//! use jiff::civil::date;
//!
//! let delta = Airline { id: 1, name: "Delta".to_string(), iata_code: "DL".to_string() };
//! let b737 = Aircraft { id: 2, model: "737".to_string(), capacity: 180 };
//!
//! let mut flight = FlightRecord {
//!     flight_number: "DL100".to_string(),
//!     origin: "JFK".to_string(),
//!     destination: "LAX".to_string(),
//!     departure_time: date(2024, 1, 1).at(10, 0, 0, 0),
//!     arrival_time: date(2024, 1, 1).at(13, 0, 0, 0),
//!     price: 199.99,
//!     ..FlightRecord::default()
//! };
//! flight.assign_airline(&delta);
//! flight.assign_aircraft(&b737);
//!
//! assert!(flight.is_new());
//! assert_eq!(flight.airline_name, "Delta");
//! assert_eq!(flight.aircraft_model, "737");
//! ```

pub mod flight;
pub mod reference;


pub use flight::FlightRecord;
pub use reference::{Aircraft, Airline};
