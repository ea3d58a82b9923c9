//! Core library for the Flightdesk admin console.
//!
//! This crate provides the flight and reference-data models, the store
//! contracts the console is written against, their SQLite implementation, and
//! the parsing and display helpers shared by every console workflow.
//!
//! # Layout
//!
//! - [`models`]: `FlightRecord`, `Airline`, `Aircraft`
//! - [`store`]: the [`LookupProvider`] and [`FlightRepository`] traits
//! - [`db`]: [`Database`], the SQLite implementation of both traits
//! - [`fields`]: parsers for operator input (timestamps, prices, menu choices)
//! - [`display`]: listing table, selection menus, timestamp formatting
//!
//! # Quick Start
//!
//! ```rust
//! use flightdesk_core::{
//!     display::FlightTable, fields::parse_flight_time, DatabaseBuilder, FlightRecord,
//!     FlightRepository, LookupProvider,
//! };
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut db = DatabaseBuilder::new()
//!     .with_database_path(Some("flights.db"))
//!     .build()?;
//! db.seed_demo_reference_data()?;
//!
//! let airline = &db.list_airlines()?[0];
//! let aircraft = &db.list_aircraft()?[0];
//!
//! let mut flight = FlightRecord {
//!     flight_number: "DL100".to_string(),
//!     origin: "JFK".to_string(),
//!     destination: "LAX".to_string(),
//!     departure_time: parse_flight_time("2024-01-01 10:00:00")?,
//!     arrival_time: parse_flight_time("2024-01-01 13:00:00")?,
//!     price: 199.99,
//!     ..FlightRecord::default()
//! };
//! flight.assign_airline(airline);
//! flight.assign_aircraft(aircraft);
//! db.insert_flight(&flight)?;
//!
//! print!("{}", FlightTable(&db.list_flights()?));
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod display;
pub mod error;
pub mod fields;
pub mod models;
pub mod store;

// Re-export commonly used types
pub use db::{Database, DatabaseBuilder};
pub use display::{FlightTable, FlightTime, Menu, MenuItem};
pub use error::{FlightDeskError, Result};
pub use models::{Aircraft, Airline, FlightRecord};
pub use store::{FlightRepository, LookupProvider};
