//! Display formatting for the console.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! the wrappers in this module format them in context: the flight listing
//! table, numbered selection menus and timestamps.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │    Wrappers     │    │   Console text  │
//! │ (FlightRecord,  │───▶│ (FlightTable,   │───▶│  (fixed-width,  │
//! │  Airline, ...)  │    │  Menu, ...)     │    │   plain text)   │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: the fixed-width flight listing
//! - [`menu`]: 1-based selection menus over reference data
//! - [`datetime`]: flight timestamp formatting
//! - [`models`]: Display implementations for domain models

pub mod collections;
pub mod datetime;
pub mod menu;
pub mod models;

pub use collections::FlightTable;
pub use datetime::FlightTime;
pub use menu::{Menu, MenuItem};
