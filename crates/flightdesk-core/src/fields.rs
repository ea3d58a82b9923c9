//! Parsers for the values an operator types at the console.
//!
//! Every parser takes the raw line (already trimmed by the caller or not) and
//! returns either the typed value or [`FlightDeskError::InvalidInput`]. The
//! console decides what a failure means: retry for a required field, keep the
//! current value for an optional one.

use jiff::civil::DateTime;

use crate::error::{FlightDeskError, Result};

/// Text format used for flight timestamps, both for input and for display.
pub const FLIGHT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Human-readable form of [`FLIGHT_TIME_FORMAT`] for prompts and messages.
pub const FLIGHT_TIME_PATTERN: &str = "yyyy-MM-dd HH:mm:ss";

/// Parses a `yyyy-MM-dd HH:mm:ss` civil timestamp.
///
/// The input must match the format exactly: four-digit year, zero-padded
/// fields and no leap second.
///
/// # Examples
///
/// ```rust
/// use flightdesk_core::fields::parse_flight_time;
/// use jiff::civil::date;
///
/// let dt = parse_flight_time("2024-03-10 08:30:00").unwrap();
/// assert_eq!(dt, date(2024, 3, 10).at(8, 30, 0, 0));
/// assert!(parse_flight_time("2024-13-40 99:99:99").is_err());
/// ```
pub fn parse_flight_time(input: &str) -> Result<DateTime> {
    let input = input.trim();
    let dt = DateTime::strptime(FLIGHT_TIME_FORMAT, input)
        .map_err(|e| FlightDeskError::invalid_input("timestamp", e.to_string()))?;

    // strptime is lenient; require the canonical rendering
    if dt.strftime(FLIGHT_TIME_FORMAT).to_string() != input {
        return Err(FlightDeskError::invalid_input(
            "timestamp",
            format!("expected {FLIGHT_TIME_PATTERN}"),
        ));
    }
    Ok(dt)
}

/// Parses a ticket price. Negative, infinite and NaN values are rejected.
pub fn parse_price(input: &str) -> Result<f64> {
    let price: f64 = input
        .trim()
        .parse()
        .map_err(|e: std::num::ParseFloatError| FlightDeskError::invalid_input("price", e.to_string()))?;

    if !price.is_finite() {
        return Err(FlightDeskError::invalid_input("price", "must be a finite number"));
    }
    // also catches -0
    if price.is_sign_negative() {
        return Err(FlightDeskError::invalid_input("price", "must not be negative"));
    }
    Ok(price)
}

/// Parses a flight identifier. Identifiers are stored as SQLite integers, so
/// anything above `i64::MAX` is rejected.
pub fn parse_flight_id(input: &str) -> Result<u64> {
    let id: u64 = input
        .trim()
        .parse()
        .map_err(|e: std::num::ParseIntError| FlightDeskError::invalid_input("id", e.to_string()))?;

    i64::try_from(id).map_err(|_| FlightDeskError::invalid_input("id", "out of range"))?;
    Ok(id)
}

/// Resolves a 1-based menu choice against a menu of `len` entries and returns
/// the zero-based index.
pub fn parse_menu_choice(input: &str, len: usize) -> Result<usize> {
    let choice: usize = input
        .trim()
        .parse()
        .map_err(|e: std::num::ParseIntError| FlightDeskError::invalid_input("choice", e.to_string()))?;

    if (1..=len).contains(&choice) {
        Ok(choice - 1)
    } else {
        Err(FlightDeskError::invalid_input(
            "choice",
            format!("expected a number between 1 and {len}"),
        ))
    }
}

/// Normalizes an airport code: surrounding whitespace removed, upper case.
pub fn normalize_airport_code(input: &str) -> String {
    input.trim().to_uppercase()
}
