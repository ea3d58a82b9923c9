//! Fixed-width listing of flight records.

use std::fmt;

use super::datetime::FlightTime;
use crate::models::FlightRecord;

/// Tabular view of a set of flights, one row per record, preceded by a header.
///
/// Columns are left-aligned with widths 5, 10, 20, 6, 6, 19, 19, 8 and 15;
/// prices are printed with two decimals. Values longer than their column are
/// not truncated.
///
/// ```rust
/// use flightdesk_core::display::FlightTable;
///
/// let output = FlightTable(&[]).to_string();
/// assert!(output.starts_with("ID    Flight#"));
/// assert!(output.contains("No flights found."));
/// ```
pub struct FlightTable<'a>(pub &'a [FlightRecord]);

impl fmt::Display for FlightTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:<5} {:<10} {:<20} {:<6} {:<6} {:<19} {:<19} {:<8} {:<15}",
            "ID", "Flight#", "Airline", "From", "To", "Departure", "Arrival", "Price", "Aircraft"
        )?;

        if self.0.is_empty() {
            return writeln!(f, "No flights found.");
        }

        for flight in self.0 {
            writeln!(
                f,
                "{:<5} {:<10} {:<20} {:<6} {:<6} {:<19} {:<19} {:<8.2} {:<15}",
                flight.id,
                flight.flight_number,
                flight.airline_name,
                flight.origin,
                flight.destination,
                FlightTime(&flight.departure_time),
                FlightTime(&flight.arrival_time),
                flight.price,
                flight.aircraft_model,
            )?;
        }
        Ok(())
    }
}
