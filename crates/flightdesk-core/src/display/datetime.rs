//! DateTime display utilities.

use std::fmt;

use jiff::civil::DateTime;

use crate::fields::FLIGHT_TIME_FORMAT;

/// A wrapper around a civil `DateTime` that formats it the way the console
/// reads it back: `YYYY-MM-DD HH:MM:SS`, zero-padded, 24-hour clock.
///
/// ```rust
/// use flightdesk_core::display::FlightTime;
/// use jiff::civil::date;
///
/// let dt = date(2024, 3, 10).at(8, 30, 0, 0);
/// assert_eq!(FlightTime(&dt).to_string(), "2024-03-10 08:30:00");
/// ```
pub struct FlightTime<'a>(pub &'a DateTime);

impl fmt::Display for FlightTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Pad through the formatter so table column widths apply.
        f.pad(&self.0.strftime(FLIGHT_TIME_FORMAT).to_string())
    }
}
