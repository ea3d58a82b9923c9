//! Display implementations for domain models.

use std::fmt;

use super::datetime::FlightTime;
use crate::models::{Aircraft, Airline, FlightRecord};

impl fmt::Display for Airline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.iata_code)
    }
}

impl fmt::Display for Aircraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} seats)", self.model, self.capacity)
    }
}

impl fmt::Display for FlightRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} -> {} ({} to {}), {:.2} on {}",
            self.flight_number,
            self.airline_name,
            self.origin,
            self.destination,
            FlightTime(&self.departure_time),
            FlightTime(&self.arrival_time),
            self.price,
            self.aircraft_model,
        )
    }
}
