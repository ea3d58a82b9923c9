//! The four menu workflows: list, add, update and delete.
//!
//! Each workflow reads reference data fresh from the store, collects fields
//! through the [`Console`](crate::console::Console) combinators and issues at
//! most one repository write. Store failures are reported to the operator at
//! the end of the workflow and never leave the session.

use std::io::{BufRead, Write};

use anyhow::Result;
use flightdesk_core::{
    fields::{
        normalize_airport_code, parse_flight_id, parse_flight_time, parse_price,
        FLIGHT_TIME_PATTERN,
    },
    FlightDeskError, FlightRecord, FlightRepository, FlightTable, FlightTime, LookupProvider,
};
use log::{info, warn};

use crate::session::Session;

const INVALID_NUMBER: &str = "Please enter a valid number.";

impl<S, R, W> Session<S, R, W>
where
    S: FlightRepository + LookupProvider,
    R: BufRead,
    W: Write,
{
    /// Prints every flight as a fixed-width table.
    pub(crate) fn list_flights(&mut self) -> Result<()> {
        self.console.say("\n--- Flights ---")?;
        match self.store.list_flights() {
            Ok(flights) => write!(self.console.output(), "{}", FlightTable(&flights))?,
            Err(e) => {
                warn!("Listing flights failed: {e}");
                self.console.say(format!("Error loading flights: {e}"))?;
            }
        }
        Ok(())
    }

    pub(crate) fn add_flight(&mut self) -> Result<()> {
        self.console.say("\n--- Add New Flight ---")?;
        let outcome = self.collect_and_insert();
        self.report(outcome)
    }

    pub(crate) fn update_flight(&mut self) -> Result<()> {
        self.console.say("\n--- Update Flight ---")?;
        self.list_flights()?;
        let outcome = self.edit_and_update();
        self.report(outcome)
    }

    pub(crate) fn delete_flight(&mut self) -> Result<()> {
        self.console.say("\n--- Delete Flight ---")?;
        self.list_flights()?;
        let outcome = self.confirm_and_delete();
        self.report(outcome)
    }

    fn collect_and_insert(&mut self) -> Result<()> {
        let airlines = self.store.list_airlines()?;
        if airlines.is_empty() {
            self.console.say("No airlines available.")?;
            return Ok(());
        }
        let airline = &airlines[self.console.choose(&airlines)?];

        let fleet = self.store.list_aircraft()?;
        if fleet.is_empty() {
            self.console.say("No aircraft available.")?;
            return Ok(());
        }
        let aircraft = &fleet[self.console.choose(&fleet)?];

        let flight_number = self.console.prompt("Flight number: ")?;
        let origin = normalize_airport_code(&self.console.prompt("Origin (IATA): ")?);
        let destination = normalize_airport_code(&self.console.prompt("Destination (IATA): ")?);

        let invalid_time = format!("Invalid date format. Use {FLIGHT_TIME_PATTERN}");
        let departure_time = self.console.required(
            &format!("Departure ({FLIGHT_TIME_PATTERN}): "),
            &invalid_time,
            parse_flight_time,
        )?;
        let arrival_time = self.console.required(
            &format!("Arrival   ({FLIGHT_TIME_PATTERN}): "),
            &invalid_time,
            parse_flight_time,
        )?;
        let price = self.console.required("Price: ", INVALID_NUMBER, parse_price)?;

        let mut flight = FlightRecord {
            flight_number,
            origin,
            destination,
            departure_time,
            arrival_time,
            price,
            ..FlightRecord::default()
        };
        flight.assign_airline(airline);
        flight.assign_aircraft(aircraft);

        let id = self.store.insert_flight(&flight)?;
        info!("Added flight {id} ({})", flight.flight_number);
        self.console.say(format!("Flight added successfully (ID {id})."))?;
        Ok(())
    }

    fn edit_and_update(&mut self) -> Result<()> {
        let id = self
            .console
            .required("Enter flight ID to update: ", INVALID_NUMBER, parse_flight_id)?;

        let Some(existing) = self.store.get_flight(id)? else {
            self.console.say("Flight ID not found.")?;
            return Ok(());
        };

        self.console.say("Leave field empty to keep current value.")?;
        let mut updated = existing.clone();

        let airlines = self.store.list_airlines()?;
        if let Some(index) = self.console.choose_optional(&airlines, existing.airline_id)? {
            updated.assign_airline(&airlines[index]);
        }

        let fleet = self.store.list_aircraft()?;
        if let Some(index) = self.console.choose_optional(&fleet, existing.aircraft_id)? {
            updated.assign_aircraft(&fleet[index]);
        }

        updated.flight_number = self.console.optional_text(
            &format!("Flight number [{}]: ", existing.flight_number),
            &existing.flight_number,
        )?;
        updated.origin = normalize_airport_code(&self.console.optional_text(
            &format!("Origin (IATA) [{}]: ", existing.origin),
            &existing.origin,
        )?);
        updated.destination = normalize_airport_code(&self.console.optional_text(
            &format!("Destination (IATA) [{}]: ", existing.destination),
            &existing.destination,
        )?);

        let invalid_time = "Invalid date format, keeping current.";
        updated.departure_time = self.console.optional(
            &format!("Departure [{}]: ", FlightTime(&existing.departure_time)),
            existing.departure_time,
            invalid_time,
            parse_flight_time,
        )?;
        updated.arrival_time = self.console.optional(
            &format!("Arrival   [{}]: ", FlightTime(&existing.arrival_time)),
            existing.arrival_time,
            invalid_time,
            parse_flight_time,
        )?;
        updated.price = self.console.optional(
            &format!("Price [{:.2}]: ", existing.price),
            existing.price,
            "Invalid number, keeping current.",
            parse_price,
        )?;

        self.store.update_flight(&updated)?;
        info!("Updated flight {}", updated.id);
        self.console.say("Flight updated.")?;
        Ok(())
    }

    fn confirm_and_delete(&mut self) -> Result<()> {
        let id = self
            .console
            .required("Enter flight ID to delete: ", INVALID_NUMBER, parse_flight_id)?;

        if !self.console.confirm("Are you sure? (y/n): ")? {
            self.console.say("Cancelled.")?;
            return Ok(());
        }

        self.store.delete_flight(id)?;
        info!("Deleted flight {id}");
        self.console.say("Flight deleted.")?;
        Ok(())
    }

    /// Reports a store failure to the operator and swallows it; console
    /// failures are passed on to the session loop.
    fn report(&mut self, outcome: Result<()>) -> Result<()> {
        let Err(err) = outcome else {
            return Ok(());
        };

        match err.downcast::<FlightDeskError>() {
            Ok(FlightDeskError::FlightNotFound { id }) => {
                warn!("No flight with ID {id}");
                self.console.say("Flight ID not found.")?;
                Ok(())
            }
            Ok(store_err) => {
                warn!("Workflow aborted: {store_err}");
                self.console.say(format!("Database error: {store_err}"))?;
                Ok(())
            }
            Err(other) => Err(other),
        }
    }
}
