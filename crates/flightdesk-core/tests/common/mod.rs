use flightdesk_core::{
    fields::parse_flight_time, Aircraft, Airline, Database, FlightRecord,
};
use tempfile::NamedTempFile;

/// Helper function to create a temporary database for testing
pub fn create_test_db() -> (NamedTempFile, Database) {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let db = Database::new(temp_file.path()).expect("Failed to create test database");
    (temp_file, db)
}

/// Reference rows matching the end-to-end scenario: airline 1 is Delta,
/// aircraft 2 is the 737.
pub fn seed_reference(db: &mut Database) -> (Airline, Aircraft) {
    let delta = db.add_airline("Delta", "DL").expect("Failed to add airline");
    db.add_aircraft("A320", 150).expect("Failed to add aircraft");
    let b737 = db.add_aircraft("737", 180).expect("Failed to add aircraft");
    (delta, b737)
}

/// A new (unsaved) flight pointing at the given reference rows.
pub fn new_flight(airline: &Airline, aircraft: &Aircraft, number: &str) -> FlightRecord {
    let mut flight = FlightRecord {
        flight_number: number.to_string(),
        origin: "JFK".to_string(),
        destination: "LAX".to_string(),
        departure_time: parse_flight_time("2024-01-01 10:00:00").unwrap(),
        arrival_time: parse_flight_time("2024-01-01 13:00:00").unwrap(),
        price: 199.99,
        ..FlightRecord::default()
    };
    flight.assign_airline(airline);
    flight.assign_aircraft(aircraft);
    flight
}
