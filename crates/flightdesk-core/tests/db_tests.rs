mod common;

use common::{create_test_db, new_flight, seed_reference};
use flightdesk_core::{
    fields::parse_flight_time, FlightDeskError, FlightRepository, LookupProvider,
};

#[test]
fn test_database_initialization() {
    let (temp_file, db) = create_test_db();

    assert!(temp_file.path().exists());
    assert!(db.list_flights().unwrap().is_empty());
    assert!(db.list_airlines().unwrap().is_empty());
    assert!(db.list_aircraft().unwrap().is_empty());
}

#[test]
fn test_reopen_is_idempotent() {
    let (temp_file, mut db) = create_test_db();
    seed_reference(&mut db);
    drop(db);

    let db = flightdesk_core::Database::new(temp_file.path()).expect("Failed to reopen");
    assert_eq!(db.list_aircraft().unwrap().len(), 2);
}

#[test]
fn test_reference_data_in_store_order() {
    let (_temp_file, mut db) = create_test_db();
    let (delta, b737) = seed_reference(&mut db);

    assert_eq!(delta.id, 1);
    assert_eq!(b737.id, 2);

    let airlines = db.list_airlines().unwrap();
    assert_eq!(airlines, vec![delta]);

    let aircraft = db.list_aircraft().unwrap();
    let models: Vec<&str> = aircraft.iter().map(|a| a.model.as_str()).collect();
    assert_eq!(models, ["A320", "737"]);
    assert_eq!(aircraft[1].capacity, 180);
}

#[test]
fn test_insert_assigns_identifier() {
    let (_temp_file, mut db) = create_test_db();
    let (delta, b737) = seed_reference(&mut db);

    let first = db.insert_flight(&new_flight(&delta, &b737, "DL100")).unwrap();
    let second = db.insert_flight(&new_flight(&delta, &b737, "DL200")).unwrap();

    assert!(first > 0);
    assert!(second > first);
}

#[test]
fn test_insert_then_list_round_trips_all_fields() {
    let (_temp_file, mut db) = create_test_db();
    let (delta, b737) = seed_reference(&mut db);
    let flight = new_flight(&delta, &b737, "DL100");

    let id = db.insert_flight(&flight).unwrap();
    let flights = db.list_flights().unwrap();

    assert_eq!(flights.len(), 1);
    let stored = &flights[0];
    assert_eq!(stored.id, id);
    assert_eq!(stored.flight_number, "DL100");
    assert_eq!(stored.airline_id, 1);
    assert_eq!(stored.airline_name, "Delta");
    assert_eq!(stored.origin, "JFK");
    assert_eq!(stored.destination, "LAX");
    assert_eq!(stored.departure_time, flight.departure_time);
    assert_eq!(stored.arrival_time, flight.arrival_time);
    assert_eq!(stored.price, 199.99);
    assert_eq!(stored.aircraft_id, 2);
    assert_eq!(stored.aircraft_model, "737");
}

#[test]
fn test_insert_rejects_saved_record() {
    let (_temp_file, mut db) = create_test_db();
    let (delta, b737) = seed_reference(&mut db);
    let mut flight = new_flight(&delta, &b737, "DL100");
    flight.id = 7;

    let err = db.insert_flight(&flight).unwrap_err();
    assert!(matches!(err, FlightDeskError::InvalidInput { .. }));
    assert!(db.list_flights().unwrap().is_empty());
}

#[test]
fn test_insert_rejects_unknown_airline() {
    let (_temp_file, mut db) = create_test_db();
    let (mut delta, b737) = seed_reference(&mut db);
    delta.id = 99;

    let err = db.insert_flight(&new_flight(&delta, &b737, "XX1")).unwrap_err();
    assert!(matches!(err, FlightDeskError::Database { .. }));
}

#[test]
fn test_insert_rejects_negative_price() {
    let (_temp_file, mut db) = create_test_db();
    let (delta, b737) = seed_reference(&mut db);
    let mut flight = new_flight(&delta, &b737, "DL100");
    flight.price = -5.0;

    let err = db.insert_flight(&flight).unwrap_err();
    assert!(matches!(err, FlightDeskError::Database { .. }));
}

#[test]
fn test_get_flight() {
    let (_temp_file, mut db) = create_test_db();
    let (delta, b737) = seed_reference(&mut db);
    let id = db.insert_flight(&new_flight(&delta, &b737, "DL100")).unwrap();

    let found = db.get_flight(id).unwrap().expect("Flight should exist");
    assert_eq!(found.flight_number, "DL100");

    assert!(db.get_flight(id + 100).unwrap().is_none());
}

#[test]
fn test_update_replaces_all_fields() {
    let (_temp_file, mut db) = create_test_db();
    let (delta, b737) = seed_reference(&mut db);
    let united = db.add_airline("United", "UA").unwrap();
    let id = db.insert_flight(&new_flight(&delta, &b737, "DL100")).unwrap();

    let mut changed = db.get_flight(id).unwrap().unwrap();
    changed.assign_airline(&united);
    changed.flight_number = "UA100".to_string();
    changed.destination = "SEA".to_string();
    changed.arrival_time = parse_flight_time("2024-01-01 16:30:00").unwrap();
    changed.price = 89.0;
    db.update_flight(&changed).unwrap();

    let stored = db.get_flight(id).unwrap().unwrap();
    assert_eq!(stored, changed);
    assert_eq!(db.list_flights().unwrap().len(), 1);
}

#[test]
fn test_update_missing_flight() {
    let (_temp_file, mut db) = create_test_db();
    let (delta, b737) = seed_reference(&mut db);
    let mut flight = new_flight(&delta, &b737, "DL100");
    flight.id = 42;

    let err = db.update_flight(&flight).unwrap_err();
    assert!(matches!(err, FlightDeskError::FlightNotFound { id: 42 }));
}

#[test]
fn test_delete_flight() {
    let (_temp_file, mut db) = create_test_db();
    let (delta, b737) = seed_reference(&mut db);
    let keep = db.insert_flight(&new_flight(&delta, &b737, "DL100")).unwrap();
    let gone = db.insert_flight(&new_flight(&delta, &b737, "DL200")).unwrap();

    db.delete_flight(gone).unwrap();

    let remaining: Vec<u64> = db.list_flights().unwrap().iter().map(|f| f.id).collect();
    assert_eq!(remaining, [keep]);
}

#[test]
fn test_delete_missing_flight() {
    let (_temp_file, mut db) = create_test_db();

    let err = db.delete_flight(5).unwrap_err();
    assert!(matches!(err, FlightDeskError::FlightNotFound { id: 5 }));
}

#[test]
fn test_seed_demo_reference_data() {
    let (_temp_file, mut db) = create_test_db();

    assert!(db.seed_demo_reference_data().unwrap());
    let airlines = db.list_airlines().unwrap();
    let aircraft = db.list_aircraft().unwrap();
    assert_eq!((airlines[0].id, airlines[0].name.as_str()), (1, "Delta"));
    assert_eq!((aircraft[1].id, aircraft[1].model.as_str()), (2, "737"));

    // Second run leaves the tables alone
    assert!(!db.seed_demo_reference_data().unwrap());
    assert_eq!(db.list_airlines().unwrap().len(), airlines.len());
}

#[test]
fn test_seed_demo_skips_populated_store() {
    let (_temp_file, mut db) = create_test_db();
    db.add_aircraft("Dash 8", 78).unwrap();

    assert!(!db.seed_demo_reference_data().unwrap());
    assert!(db.list_airlines().unwrap().is_empty());
}
