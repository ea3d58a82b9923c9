//! Read-only reference data used to populate flight foreign keys.

use serde::{Deserialize, Serialize};

/// An operating airline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Airline {
    pub id: u64,

    /// Display name, e.g. `Delta`
    pub name: String,

    /// Two-letter IATA designator, e.g. `DL`
    pub iata_code: String,
}

/// An aircraft type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Aircraft {
    pub id: u64,

    /// Model name, e.g. `737`
    pub model: String,

    /// Number of passenger seats
    pub capacity: u32,
}
