//! Flight models and DTOs

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};
use tokio_postgres::Row;

/// Status given to a flight created without one
pub const DEFAULT_FLIGHT_STATUS: &str = "scheduled";

fn default_status() -> String {
    DEFAULT_FLIGHT_STATUS.to_string()
}

// An explicit `null` counts as absent
fn status_or_default<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(default_status))
}

/// Flight as listed, joined with its route airports and aircraft
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FlightRecord {
    pub flight_id: i32,
    pub flight_number: String,
    pub origin: String,
    pub destination: String,
    pub departure_time: Option<NaiveDateTime>,
    pub arrival_time: Option<NaiveDateTime>,
    pub registration_number: String,
    pub aircraft_model: String,
    pub status: Option<String>,
}

impl TryFrom<&Row> for FlightRecord {
    type Error = tokio_postgres::Error;

    fn try_from(row: &Row) -> Result<Self, Self::Error> {
        Ok(Self {
            flight_id: row.try_get("flight_id")?,
            flight_number: row.try_get("flight_number")?,
            origin: row.try_get("origin")?,
            destination: row.try_get("destination")?,
            departure_time: row.try_get("departure_time")?,
            arrival_time: row.try_get("arrival_time")?,
            registration_number: row.try_get("registration_number")?,
            aircraft_model: row.try_get("aircraft_model")?,
            status: row.try_get("status")?,
        })
    }
}

/// Request to create a flight
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateFlightRequest {
    pub flight_number: String,
    pub airline_id: i32,
    pub route_id: i32,
    pub aircraft_id: i32,
    pub departure_time: String,
    pub arrival_time: String,
    #[serde(default = "default_status", deserialize_with = "status_or_default")]
    pub status: String,
}
