//! Aircraft models and DTOs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tokio_postgres::Row;

/// Aircraft as listed, joined with its type
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AircraftRecord {
    pub aircraft_id: i32,
    pub registration_number: String,
    pub model: String,
    pub capacity: Option<i32>,
    pub manufacturing_date: Option<NaiveDate>,
    pub last_maintenance_date: Option<NaiveDate>,
    pub next_maintenance_date: Option<NaiveDate>,
    pub status: Option<String>,
}

impl TryFrom<&Row> for AircraftRecord {
    type Error = tokio_postgres::Error;

    fn try_from(row: &Row) -> Result<Self, Self::Error> {
        Ok(Self {
            aircraft_id: row.try_get("aircraft_id")?,
            registration_number: row.try_get("registration_number")?,
            model: row.try_get("model")?,
            capacity: row.try_get("capacity")?,
            manufacturing_date: row.try_get("manufacturing_date")?,
            last_maintenance_date: row.try_get("last_maintenance_date")?,
            next_maintenance_date: row.try_get("next_maintenance_date")?,
            status: row.try_get("status")?,
        })
    }
}

/// Request to register an aircraft. Every field is required.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateAircraftRequest {
    pub registration_number: String,
    pub aircraft_type_id: i32,
    pub airline_id: i32,
    pub manufacturing_date: String,
    pub last_maintenance_date: String,
    pub next_maintenance_date: String,
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_is_required() {
        let err = serde_json::from_value::<CreateAircraftRequest>(json!({
            "registration_number": "N101AO",
            "aircraft_type_id": 1,
            "airline_id": 1,
            "manufacturing_date": "2015-03-01",
            "last_maintenance_date": "2024-01-10",
            "next_maintenance_date": "2024-07-10"
        }))
        .unwrap_err();

        assert!(err.to_string().contains("status"));
    }

    #[test]
    fn test_dates_serialize_as_iso() {
        let record = AircraftRecord {
            aircraft_id: 1,
            registration_number: "N101AO".into(),
            model: "A320".into(),
            capacity: Some(180),
            manufacturing_date: NaiveDate::from_ymd_opt(2015, 3, 1),
            last_maintenance_date: None,
            next_maintenance_date: None,
            status: Some("active".into()),
        };

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["manufacturing_date"], "2015-03-01");
        assert_eq!(value["capacity"], 180);
    }
}
