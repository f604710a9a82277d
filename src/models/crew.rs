//! Crew models and DTOs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tokio_postgres::Row;

/// Crew member as listed, joined with their position
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CrewRecord {
    pub crew_id: i32,
    pub employee_id: String,
    pub first_name: String,
    pub last_name: String,
    pub position_name: String,
    pub experience_years: Option<i32>,
    pub hire_date: Option<NaiveDate>,
    pub certifications: Option<String>,
    pub status: Option<String>,
}

impl TryFrom<&Row> for CrewRecord {
    type Error = tokio_postgres::Error;

    fn try_from(row: &Row) -> Result<Self, Self::Error> {
        Ok(Self {
            crew_id: row.try_get("crew_id")?,
            employee_id: row.try_get("employee_id")?,
            first_name: row.try_get("first_name")?,
            last_name: row.try_get("last_name")?,
            position_name: row.try_get("position_name")?,
            experience_years: row.try_get("experience_years")?,
            hire_date: row.try_get("hire_date")?,
            certifications: row.try_get("certifications")?,
            status: row.try_get("status")?,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateCrewRequest {
    pub employee_id: String,
    pub first_name: String,
    pub last_name: String,
    pub position_id: i32,
    pub airline_id: i32,
    pub experience_years: i32,
    pub hire_date: String,
    pub certifications: String,
    pub status: String,
}
