//! Data access seam used by the HTTP handlers.

use crate::error::AppError;
use crate::models::{
    AircraftRecord, CreateAircraftRequest, CreateCrewRequest, CreateFlightRequest, CrewRecord,
    FlightRecord,
};
use async_trait::async_trait;
use std::sync::Arc;

/// The six list/create operations over the airline dataset.
///
/// Each call is independent: implementations hold no per-request state and
/// never span more than one statement.
#[async_trait]
pub trait OperationsRepository: Send + Sync {
    async fn list_flights(&self) -> Result<Vec<FlightRecord>, AppError>;

    async fn create_flight(&self, flight: &CreateFlightRequest) -> Result<(), AppError>;

    async fn list_aircraft(&self) -> Result<Vec<AircraftRecord>, AppError>;

    async fn create_aircraft(&self, aircraft: &CreateAircraftRequest) -> Result<(), AppError>;

    async fn list_crew(&self) -> Result<Vec<CrewRecord>, AppError>;

    async fn create_crew(&self, crew: &CreateCrewRequest) -> Result<(), AppError>;
}

pub type SharedRepository = Arc<dyn OperationsRepository>;
