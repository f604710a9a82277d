//! Flight route handlers

use crate::error::{ApiResult, AppJson};
use crate::models::{CreateFlightRequest, FlightRecord, MessageResponse};
use crate::state::SharedState;
use axum::{extract::State, http::StatusCode, Json};
use tracing::{debug, error, info};

/// List every flight with its route and aircraft
pub async fn list_flights(State(state): State<SharedState>) -> ApiResult<Json<Vec<FlightRecord>>> {
    debug!("Listing flights");

    let flights = state.repository.list_flights().await?;

    info!("Listed {} flights", flights.len());
    Ok(Json(flights))
}

/// Create a flight
pub async fn create_flight(
    State(state): State<SharedState>,
    AppJson(payload): AppJson<CreateFlightRequest>,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    debug!("Incoming flight data: {:?}", payload);

    state
        .repository
        .create_flight(&payload)
        .await
        .inspect_err(|e| error!("Error inserting flight {}: {}", payload.flight_number, e))?;

    info!("Flight '{}' added", payload.flight_number);

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Flight added successfully")),
    ))
}
