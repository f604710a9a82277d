//! Aircraft route handlers

use crate::error::{ApiResult, AppJson};
use crate::models::{AircraftRecord, CreateAircraftRequest, MessageResponse};
use crate::state::SharedState;
use axum::{extract::State, http::StatusCode, Json};
use tracing::{debug, error, info};

/// List every aircraft with its type
pub async fn list_aircraft(
    State(state): State<SharedState>,
) -> ApiResult<Json<Vec<AircraftRecord>>> {
    let aircraft = state.repository.list_aircraft().await?;

    info!("Listed {} aircraft", aircraft.len());
    Ok(Json(aircraft))
}

/// Register an aircraft
pub async fn create_aircraft(
    State(state): State<SharedState>,
    AppJson(payload): AppJson<CreateAircraftRequest>,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    debug!("Incoming aircraft data: {:?}", payload);

    state
        .repository
        .create_aircraft(&payload)
        .await
        .inspect_err(|e| error!("Error inserting aircraft {}: {}", payload.registration_number, e))?;

    info!("Aircraft '{}' added", payload.registration_number);

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Aircraft added successfully")),
    ))
}
