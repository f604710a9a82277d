//! Crew route handlers

use crate::error::{ApiResult, AppJson};
use crate::models::{CreateCrewRequest, CrewRecord, MessageResponse};
use crate::state::SharedState;
use axum::{extract::State, http::StatusCode, Json};
use tracing::{debug, error, info};

pub async fn list_crew(State(state): State<SharedState>) -> ApiResult<Json<Vec<CrewRecord>>> {
    let crew = state.repository.list_crew().await?;

    info!("Listed {} crew members", crew.len());
    Ok(Json(crew))
}

pub async fn create_crew(
    State(state): State<SharedState>,
    AppJson(payload): AppJson<CreateCrewRequest>,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    debug!("Incoming crew data: {:?}", payload);

    state
        .repository
        .create_crew(&payload)
        .await
        .inspect_err(|e| error!("Error inserting crew member {}: {}", payload.employee_id, e))?;

    info!(
        "Crew member '{} {}' ({}) added",
        payload.first_name, payload.last_name, payload.employee_id
    );

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Crew member added successfully")),
    ))
}
