use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    activity_log::{self, EntityKind},
    errors::{Error, Result},
    middleware::SessionOrg,
    models::incident::{Incident, IncidentPayload},
    response::ApiResponse,
    state::AppState,
    store,
    utils::validated_json::ValidatedJson,
};

pub async fn root() -> Json<ApiResponse> {
    Json(ApiResponse::message("Welcome to Incidents API"))
}

pub async fn get_all_incidents(
    State(state): State<AppState>,
    Path(organization_id): Path<String>,
) -> Result<Json<ApiResponse<Vec<Incident>>>> {
    let incidents = store::incident::get_all(&state.sdb, &organization_id).await?;
    Ok(Json(ApiResponse::with_data("Incidents found", incidents)))
}

pub async fn get_incident(
    State(state): State<AppState>,
    Path((organization_id, incident_id)): Path<(String, String)>,
) -> Result<Json<ApiResponse<Incident>>> {
    let incident = store::incident::get_by_id(&state.sdb, &incident_id, &organization_id)
        .await?
        .ok_or(Error::NotFound("Incident"))?;
    Ok(Json(ApiResponse::with_data("Incident found", incident)))
}

pub async fn create_incident(
    State(state): State<AppState>,
    SessionOrg(organization_id): SessionOrg,
    ValidatedJson(payload): ValidatedJson<IncidentPayload>,
) -> Result<Json<ApiResponse>> {
    if payload.organization_id != organization_id {
        return Err(Error::OrganizationMismatch);
    }

    let incident = store::incident::create(&state.sdb, payload.into_incident()).await?;

    if let Some(new_activity) = activity_log::creation_activity(
        EntityKind::Incident,
        &incident.incident_id,
        &incident.organization_id,
        &incident.incident_name,
        &incident.incident_status,
    ) {
        activity_log::record(&state, new_activity).await?;
    }

    Ok(Json(ApiResponse::message("Incident created successfully")))
}

/// A status change appends exactly one activity; updating with an unchanged
/// status appends none. The activity write happens before the record is
/// replaced and its failure fails the whole update.
pub async fn update_incident(
    State(state): State<AppState>,
    SessionOrg(organization_id): SessionOrg,
    ValidatedJson(payload): ValidatedJson<IncidentPayload>,
) -> Result<Json<ApiResponse>> {
    let current = store::incident::get_by_id(&state.sdb, &payload.incident_id, &organization_id)
        .await?
        .ok_or(Error::NotFound("Incident"))?;

    if let Some(new_activity) = activity_log::status_change_activity(
        EntityKind::Incident,
        &payload.incident_id,
        &organization_id,
        &payload.incident_name,
        &current.incident_status,
        &payload.incident_status,
    ) {
        activity_log::record(&state, new_activity).await?;
    }

    let supplied_created_at = payload.created_at;
    let mut incident = payload.into_incident();
    incident.created_at = supplied_created_at.unwrap_or(current.created_at);

    store::incident::update(&state.sdb, incident, &organization_id).await?;
    Ok(Json(ApiResponse::message("Incident updated successfully")))
}

pub async fn delete_incident(
    State(state): State<AppState>,
    SessionOrg(organization_id): SessionOrg,
    Path(incident_id): Path<String>,
) -> Result<Json<ApiResponse>> {
    store::incident::delete(&state.sdb, &incident_id, &organization_id).await?;
    Ok(Json(ApiResponse::message("Incident deleted successfully")))
}
