use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    activity_log::{self, EntityKind},
    errors::{Error, Result},
    middleware::SessionOrg,
    models::maintenance::{Maintenance, MaintenancePayload},
    response::ApiResponse,
    state::AppState,
    store,
    utils::validated_json::ValidatedJson,
};

pub async fn root() -> Json<ApiResponse> {
    Json(ApiResponse::message("Welcome to Maintenance API"))
}

pub async fn get_all_maintenances(
    State(state): State<AppState>,
    Path(organization_id): Path<String>,
) -> Result<Json<ApiResponse<Vec<Maintenance>>>> {
    let maintenances = store::maintenance::get_all(&state.sdb, &organization_id).await?;
    Ok(Json(ApiResponse::with_data(
        "Maintenances found",
        maintenances,
    )))
}

pub async fn get_maintenance(
    State(state): State<AppState>,
    Path((organization_id, maintenance_id)): Path<(String, String)>,
) -> Result<Json<ApiResponse<Maintenance>>> {
    let maintenance = store::maintenance::get_by_id(&state.sdb, &maintenance_id, &organization_id)
        .await?
        .ok_or(Error::NotFound("Maintenance"))?;
    Ok(Json(ApiResponse::with_data(
        "Maintenance found",
        maintenance,
    )))
}

pub async fn create_maintenance(
    State(state): State<AppState>,
    SessionOrg(organization_id): SessionOrg,
    ValidatedJson(payload): ValidatedJson<MaintenancePayload>,
) -> Result<Json<ApiResponse>> {
    if payload.organization_id != organization_id {
        return Err(Error::OrganizationMismatch);
    }

    let maintenance = store::maintenance::create(&state.sdb, payload.into_maintenance()).await?;

    if let Some(new_activity) = activity_log::creation_activity(
        EntityKind::Maintenance,
        &maintenance.maintenance_id,
        &maintenance.organization_id,
        &maintenance.maintenance_name,
        &maintenance.maintenance_status,
    ) {
        activity_log::record(&state, new_activity).await?;
    }

    Ok(Json(ApiResponse::message("Maintenance created")))
}

pub async fn update_maintenance(
    State(state): State<AppState>,
    SessionOrg(organization_id): SessionOrg,
    ValidatedJson(payload): ValidatedJson<MaintenancePayload>,
) -> Result<Json<ApiResponse>> {
    let current =
        store::maintenance::get_by_id(&state.sdb, &payload.maintenance_id, &organization_id)
            .await?
            .ok_or(Error::NotFound("Maintenance"))?;

    if let Some(new_activity) = activity_log::status_change_activity(
        EntityKind::Maintenance,
        &payload.maintenance_id,
        &organization_id,
        &payload.maintenance_name,
        &current.maintenance_status,
        &payload.maintenance_status,
    ) {
        activity_log::record(&state, new_activity).await?;
    }

    store::maintenance::update(&state.sdb, payload.into_maintenance(), &organization_id).await?;
    Ok(Json(ApiResponse::message("Maintenance updated")))
}

pub async fn delete_maintenance(
    State(state): State<AppState>,
    SessionOrg(organization_id): SessionOrg,
    Path(maintenance_id): Path<String>,
) -> Result<Json<ApiResponse>> {
    store::maintenance::delete(&state.sdb, &maintenance_id, &organization_id).await?;
    Ok(Json(ApiResponse::message("Maintenance deleted")))
}
