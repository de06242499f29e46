use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    errors::{Error, Result},
    middleware::SessionOrg,
    models::service::{Service, ServicePayload},
    response::ApiResponse,
    state::AppState,
    store,
    utils::validated_json::ValidatedJson,
};

// Services never emit activity rows, see activity_log::emits_activity.

pub async fn root() -> Json<ApiResponse> {
    Json(ApiResponse::message("Welcome to Services API"))
}

pub async fn get_all_services(
    State(state): State<AppState>,
    Path(organization_id): Path<String>,
) -> Result<Json<ApiResponse<Vec<Service>>>> {
    let services = store::service::get_all(&state.sdb, &organization_id).await?;
    Ok(Json(ApiResponse::with_data("Services found", services)))
}

pub async fn get_service(
    State(state): State<AppState>,
    Path((organization_id, service_id)): Path<(String, String)>,
) -> Result<Json<ApiResponse<Service>>> {
    let service = store::service::get_by_id(&state.sdb, &service_id, &organization_id)
        .await?
        .ok_or(Error::NotFound("Service"))?;
    Ok(Json(ApiResponse::with_data("Service found", service)))
}

pub async fn create_service(
    State(state): State<AppState>,
    SessionOrg(organization_id): SessionOrg,
    ValidatedJson(payload): ValidatedJson<ServicePayload>,
) -> Result<Json<ApiResponse>> {
    if payload.organization_id != organization_id {
        return Err(Error::OrganizationMismatch);
    }

    store::service::create(&state.sdb, payload.into_service()).await?;
    Ok(Json(ApiResponse::message("Service created successfully")))
}

pub async fn update_service(
    State(state): State<AppState>,
    SessionOrg(organization_id): SessionOrg,
    ValidatedJson(payload): ValidatedJson<ServicePayload>,
) -> Result<Json<ApiResponse>> {
    let current = store::service::get_by_id(&state.sdb, &payload.service_id, &organization_id)
        .await?
        .ok_or(Error::NotFound("Service"))?;

    let supplied_start = payload.start_date;
    let mut service = payload.into_service();
    service.start_date = supplied_start.unwrap_or(current.start_date);

    store::service::update(&state.sdb, service, &organization_id).await?;
    Ok(Json(ApiResponse::message("Service updated successfully")))
}

pub async fn delete_service(
    State(state): State<AppState>,
    SessionOrg(organization_id): SessionOrg,
    Path(service_id): Path<String>,
) -> Result<Json<ApiResponse>> {
    store::service::delete(&state.sdb, &service_id, &organization_id).await?;
    Ok(Json(ApiResponse::message("Service deleted successfully")))
}
