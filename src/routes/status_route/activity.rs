use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    activity_log::{self, NewActivity},
    errors::{Error, Result},
    middleware::SessionOrg,
    models::activity::{Activity, ActivityPayload},
    response::ApiResponse,
    state::AppState,
    store,
    utils::validated_json::ValidatedJson,
};

pub async fn root() -> Json<ApiResponse> {
    Json(ApiResponse::message("Welcome to Activity API"))
}

pub async fn get_all_activities(
    State(state): State<AppState>,
    Path(organization_id): Path<String>,
) -> Result<Json<ApiResponse<Vec<Activity>>>> {
    let activities = store::activity::get_all(&state.sdb, &organization_id).await?;
    Ok(Json(ApiResponse::with_data("Activities found", activities)))
}

pub async fn get_activity(
    State(state): State<AppState>,
    Path((organization_id, actor_id)): Path<(String, String)>,
) -> Result<Json<ApiResponse<Vec<Activity>>>> {
    let activities =
        store::activity::get_by_actor_id(&state.sdb, &actor_id, &organization_id).await?;
    if activities.is_empty() {
        return Err(Error::NotFound("Activity"));
    }
    Ok(Json(ApiResponse::with_data(
        "Activity fetched successfully",
        activities,
    )))
}

/// Direct activity writes go through the same logger as the incident and
/// maintenance paths, so the id and timestamp are server-set and the
/// organization's subscribers are notified.
pub async fn create_activity(
    State(state): State<AppState>,
    SessionOrg(organization_id): SessionOrg,
    ValidatedJson(payload): ValidatedJson<ActivityPayload>,
) -> Result<Json<ApiResponse>> {
    if payload.organization_id != organization_id {
        return Err(Error::OrganizationMismatch);
    }

    activity_log::record(
        &state,
        NewActivity {
            actor_id: payload.actor_id,
            actor_type: payload.actor_type,
            organization_id: payload.organization_id,
            action: payload.action,
            description: payload.activity_description,
        },
    )
    .await?;
    Ok(Json(ApiResponse::message("Activity created successfully")))
}
