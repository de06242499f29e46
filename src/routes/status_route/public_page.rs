use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    aggregation::{self, PublicEntry},
    errors::Result,
    response::ApiResponse,
    state::AppState,
};

pub async fn root() -> Json<ApiResponse> {
    Json(ApiResponse::message("Welcome to Public Page API"))
}

/// Unauthenticated aggregate view: incidents and maintenance windows with
/// their activity history.
pub async fn get_public_page_data_route(
    State(state): State<AppState>,
    Path(organization_id): Path<String>,
) -> Result<Json<ApiResponse<Vec<PublicEntry>>>> {
    let entries = aggregation::get_public_page_data(&state, &organization_id).await?;
    Ok(Json(ApiResponse::with_data(
        "Incidents fetched successfully",
        entries,
    )))
}
