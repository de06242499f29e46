use axum::Json;

use crate::response::ApiResponse;

pub mod status_route;

pub async fn root_route() -> Json<ApiResponse> {
    Json(ApiResponse::message("Welcome to the Status Page API"))
}
