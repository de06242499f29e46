use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{delete, get, post},
};

use crate::{middleware::session_gate, state::AppState};

pub mod activity;
pub mod auth;
pub mod incident;
pub mod live;
pub mod maintenance;
pub mod public_page;
pub mod service;

pub fn status_router(config: AppState) -> Router<AppState> {
    Router::new()
        .nest("/services", service_routes(config.clone()))
        .nest("/incidents", incident_routes(config.clone()))
        .nest("/maintenances", maintenance_routes(config.clone()))
        .nest("/activities", activity_routes(config.clone()))
        .nest("/auth", auth_routes(config.clone()))
        .nest("/public", public_routes(config.clone()))
        .with_state(config)
}

fn service_routes(config: AppState) -> Router<AppState> {
    let open = |config: AppState| -> Router<AppState> {
        Router::new()
            .route("/", get(service::root))
            .route(
                "/get-all-services/{organization_id}",
                get(service::get_all_services),
            )
            .route(
                "/get-service/{organization_id}/{service_id}",
                get(service::get_service),
            )
            .with_state(config)
    };
    let gated = |config: AppState| -> Router<AppState> {
        Router::new()
            .route("/create-service", post(service::create_service))
            .route("/update-service", post(service::update_service))
            .route("/delete-service/{service_id}", delete(service::delete_service))
            .layer(from_fn_with_state(config.clone(), session_gate))
            .with_state(config)
    };
    Router::new()
        .merge(open(config.clone()))
        .merge(gated(config.clone()))
        .with_state(config)
}

fn incident_routes(config: AppState) -> Router<AppState> {
    let open = |config: AppState| -> Router<AppState> {
        Router::new()
            .route("/", get(incident::root))
            .route(
                "/get-all-incidents/{organization_id}",
                get(incident::get_all_incidents),
            )
            .route(
                "/get-incident/{organization_id}/{incident_id}",
                get(incident::get_incident),
            )
            .with_state(config)
    };
    let gated = |config: AppState| -> Router<AppState> {
        Router::new()
            .route("/create-incident", post(incident::create_incident))
            .route("/update-incident", post(incident::update_incident))
            .route(
                "/delete-incident/{incident_id}",
                delete(incident::delete_incident),
            )
            .layer(from_fn_with_state(config.clone(), session_gate))
            .with_state(config)
    };
    Router::new()
        .merge(open(config.clone()))
        .merge(gated(config.clone()))
        .with_state(config)
}

fn maintenance_routes(config: AppState) -> Router<AppState> {
    let open = |config: AppState| -> Router<AppState> {
        Router::new()
            .route("/", get(maintenance::root))
            .route(
                "/get-all-maintenances/{organization_id}",
                get(maintenance::get_all_maintenances),
            )
            .route(
                "/get-maintenance/{organization_id}/{maintenance_id}",
                get(maintenance::get_maintenance),
            )
            .with_state(config)
    };
    let gated = |config: AppState| -> Router<AppState> {
        Router::new()
            .route("/create-maintenance", post(maintenance::create_maintenance))
            .route("/update-maintenance", post(maintenance::update_maintenance))
            .route(
                "/delete-maintenance/{maintenance_id}",
                delete(maintenance::delete_maintenance),
            )
            .layer(from_fn_with_state(config.clone(), session_gate))
            .with_state(config)
    };
    Router::new()
        .merge(open(config.clone()))
        .merge(gated(config.clone()))
        .with_state(config)
}

fn activity_routes(config: AppState) -> Router<AppState> {
    let open = |config: AppState| -> Router<AppState> {
        Router::new()
            .route("/", get(activity::root))
            .route(
                "/get-all-activities/{organization_id}",
                get(activity::get_all_activities),
            )
            .route(
                "/get-activity/{organization_id}/{actor_id}",
                get(activity::get_activity),
            )
            .with_state(config)
    };
    let gated = |config: AppState| -> Router<AppState> {
        Router::new()
            .route("/create-activity", post(activity::create_activity))
            .layer(from_fn_with_state(config.clone(), session_gate))
            .with_state(config)
    };
    Router::new()
        .merge(open(config.clone()))
        .merge(gated(config.clone()))
        .with_state(config)
}

fn auth_routes(config: AppState) -> Router<AppState> {
    Router::new()
        .route("/secure-endpoint", post(auth::secure_endpoint))
        .route("/get-organization/{slug}", get(auth::get_organization))
        .with_state(config)
}

fn public_routes(config: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(public_page::root))
        .route(
            "/get-public-page-data/{organization_id}",
            get(public_page::get_public_page_data_route),
        )
        .with_state(config)
}
