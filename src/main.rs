use axum::{Router, routing::get};
use tower_http::cors::CorsLayer;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

use crate::{
    config::Config, errors::Result, routes::status_route::live::live_updates,
    routes::status_route::status_router, state::AppState,
};

pub mod activity_log;
pub mod aggregation;
pub mod config;
pub mod consts;
pub mod errors;
pub mod identity;
pub mod middleware;
pub mod models;
pub mod registry;
pub mod response;
pub mod routes;
pub mod state;
pub mod store;
pub mod utils;

#[tokio::main]
async fn main() -> Result<()> {
    tracing::subscriber::set_global_default(FmtSubscriber::default()).unwrap();

    let config = Config::load()?;
    let state = AppState::init(&config).await?;

    info!("Starting server");

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!("Serving status page at http://{}", listener.local_addr()?);
    axum::serve(listener, app(state)).await?;

    Ok(())
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::root_route))
        .nest("/api/v1", status_router(state.clone()))
        .route("/update", get(live_updates))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use chrono::Utc;
    use surrealdb::Surreal;
    use tower::ServiceExt;

    use crate::identity::{IdentityProvider, testing::MockProvider};
    use crate::registry::ConnectionRegistry;

    fn test_state(identity: Arc<dyn IdentityProvider>) -> AppState {
        AppState {
            // unconnected client: none of these tests reach the store
            sdb: Surreal::init(),
            identity,
            registry: Arc::new(ConnectionRegistry::new()),
        }
    }

    fn granting_provider() -> Arc<dyn IdentityProvider> {
        Arc::new(MockProvider::with_member_session(
            "sess_1",
            "user_1",
            "org_acme",
            Utc::now().timestamp_millis() + 60_000,
        ))
    }

    async fn response_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), 1024 * 1024).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn root_returns_welcome_envelope() {
        let router = app(test_state(granting_provider()));
        let response = router
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = response_json(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "Welcome to the Status Page API");
    }

    #[tokio::test]
    async fn mutation_without_session_header_is_401() {
        let router = app(test_state(granting_provider()));
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/incidents/create-incident")
                    .header("content-type", "application/json")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let json = response_json(response).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Missing `sessionId` header");
    }

    #[tokio::test]
    async fn mutation_with_denied_session_is_401() {
        // empty provider: no sessions, no organizations
        let router = app(test_state(Arc::new(MockProvider::default())));
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/maintenances/create-maintenance")
                    .header("sessionId", "sess_bogus")
                    .header("organizationId", "org_acme")
                    .header("content-type", "application/json")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let json = response_json(response).await;
        assert_eq!(json["message"], "Access denied to secure endpoint");
    }

    #[tokio::test]
    async fn create_with_foreign_body_organization_is_401() {
        // session validated for org_acme, body tries to write into org_other
        let router = app(test_state(granting_provider()));
        let body = serde_json::json!({
            "incident_id": "inc_1",
            "service_impacted": ["svc_1"],
            "organization_id": "org_other",
            "incident_name": "API outage",
            "incident_description": "Requests are timing out",
        });
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/incidents/create-incident")
                    .header("sessionId", "sess_1")
                    .header("organizationId", "org_acme")
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let json = response_json(response).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Organization does not match session");
    }

    #[tokio::test]
    async fn secure_endpoint_rejects_malformed_body_with_envelope() {
        let router = app(test_state(granting_provider()));
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/auth/secure-endpoint")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"sessionId": "sess_1"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = response_json(response).await;
        assert_eq!(json["success"], false);
        assert!(json["message"].is_string());
    }

    #[tokio::test]
    async fn secure_endpoint_grants_live_member_session() {
        let router = app(test_state(granting_provider()));
        let body = serde_json::json!({
            "sessionId": "sess_1",
            "organizationId": "org_acme",
        });
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/auth/secure-endpoint")
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = response_json(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "Access granted to secure endpoint");
    }

    #[tokio::test]
    async fn secure_endpoint_denies_expired_session() {
        let expired = Arc::new(MockProvider::with_member_session(
            "sess_1",
            "user_1",
            "org_acme",
            Utc::now().timestamp_millis() - 1_000,
        ));
        let router = app(test_state(expired));
        let body = serde_json::json!({
            "sessionId": "sess_1",
            "organizationId": "org_acme",
        });
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/auth/secure-endpoint")
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let json = response_json(response).await;
        assert_eq!(json["success"], false);
    }

    #[tokio::test]
    async fn entity_index_routes_stay_open() {
        let router = app(test_state(granting_provider()));
        let response = router
            .oneshot(
                Request::builder()
                    .uri("/api/v1/services")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = response_json(response).await;
        assert_eq!(json["message"], "Welcome to Services API");
    }
}
