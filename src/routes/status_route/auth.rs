use axum::{
    Json,
    extract::{Path, State},
};
use chrono::Utc;
use serde::Deserialize;
use tracing::warn;
use validator::Validate;

use crate::{
    errors::{Error, Result},
    identity::validate_session,
    models::organization::Organization,
    response::ApiResponse,
    state::AppState,
    store,
    utils::validated_json::ValidatedJson,
};

#[derive(Deserialize, Debug, Clone, Validate)]
pub struct SecureEndpointRequest {
    #[validate(length(min = 1))]
    #[serde(rename = "sessionId")]
    pub session_id: String,
    #[validate(length(min = 1))]
    #[serde(rename = "organizationId")]
    pub organization_id: String,
}

/// Standalone session check used by the frontend before it shows the
/// authenticated dashboard.
pub async fn secure_endpoint(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<SecureEndpointRequest>,
) -> Result<Json<ApiResponse>> {
    let verdict = validate_session(
        state.identity.as_ref(),
        &input.session_id,
        &input.organization_id,
    )
    .await;
    if !verdict.granted {
        warn!(reason = verdict.reason, "session denied");
        return Err(Error::AccessDenied);
    }
    Ok(Json(ApiResponse::message(
        "Access granted to secure endpoint",
    )))
}

/// Resolves an organization by slug against the identity provider and
/// refreshes the local mirror row. When the provider is unreachable the
/// mirror answers instead; this surface is public metadata, not an access
/// decision, so serving stale data beats serving nothing.
pub async fn get_organization(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<ApiResponse>> {
    let (organization_id, organization_name) = match state.identity.get_organization(&slug).await {
        Ok(Some(organization)) => {
            store::organization::upsert(
                &state.sdb,
                Organization {
                    organization_id: organization.id.clone(),
                    organization_name: organization.name.clone(),
                    organization_slug: organization.slug,
                    created_at: Utc::now(),
                },
            )
            .await?;
            (organization.id, organization.name)
        }
        Ok(None) => return Err(Error::NotFound("Organization")),
        Err(error) => {
            warn!("identity provider unreachable, answering from mirror: {error}");
            let mirrored = store::organization::get_by_slug(&state.sdb, &slug)
                .await?
                .ok_or(Error::NotFound("Organization"))?;
            (mirrored.organization_id, mirrored.organization_name)
        }
    };

    Ok(Json(ApiResponse::with_data(
        "Organization found",
        serde_json::json!({
            "organization_id": organization_id,
            "organization_name": organization_name,
        }),
    )))
}
