use axum::{
    extract::{FromRequestParts, Request, State},
    http::{HeaderMap, request::Parts},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::warn;

use crate::errors::{Error, Result as RResult};
use crate::identity::validate_session;
use crate::state::AppState;

/// The organization id a request was validated against, injected by the
/// session gate for downstream handlers.
#[derive(Debug, Clone)]
pub struct SessionOrg(pub String);

/// Session gate for every mutating route: both headers must be present and
/// the identity provider must confirm a live session belonging to a member
/// of the organization. Any ambiguity denies.
pub async fn session_gate(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<impl IntoResponse, Response> {
    let organization_id = check_session_headers(&state, request.headers())
        .await
        .map_err(IntoResponse::into_response)?;

    request.extensions_mut().insert(SessionOrg(organization_id));

    Ok(next.run(request).await)
}

async fn check_session_headers(state: &AppState, headers: &HeaderMap) -> RResult<String> {
    let session_id = header_value(headers, "sessionId")?;
    let organization_id = header_value(headers, "organizationId")?;

    let verdict = validate_session(state.identity.as_ref(), &session_id, &organization_id).await;
    if !verdict.granted {
        warn!(reason = verdict.reason, "session denied");
        return Err(Error::AccessDenied);
    }

    Ok(organization_id)
}

fn header_value(headers: &HeaderMap, name: &'static str) -> RResult<String> {
    headers
        .get(name)
        .ok_or(Error::MissingHeader(name))?
        .to_str()
        .map(str::to_string)
        .map_err(|_| Error::MissingHeader(name))
}

impl<S> FromRequestParts<S> for SessionOrg
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> RResult<Self> {
        parts
            .extensions
            .get::<SessionOrg>()
            .cloned()
            .ok_or(Error::AccessDenied)
    }
}
