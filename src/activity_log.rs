use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::errors::Result;
use crate::models::activity::{Activity, ActorType};
use crate::state::AppState;
use crate::store;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Service,
    Incident,
    Maintenance,
}

/// Per-entity activity policy. Services deliberately do not produce audit
/// rows; incidents and maintenance windows do.
pub fn emits_activity(kind: EntityKind) -> bool {
    match kind {
        EntityKind::Service => false,
        EntityKind::Incident | EntityKind::Maintenance => true,
    }
}

fn label(kind: EntityKind) -> &'static str {
    match kind {
        EntityKind::Service => "Service",
        EntityKind::Incident => "Incident",
        EntityKind::Maintenance => "Maintenance",
    }
}

fn actor_type(kind: EntityKind) -> Option<ActorType> {
    match kind {
        EntityKind::Service => None,
        EntityKind::Incident => Some(ActorType::Incident),
        EntityKind::Maintenance => Some(ActorType::Maintenance),
    }
}

#[derive(Debug, Clone)]
pub struct NewActivity {
    pub actor_id: String,
    pub actor_type: ActorType,
    pub organization_id: String,
    pub action: String,
    pub description: String,
}

/// The activity a freshly created entity emits: exactly one for incidents
/// and maintenance windows, none for services.
pub fn creation_activity(
    kind: EntityKind,
    actor_id: &str,
    organization_id: &str,
    name: &str,
    status: &str,
) -> Option<NewActivity> {
    if !emits_activity(kind) {
        return None;
    }
    Some(NewActivity {
        actor_id: actor_id.to_string(),
        actor_type: actor_type(kind)?,
        organization_id: organization_id.to_string(),
        action: status.to_string(),
        description: format!("{} {name} created with status {status}", label(kind)),
    })
}

/// The activity an update emits: exactly one when the status changed, none
/// when it is unchanged or the entity kind never emits.
pub fn status_change_activity(
    kind: EntityKind,
    actor_id: &str,
    organization_id: &str,
    name: &str,
    current_status: &str,
    proposed_status: &str,
) -> Option<NewActivity> {
    if !emits_activity(kind) || current_status == proposed_status {
        return None;
    }
    Some(NewActivity {
        actor_id: actor_id.to_string(),
        actor_type: actor_type(kind)?,
        organization_id: organization_id.to_string(),
        action: proposed_status.to_string(),
        description: format!(
            "{} {name} updated with status {proposed_status}",
            label(kind)
        ),
    })
}

/// Appends an immutable activity row (server-generated id and timestamp),
/// then notifies the organization's live subscribers as a post-commit step.
/// A failed persist propagates to the calling mutation; broadcast delivery
/// never affects the outcome.
pub async fn record(state: &AppState, new_activity: NewActivity) -> Result<Activity> {
    let activity = Activity {
        activity_id: Uuid::new_v4().to_string(),
        organization_id: new_activity.organization_id,
        action: new_activity.action,
        activity_description: new_activity.description,
        actor_id: new_activity.actor_id,
        actor_type: new_activity.actor_type,
        timestamp: Utc::now(),
    };

    let activity = store::activity::create(&state.sdb, activity).await?;
    info!(activity_id = %activity.activity_id, "Activity created successfully");

    state.registry.broadcast("update", &activity.organization_id);

    Ok(activity)
}
