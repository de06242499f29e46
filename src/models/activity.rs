use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// The record an activity is about (not a user).
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActorType {
    #[serde(rename = "incident")]
    Incident,
    #[serde(rename = "maintenance")]
    Maintenance,
}

/// Append-only audit row: one per status change on an incident or
/// maintenance window. `actor_id` is a weak reference; dangling ids are
/// possible and tolerated.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Activity {
    pub activity_id: String,
    pub organization_id: String,
    pub action: String,
    pub activity_description: String,
    pub actor_id: String,
    pub actor_type: ActorType,
    pub timestamp: DateTime<Utc>,
}

/// Caller-supplied activity fields. The id and timestamp are always set
/// server-side by the activity logger.
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct ActivityPayload {
    #[validate(length(min = 1))]
    pub organization_id: String,
    #[validate(length(min = 1, max = 255))]
    pub action: String,
    #[validate(length(min = 1, max = 255))]
    pub activity_description: String,
    #[validate(length(min = 1))]
    pub actor_id: String,
    pub actor_type: ActorType,
}
