use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Local mirror of an organization known to the identity provider. The
/// provider is the source of truth; rows here are refreshed on lookup and
/// never created through this system's own CRUD surface.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Organization {
    pub organization_id: String,
    pub organization_name: String,
    pub organization_slug: String,
    pub created_at: DateTime<Utc>,
}
