use chrono::{DateTime, Utc};
use futures::future::try_join_all;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};
use crate::models::{activity::Activity, incident::Incident, maintenance::Maintenance};
use crate::state::AppState;
use crate::store;

/// One row of the unauthenticated public page: an incident or a maintenance
/// window normalized into a common shape together with its activity history.
/// Maintenance windows surface `start_from` as `created_at`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PublicEntry {
    pub incident_id: String,
    pub organization_id: String,
    pub incident_name: String,
    pub incident_description: String,
    pub incident_type: String,
    pub activities: Vec<Activity>,
    pub service_impacted: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl PublicEntry {
    fn from_incident(incident: Incident, activities: Vec<Activity>) -> Self {
        Self {
            incident_id: incident.incident_id,
            organization_id: incident.organization_id,
            incident_name: incident.incident_name,
            incident_description: incident.incident_description,
            incident_type: "Incident".to_string(),
            activities,
            service_impacted: incident.service_impacted,
            created_at: incident.created_at,
        }
    }

    fn from_maintenance(maintenance: Maintenance, activities: Vec<Activity>) -> Self {
        Self {
            incident_id: maintenance.maintenance_id,
            organization_id: maintenance.organization_id,
            incident_name: maintenance.maintenance_name,
            incident_description: maintenance.maintenance_description,
            incident_type: "Maintenance".to_string(),
            activities,
            service_impacted: maintenance.service_impacted,
            created_at: maintenance.start_from,
        }
    }
}

/// Joins incidents and maintenance windows with their activity history. The
/// two listings run concurrently; per-record activity fetches fan out as a
/// structured join and the first failure fails the whole call, so the page is
/// never partial. Incident entries come first, then maintenance, each in
/// store iteration order.
pub async fn get_public_page_data(
    state: &AppState,
    organization_id: &str,
) -> Result<Vec<PublicEntry>> {
    let (incidents, maintenances) = tokio::try_join!(
        store::incident::get_all(&state.sdb, organization_id),
        store::maintenance::get_all(&state.sdb, organization_id),
    )?;

    let incident_entries = try_join_all(incidents.into_iter().map(|incident| async move {
        let activities =
            store::activity::get_by_actor_id(&state.sdb, &incident.incident_id, organization_id)
                .await?;
        Ok::<_, Error>(PublicEntry::from_incident(incident, activities))
    }));
    let maintenance_entries = try_join_all(maintenances.into_iter().map(|maintenance| async move {
        let activities = store::activity::get_by_actor_id(
            &state.sdb,
            &maintenance.maintenance_id,
            organization_id,
        )
        .await?;
        Ok::<_, Error>(PublicEntry::from_maintenance(maintenance, activities))
    }));
    let (incident_entries, maintenance_entries) =
        tokio::try_join!(incident_entries, maintenance_entries)?;

    Ok(merge_entries(incident_entries, maintenance_entries))
}

/// Page ordering: all incident entries, then all maintenance entries, each
/// keeping the listing order they arrived in.
fn merge_entries(
    incident_entries: Vec<PublicEntry>,
    maintenance_entries: Vec<PublicEntry>,
) -> Vec<PublicEntry> {
    let mut entries = incident_entries;
    entries.extend(maintenance_entries);
    entries
}
