use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Maintenance {
    pub maintenance_id: String,
    pub service_impacted: Vec<String>,
    pub organization_id: String,
    pub maintenance_name: String,
    pub maintenance_description: String,
    pub maintenance_status: String,
    // start_from <= end_at is expected but not enforced
    pub start_from: DateTime<Utc>,
    pub end_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct MaintenancePayload {
    #[validate(length(min = 1))]
    pub maintenance_id: String,
    pub service_impacted: Vec<String>,
    #[validate(length(min = 1))]
    pub organization_id: String,
    #[validate(length(min = 5, max = 255))]
    pub maintenance_name: String,
    #[validate(length(min = 5, max = 255))]
    pub maintenance_description: String,
    #[serde(default = "default_maintenance_status")]
    pub maintenance_status: String,
    pub start_from: DateTime<Utc>,
    pub end_at: DateTime<Utc>,
}

fn default_maintenance_status() -> String {
    "Scheduled".to_string()
}

impl MaintenancePayload {
    pub fn into_maintenance(self) -> Maintenance {
        Maintenance {
            maintenance_id: self.maintenance_id,
            service_impacted: self.service_impacted,
            organization_id: self.organization_id,
            maintenance_name: self.maintenance_name,
            maintenance_description: self.maintenance_description,
            maintenance_status: self.maintenance_status,
            start_from: self.start_from,
            end_at: self.end_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_defaults_to_scheduled() {
        let payload: MaintenancePayload = serde_json::from_value(serde_json::json!({
            "maintenance_id": "mnt_1",
            "service_impacted": ["svc_1"],
            "organization_id": "org_acme",
            "maintenance_name": "DB upgrade",
            "maintenance_description": "Primary database version bump",
            "start_from": "2026-08-30T10:00:00Z",
            "end_at": "2026-08-30T12:00:00Z",
        }))
        .unwrap();
        assert_eq!(payload.maintenance_status, "Scheduled");
    }
}
