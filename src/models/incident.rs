use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Incident {
    pub incident_id: String,
    pub service_impacted: Vec<String>,
    pub organization_id: String,
    pub incident_name: String,
    pub incident_description: String,
    pub incident_status: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct IncidentPayload {
    #[validate(length(min = 1))]
    pub incident_id: String,
    pub service_impacted: Vec<String>,
    #[validate(length(min = 1))]
    pub organization_id: String,
    #[validate(length(min = 5, max = 255))]
    pub incident_name: String,
    #[validate(length(min = 5, max = 255))]
    pub incident_description: String,
    #[serde(default = "default_incident_status")]
    pub incident_status: String,
    pub created_at: Option<DateTime<Utc>>,
}

fn default_incident_status() -> String {
    "Operational".to_string()
}

impl IncidentPayload {
    pub fn into_incident(self) -> Incident {
        Incident {
            incident_id: self.incident_id,
            service_impacted: self.service_impacted,
            organization_id: self.organization_id,
            incident_name: self.incident_name,
            incident_description: self.incident_description,
            incident_status: self.incident_status,
            created_at: self.created_at.unwrap_or_else(Utc::now),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_defaults_to_operational() {
        let payload: IncidentPayload = serde_json::from_value(serde_json::json!({
            "incident_id": "inc_1",
            "service_impacted": ["svc_1"],
            "organization_id": "org_acme",
            "incident_name": "API outage",
            "incident_description": "Requests are timing out",
        }))
        .unwrap();
        assert_eq!(payload.incident_status, "Operational");
    }

    #[test]
    fn short_name_is_rejected() {
        let payload: IncidentPayload = serde_json::from_value(serde_json::json!({
            "incident_id": "inc_1",
            "service_impacted": [],
            "organization_id": "org_acme",
            "incident_name": "api",
            "incident_description": "Requests are timing out",
        }))
        .unwrap();
        assert!(payload.validate().is_err());
    }
}
