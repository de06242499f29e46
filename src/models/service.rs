use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ServiceStatus {
    #[default]
    Operational,
    DegradedPerformance,
    PartialOutage,
    MajorOutage,
    UnderMaintenance,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Service {
    pub service_id: String,
    pub organization_id: String,
    pub service_name: String,
    pub service_description: String,
    pub service_status: ServiceStatus,
    pub start_date: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct ServicePayload {
    #[validate(length(min = 1))]
    pub service_id: String,
    #[validate(length(min = 1))]
    pub organization_id: String,
    #[validate(length(min = 1, max = 255))]
    pub service_name: String,
    #[validate(length(min = 1, max = 255))]
    pub service_description: String,
    #[serde(default)]
    pub service_status: ServiceStatus,
    pub start_date: Option<DateTime<Utc>>,
}

impl ServicePayload {
    /// `start_date` defaults to the moment of creation when the caller omits it.
    pub fn into_service(self) -> Service {
        Service {
            service_id: self.service_id,
            organization_id: self.organization_id,
            service_name: self.service_name,
            service_description: self.service_description,
            service_status: self.service_status,
            start_date: self.start_date.unwrap_or_else(Utc::now),
        }
    }
}
