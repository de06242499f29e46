pub mod status_const {
    pub const SERVICE_TABLE: &str = "services";
    pub const INCIDENT_TABLE: &str = "incidents";
    pub const MAINTENANCE_TABLE: &str = "maintenances";
    pub const ACTIVITY_TABLE: &str = "activities";
    pub const ORGANIZATION_TABLE: &str = "organizations";
}
