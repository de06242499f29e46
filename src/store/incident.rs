use surrealdb::{Surreal, engine::remote::ws::Client};

use crate::{
    consts::status_const::INCIDENT_TABLE,
    errors::{Error, Result},
    models::incident::Incident,
};

pub async fn create(sdb: &Surreal<Client>, incident: Incident) -> Result<Incident> {
    let created: Option<Incident> = sdb.create(INCIDENT_TABLE).content(incident).await?;
    created.ok_or(Error::InternalServerError)
}

pub async fn get_all(sdb: &Surreal<Client>, organization_id: &str) -> Result<Vec<Incident>> {
    let incidents: Vec<Incident> = sdb
        .query("SELECT * FROM type::table($table) WHERE organization_id = $organization_id;")
        .bind(("table", INCIDENT_TABLE))
        .bind(("organization_id", organization_id.to_string()))
        .await?
        .take(0)?;
    Ok(incidents)
}

pub async fn get_by_id(
    sdb: &Surreal<Client>,
    incident_id: &str,
    organization_id: &str,
) -> Result<Option<Incident>> {
    let incidents: Vec<Incident> = sdb
        .query("SELECT * FROM type::table($table) WHERE incident_id = $incident_id AND organization_id = $organization_id;")
        .bind(("table", INCIDENT_TABLE))
        .bind(("incident_id", incident_id.to_string()))
        .bind(("organization_id", organization_id.to_string()))
        .await?
        .take(0)?;
    Ok(incidents.into_iter().next())
}

/// Replaces the stored record wholesale. Zero matched rows is `NotFound`.
pub async fn update(
    sdb: &Surreal<Client>,
    incident: Incident,
    organization_id: &str,
) -> Result<Incident> {
    let incident_id = incident.incident_id.clone();
    let updated: Vec<Incident> = sdb
        .query("UPDATE type::table($table) CONTENT $data WHERE incident_id = $incident_id AND organization_id = $organization_id;")
        .bind(("table", INCIDENT_TABLE))
        .bind(("data", incident))
        .bind(("incident_id", incident_id))
        .bind(("organization_id", organization_id.to_string()))
        .await?
        .take(0)?;
    updated.into_iter().next().ok_or(Error::NotFound("Incident"))
}

/// Zero matched rows is `NotFound`, not success.
pub async fn delete(
    sdb: &Surreal<Client>,
    incident_id: &str,
    organization_id: &str,
) -> Result<Incident> {
    let deleted: Vec<Incident> = sdb
        .query("DELETE FROM type::table($table) WHERE incident_id = $incident_id AND organization_id = $organization_id RETURN BEFORE;")
        .bind(("table", INCIDENT_TABLE))
        .bind(("incident_id", incident_id.to_string()))
        .bind(("organization_id", organization_id.to_string()))
        .await?
        .take(0)?;
    deleted.into_iter().next().ok_or(Error::NotFound("Incident"))
}
