use surrealdb::{Surreal, engine::remote::ws::Client};

use crate::{
    consts::status_const::MAINTENANCE_TABLE,
    errors::{Error, Result},
    models::maintenance::Maintenance,
};

pub async fn create(sdb: &Surreal<Client>, maintenance: Maintenance) -> Result<Maintenance> {
    let created: Option<Maintenance> = sdb.create(MAINTENANCE_TABLE).content(maintenance).await?;
    created.ok_or(Error::InternalServerError)
}

pub async fn get_all(sdb: &Surreal<Client>, organization_id: &str) -> Result<Vec<Maintenance>> {
    let maintenances: Vec<Maintenance> = sdb
        .query("SELECT * FROM type::table($table) WHERE organization_id = $organization_id;")
        .bind(("table", MAINTENANCE_TABLE))
        .bind(("organization_id", organization_id.to_string()))
        .await?
        .take(0)?;
    Ok(maintenances)
}

pub async fn get_by_id(
    sdb: &Surreal<Client>,
    maintenance_id: &str,
    organization_id: &str,
) -> Result<Option<Maintenance>> {
    let maintenances: Vec<Maintenance> = sdb
        .query("SELECT * FROM type::table($table) WHERE maintenance_id = $maintenance_id AND organization_id = $organization_id;")
        .bind(("table", MAINTENANCE_TABLE))
        .bind(("maintenance_id", maintenance_id.to_string()))
        .bind(("organization_id", organization_id.to_string()))
        .await?
        .take(0)?;
    Ok(maintenances.into_iter().next())
}

pub async fn update(
    sdb: &Surreal<Client>,
    maintenance: Maintenance,
    organization_id: &str,
) -> Result<Maintenance> {
    let maintenance_id = maintenance.maintenance_id.clone();
    let updated: Vec<Maintenance> = sdb
        .query("UPDATE type::table($table) CONTENT $data WHERE maintenance_id = $maintenance_id AND organization_id = $organization_id;")
        .bind(("table", MAINTENANCE_TABLE))
        .bind(("data", maintenance))
        .bind(("maintenance_id", maintenance_id))
        .bind(("organization_id", organization_id.to_string()))
        .await?
        .take(0)?;
    updated
        .into_iter()
        .next()
        .ok_or(Error::NotFound("Maintenance"))
}

pub async fn delete(
    sdb: &Surreal<Client>,
    maintenance_id: &str,
    organization_id: &str,
) -> Result<Maintenance> {
    let deleted: Vec<Maintenance> = sdb
        .query("DELETE FROM type::table($table) WHERE maintenance_id = $maintenance_id AND organization_id = $organization_id RETURN BEFORE;")
        .bind(("table", MAINTENANCE_TABLE))
        .bind(("maintenance_id", maintenance_id.to_string()))
        .bind(("organization_id", organization_id.to_string()))
        .await?
        .take(0)?;
    deleted
        .into_iter()
        .next()
        .ok_or(Error::NotFound("Maintenance"))
}
