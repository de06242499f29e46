use surrealdb::{Surreal, engine::remote::ws::Client};

use crate::{
    consts::status_const::SERVICE_TABLE,
    errors::{Error, Result},
    models::service::Service,
};

pub async fn create(sdb: &Surreal<Client>, service: Service) -> Result<Service> {
    let created: Option<Service> = sdb.create(SERVICE_TABLE).content(service).await?;
    created.ok_or(Error::InternalServerError)
}

pub async fn get_all(sdb: &Surreal<Client>, organization_id: &str) -> Result<Vec<Service>> {
    let services: Vec<Service> = sdb
        .query("SELECT * FROM type::table($table) WHERE organization_id = $organization_id;")
        .bind(("table", SERVICE_TABLE))
        .bind(("organization_id", organization_id.to_string()))
        .await?
        .take(0)?;
    Ok(services)
}

pub async fn get_by_id(
    sdb: &Surreal<Client>,
    service_id: &str,
    organization_id: &str,
) -> Result<Option<Service>> {
    let services: Vec<Service> = sdb
        .query("SELECT * FROM type::table($table) WHERE service_id = $service_id AND organization_id = $organization_id;")
        .bind(("table", SERVICE_TABLE))
        .bind(("service_id", service_id.to_string()))
        .bind(("organization_id", organization_id.to_string()))
        .await?
        .take(0)?;
    Ok(services.into_iter().next())
}

pub async fn update(
    sdb: &Surreal<Client>,
    service: Service,
    organization_id: &str,
) -> Result<Service> {
    let service_id = service.service_id.clone();
    let updated: Vec<Service> = sdb
        .query("UPDATE type::table($table) CONTENT $data WHERE service_id = $service_id AND organization_id = $organization_id;")
        .bind(("table", SERVICE_TABLE))
        .bind(("data", service))
        .bind(("service_id", service_id))
        .bind(("organization_id", organization_id.to_string()))
        .await?
        .take(0)?;
    updated.into_iter().next().ok_or(Error::NotFound("Service"))
}

pub async fn delete(
    sdb: &Surreal<Client>,
    service_id: &str,
    organization_id: &str,
) -> Result<Service> {
    let deleted: Vec<Service> = sdb
        .query("DELETE FROM type::table($table) WHERE service_id = $service_id AND organization_id = $organization_id RETURN BEFORE;")
        .bind(("table", SERVICE_TABLE))
        .bind(("service_id", service_id.to_string()))
        .bind(("organization_id", organization_id.to_string()))
        .await?
        .take(0)?;
    deleted.into_iter().next().ok_or(Error::NotFound("Service"))
}
