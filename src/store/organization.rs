use surrealdb::{Surreal, engine::remote::ws::Client};

use crate::{
    consts::status_const::ORGANIZATION_TABLE,
    errors::{Error, Result},
    models::organization::Organization,
};

/// Refreshes the local mirror of a provider organization, keyed by its id.
/// An existing row keeps its original `created_at`.
pub async fn upsert(sdb: &Surreal<Client>, mut organization: Organization) -> Result<Organization> {
    let existing = get_by_id(sdb, &organization.organization_id).await?;
    if let Some(existing) = existing {
        organization.created_at = existing.created_at;
        let organization_id = organization.organization_id.clone();
        let updated: Vec<Organization> = sdb
            .query("UPDATE type::table($table) CONTENT $data WHERE organization_id = $organization_id;")
            .bind(("table", ORGANIZATION_TABLE))
            .bind(("data", organization))
            .bind(("organization_id", organization_id))
            .await?
            .take(0)?;
        return updated
            .into_iter()
            .next()
            .ok_or(Error::NotFound("Organization"));
    }
    let created: Option<Organization> = sdb
        .create(ORGANIZATION_TABLE)
        .content(organization)
        .await?;
    created.ok_or(Error::InternalServerError)
}

pub async fn get_by_id(
    sdb: &Surreal<Client>,
    organization_id: &str,
) -> Result<Option<Organization>> {
    let organizations: Vec<Organization> = sdb
        .query("SELECT * FROM type::table($table) WHERE organization_id = $organization_id;")
        .bind(("table", ORGANIZATION_TABLE))
        .bind(("organization_id", organization_id.to_string()))
        .await?
        .take(0)?;
    Ok(organizations.into_iter().next())
}

pub async fn get_by_slug(sdb: &Surreal<Client>, slug: &str) -> Result<Option<Organization>> {
    let organizations: Vec<Organization> = sdb
        .query("SELECT * FROM type::table($table) WHERE organization_slug = $slug;")
        .bind(("table", ORGANIZATION_TABLE))
        .bind(("slug", slug.to_string()))
        .await?
        .take(0)?;
    Ok(organizations.into_iter().next())
}
