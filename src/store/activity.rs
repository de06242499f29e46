use surrealdb::{Surreal, engine::remote::ws::Client};

use crate::{
    consts::status_const::ACTIVITY_TABLE,
    errors::{Error, Result},
    models::activity::Activity,
};

/// Activities are append-only; there is no update or delete path.
pub async fn create(sdb: &Surreal<Client>, activity: Activity) -> Result<Activity> {
    let created: Option<Activity> = sdb.create(ACTIVITY_TABLE).content(activity).await?;
    created.ok_or(Error::InternalServerError)
}

pub async fn get_all(sdb: &Surreal<Client>, organization_id: &str) -> Result<Vec<Activity>> {
    let activities: Vec<Activity> = sdb
        .query("SELECT * FROM type::table($table) WHERE organization_id = $organization_id;")
        .bind(("table", ACTIVITY_TABLE))
        .bind(("organization_id", organization_id.to_string()))
        .await?
        .take(0)?;
    Ok(activities)
}

/// All activities about one incident or maintenance record, in store
/// iteration order.
pub async fn get_by_actor_id(
    sdb: &Surreal<Client>,
    actor_id: &str,
    organization_id: &str,
) -> Result<Vec<Activity>> {
    let activities: Vec<Activity> = sdb
        .query("SELECT * FROM type::table($table) WHERE actor_id = $actor_id AND organization_id = $organization_id;")
        .bind(("table", ACTIVITY_TABLE))
        .bind(("actor_id", actor_id.to_string()))
        .bind(("organization_id", organization_id.to_string()))
        .await?
        .take(0)?;
    Ok(activities)
}
