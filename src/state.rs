use std::sync::Arc;

use surrealdb::{
    Surreal,
    engine::remote::ws::{Client, Ws},
    opt::auth::Root,
};

use crate::config::Config;
use crate::errors::Result;
use crate::identity::{ClerkGateway, IdentityProvider};
use crate::registry::ConnectionRegistry;

#[derive(Clone)]
pub struct AppState {
    pub sdb: Surreal<Client>,
    pub identity: Arc<dyn IdentityProvider>,
    pub registry: Arc<ConnectionRegistry>,
}

impl AppState {
    pub async fn init(config: &Config) -> Result<Self> {
        let sdb = Surreal::new::<Ws>(config.database_url.as_str()).await?;
        sdb.signin(Root {
            username: &config.database_user,
            password: &config.database_pass,
        })
        .await?;
        sdb.use_ns(&config.database_ns)
            .use_db(&config.database_db)
            .await?;

        let identity = Arc::new(ClerkGateway::new(config)?);

        Ok(Self {
            sdb,
            identity,
            registry: Arc::new(ConnectionRegistry::new()),
        })
    }
}
