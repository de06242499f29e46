use std::env;
use std::time::Duration;

use crate::errors::{Error, Result};

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";
const DEFAULT_DATABASE_URL: &str = "localhost:8050";
const DEFAULT_CLERK_API_URL: &str = "https://api.clerk.com/v1";
const DEFAULT_PROVIDER_TIMEOUT_MS: u64 = 5_000;

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub database_url: String,
    pub database_user: String,
    pub database_pass: String,
    pub database_ns: String,
    pub database_db: String,
    pub clerk_api_url: String,
    pub clerk_secret_key: String,
    pub provider_timeout: Duration,
}

impl Config {
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();

        let provider_timeout_ms = env::var("PROVIDER_TIMEOUT_MS")
            .ok()
            .and_then(|raw| raw.parse::<u64>().ok())
            .unwrap_or(DEFAULT_PROVIDER_TIMEOUT_MS);

        Ok(Self {
            bind_addr: env_or("BIND_ADDR", DEFAULT_BIND_ADDR),
            database_url: env_or("DATABASE_URL", DEFAULT_DATABASE_URL),
            database_user: env_or("DATABASE_USER", "root"),
            database_pass: env_or("DATABASE_PASS", "secret"),
            database_ns: env_or("DATABASE_NS", "statuspage"),
            database_db: env_or("DATABASE_DB", "statuspage"),
            clerk_api_url: env_or("CLERK_API_URL", DEFAULT_CLERK_API_URL),
            clerk_secret_key: env::var("CLERK_SECRET_KEY")
                .map_err(|_| Error::MissingConfig("CLERK_SECRET_KEY"))?,
            provider_timeout: Duration::from_millis(provider_timeout_ms),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
