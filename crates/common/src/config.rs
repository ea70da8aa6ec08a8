//! Configuration management following 12-factor app principles
//!
//! All configuration is loaded from environment variables to ensure
//! clean separation between code and config.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;

/// Where artifact records are persisted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreProvider {
    Postgres,
    Memory,
}

impl std::str::FromStr for StoreProvider {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "postgres" => Ok(Self::Postgres),
            "memory" => Ok(Self::Memory),
            other => Err(anyhow::anyhow!(
                "Unknown store provider: {other}. Supported providers: postgres, memory"
            )),
        }
    }
}

#[derive(Clone, Serialize, Deserialize)]
pub struct Config {
    pub app_name: String,

    /// Deployment environment (local, dev, prod)
    pub environment: String,

    pub store_provider: StoreProvider,

    /// Database connection URL, required for the postgres store
    pub database_url: Option<String>,

    /// Timeout applied to outbound HTTP clients
    pub http_timeout_secs: u64,

    /// Runtime configuration
    pub rust_log: String,
    pub port: u16,
}

impl std::fmt::Debug for Config {
    #[mutants::skip]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("app_name", &self.app_name)
            .field("environment", &self.environment)
            .field("store_provider", &self.store_provider)
            .field("database_url", &self.database_url.as_ref().map(|_| "[REDACTED]"))
            .field("http_timeout_secs", &self.http_timeout_secs)
            .field("rust_log", &self.rust_log)
            .field("port", &self.port)
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source
    pub fn from_vars<F>(var: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = var("ENVIRONMENT").unwrap_or_else(|| "local".to_string());
        if !matches!(environment.as_str(), "local" | "dev" | "prod") {
            return Err(anyhow::anyhow!(
                "ENVIRONMENT must be one of local, dev, prod (got {environment})"
            ));
        }

        let store_provider: StoreProvider = var("STORE_PROVIDER")
            .unwrap_or_else(|| "postgres".to_string())
            .parse()?;

        let database_url = var("DATABASE_URL");
        if store_provider == StoreProvider::Postgres && database_url.is_none() {
            return Err(anyhow::anyhow!(
                "DATABASE_URL is required for the postgres store"
            ));
        }

        let config = Self {
            app_name: var("APP_NAME").unwrap_or_else(|| "Antiquarium Service".to_string()),
            environment,
            store_provider,
            database_url,
            http_timeout_secs: var("HTTP_TIMEOUT_SECS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
            rust_log: var("RUST_LOG").unwrap_or_else(|| "antiquarium=debug".to_string()),
            port: var("PORT").and_then(|v| v.parse().ok()).unwrap_or(8000),
        };

        Ok(config)
    }
}
