use std::{env, str::FromStr};

use crate::error::{AppError, Result};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub store: StoreBackend,
    pub database: Option<DatabaseConfig>,
    pub cors: CorsConfig,
    pub catalog: CatalogConfig,
    pub seed_catalog: bool,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub max_body_size: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Postgres,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(StoreBackend::Postgres),
            "memory" => Ok(StoreBackend::Memory),
            other => Err(AppError::Config(format!(
                "Invalid STORE_BACKEND value: {}",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Clone, Default)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

/// Listing sizes used by the storefront pages.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub page_size: u32,
    pub home_featured_limit: u32,
    pub home_category_limit: usize,
    pub home_latest_limit: u32,
    pub related_limit: u32,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            page_size: 12,
            home_featured_limit: 8,
            home_category_limit: 6,
            home_latest_limit: 6,
            related_limit: 4,
        }
    }
}

fn parse_var<T: FromStr>(name: &str, default: T) -> Result<T> {
    match env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|_| AppError::Config(format!("Invalid {} value", name))),
        Err(env::VarError::NotPresent) => Ok(default),
        Err(e) => Err(e.into()),
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let store: StoreBackend = env::var("STORE_BACKEND")
            .unwrap_or_else(|_| "postgres".to_string())
            .parse()?;

        let database = match store {
            StoreBackend::Postgres => Some(DatabaseConfig {
                url: env::var("DB_URL")
                    .map_err(|_| AppError::Config("DB_URL not set".to_string()))?,
                max_connections: parse_var("DB_MAX_CONNECTIONS", 20)?,
            }),
            StoreBackend::Memory => None,
        };

        let defaults = CatalogConfig::default();

        Ok(Self {
            server: ServerConfig {
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: parse_var("PORT", 3000)?,
                max_body_size: parse_var("MAX_BODY_SIZE", 1_048_576)?,
            },
            store,
            database,
            cors: CorsConfig {
                allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                    .unwrap_or_default()
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect(),
            },
            catalog: CatalogConfig {
                page_size: parse_var("CATALOG_PAGE_SIZE", defaults.page_size)?,
                home_featured_limit: parse_var("HOME_FEATURED_LIMIT", defaults.home_featured_limit)?,
                home_category_limit: parse_var("HOME_CATEGORY_LIMIT", defaults.home_category_limit)?,
                home_latest_limit: parse_var("HOME_LATEST_LIMIT", defaults.home_latest_limit)?,
                related_limit: parse_var("RELATED_LIMIT", defaults.related_limit)?,
            },
            seed_catalog: parse_var("SEED_CATALOG", false)?,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
