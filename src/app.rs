use std::sync::Arc;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    config::{AppConfig, CatalogConfig, StoreBackend},
    database::{self, CatalogStore, MemoryStore, PgStore, seed},
    error::{AppError, Result},
    routes,
};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn CatalogStore>,
    pub catalog: Arc<CatalogConfig>,
}

impl AppState {
    pub fn new(store: Arc<dyn CatalogStore>, catalog: CatalogConfig) -> Self {
        Self {
            store,
            catalog: Arc::new(catalog),
        }
    }
}

async fn open_store(config: &AppConfig) -> Result<Arc<dyn CatalogStore>> {
    match config.store {
        StoreBackend::Postgres => {
            let database = config.database.as_ref().ok_or_else(|| {
                AppError::Config("Postgres backend selected without DB_URL".to_string())
            })?;
            let pool = database::create_pool(database).await?;
            Ok(Arc::new(PgStore::new(pool)))
        }
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory store; data is lost on restart");
            Ok(Arc::new(MemoryStore::new()))
        }
    }
}

/// Routes plus request tracing, without deployment-specific layers.
pub fn router(state: AppState) -> Router {
    routes::create_router()
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn build(config: &AppConfig) -> Result<Router> {
    let store = open_store(config).await?;

    if config.seed_catalog {
        seed::seed_catalog(store.as_ref()).await?;
    }

    let state = AppState::new(store, config.catalog.clone());
    let mut app = router(state).layer(DefaultBodyLimit::max(config.server.max_body_size));

    if !config.cors.allowed_origins.is_empty() {
        let allowed_origins: Vec<HeaderValue> = config
            .cors
            .allowed_origins
            .iter()
            .map(|origin| {
                origin.parse::<HeaderValue>().map_err(|_| {
                    AppError::Config(format!("Invalid CORS origin: {}", origin))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let cors = CorsLayer::new()
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([http::header::CONTENT_TYPE, http::header::ACCEPT])
            .allow_origin(allowed_origins);

        app = app.layer(cors);
    }

    Ok(app)
}
