use sqlx::{PgPool, migrate::Migrator, postgres::PgPoolOptions};

use crate::{config::DatabaseConfig, error::Result};

static MIGRATOR: Migrator = sqlx::migrate!();

/// Connects to the catalog database and brings its schema up to date.
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.url)
        .await?;

    tracing::info!(
        max_connections = config.max_connections,
        "Connected to catalog database"
    );

    apply_migrations(&pool).await?;

    Ok(pool)
}

async fn apply_migrations(pool: &PgPool) -> Result<()> {
    let known = MIGRATOR.iter().count();
    tracing::info!(known, "Applying catalog schema migrations");

    if let Err(e) = MIGRATOR.run(pool).await {
        tracing::error!("Catalog schema migration failed: {}", e);
        return Err(e.into());
    }

    let latest = MIGRATOR.iter().map(|m| m.version).max();
    tracing::info!(?latest, "Catalog schema is current");
    Ok(())
}

pub async fn check_health(pool: &PgPool) -> Result<()> {
    sqlx::query_scalar::<_, i32>("SELECT 1").fetch_one(pool).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn migrations_cover_the_catalog_tables() {
        let descriptions: Vec<_> = MIGRATOR.iter().map(|m| m.description.to_string()).collect();
        assert_eq!(
            descriptions,
            ["create categories", "create products", "create inquiries"]
        );
    }

    #[test]
    fn migrations_are_ordered_by_version() {
        let versions: Vec<i64> = MIGRATOR.iter().map(|m| m.version).collect();
        assert!(versions.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
