pub mod collection;
pub mod error;
pub mod filter;

pub use collection::{Collection, DeleteResult, InsertResult, UpdateResult};
pub use error::StoreError;
pub use filter::DocFilter;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

/// The fixed set of collections this service persists.
pub const COLLECTIONS: &[&str] = &[
    "packages", "guides", "reviews", "users", "wishlist", "story", "bookings",
];

/// Client for the document store: a single shared connection pool plus typed
/// collection handles. Constructed once at startup and handed to the request
/// handlers through application state - never a hidden singleton.
#[derive(Debug, Clone)]
pub struct DocumentStore {
    pool: PgPool,
}

impl DocumentStore {
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await
            .map_err(|e| StoreError::Connection(e.to_string()))?;

        info!("connected to document store");
        Ok(Self { pool })
    }

    /// Wrap an existing pool.
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create the backing tables for every known collection if they do not
    /// exist yet. Each collection is a plain (id, doc) JSONB table.
    pub async fn ensure_collections(&self) -> Result<(), StoreError> {
        for name in COLLECTIONS {
            let sql = format!(
                "CREATE TABLE IF NOT EXISTS \"{}\" (id UUID PRIMARY KEY, doc JSONB NOT NULL)",
                name
            );
            sqlx::query(&sql).execute(&self.pool).await?;
        }
        info!("document collections ready");
        Ok(())
    }

    pub fn collection(&self, name: &str) -> Result<Collection, StoreError> {
        if !COLLECTIONS.contains(&name) {
            return Err(StoreError::InvalidCollection(name.to_string()));
        }
        Ok(Collection::new(name.to_string(), self.pool.clone()))
    }

    /// Pings the pool to ensure connectivity
    pub async fn health_check(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
