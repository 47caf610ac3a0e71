use async_trait::async_trait;
use shopfront_core::repository::{PurchaseRecord, PurchaseStore, StorageError};
use shopfront_core::{Amount, ProductId};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;
use tracing::info;

pub struct PgPurchaseStore {
    pool: PgPool,
}

impl PgPurchaseStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn connect(connection_string: &str) -> Result<Self, StorageError> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect(connection_string)
            .await
            .map_err(|e| StorageError::Connection(e.to_string()))?;

        Ok(Self { pool })
    }

    pub async fn migrate(&self) -> Result<(), sqlx::migrate::MigrateError> {
        info!("Running database migrations...");
        sqlx::migrate!("../migrations")
            .run(&self.pool)
            .await?;
        info!("Migrations completed successfully.");
        Ok(())
    }
}

#[async_trait]
impl PurchaseStore for PgPurchaseStore {
    async fn save(&self, product_id: &ProductId, total: Amount) -> Result<PurchaseRecord, StorageError> {
        let record = PurchaseRecord::new(product_id.clone(), total);
        let total_minor = i64::try_from(total.minor_units())
            .map_err(|_| StorageError::Write(format!("total {} does not fit a BIGINT", total)))?;

        sqlx::query(
            "INSERT INTO purchases (id, product_id, total_minor, recorded_at) VALUES ($1, $2, $3, $4)",
        )
        .bind(record.id)
        .bind(record.product_id.as_str())
        .bind(total_minor)
        .bind(record.recorded_at)
        .execute(&self.pool)
        .await
        .map_err(|e| StorageError::Write(e.to_string()))?;

        info!("Purchase {} saved to database", record.id);
        Ok(record)
    }
}
