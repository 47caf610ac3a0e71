use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Amount, ProductId};

/// A completed purchase as it is written to storage
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PurchaseRecord {
    pub id: Uuid,
    pub product_id: ProductId,
    pub total: Amount,
    pub recorded_at: DateTime<Utc>,
}

impl PurchaseRecord {
    pub fn new(product_id: ProductId, total: Amount) -> Self {
        Self {
            id: Uuid::new_v4(),
            product_id,
            total,
            recorded_at: Utc::now(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Storage connection failed: {0}")]
    Connection(String),
    #[error("Storage write failed: {0}")]
    Write(String),
}

/// Durable storage for purchases
#[async_trait]
pub trait PurchaseStore: Send + Sync {
    async fn save(&self, product_id: &ProductId, total: Amount) -> Result<PurchaseRecord, StorageError>;
}
