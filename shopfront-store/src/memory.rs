use async_trait::async_trait;
use parking_lot::Mutex;
use shopfront_core::repository::{PurchaseRecord, PurchaseStore, StorageError};
use shopfront_core::{Amount, ProductId};

/// Keeps purchases for the lifetime of the process
#[derive(Default)]
pub struct InMemoryPurchaseStore {
    records: Mutex<Vec<PurchaseRecord>>,
}

impl InMemoryPurchaseStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<PurchaseRecord> {
        self.records.lock().clone()
    }
}

#[async_trait]
impl PurchaseStore for InMemoryPurchaseStore {
    async fn save(&self, product_id: &ProductId, total: Amount) -> Result<PurchaseRecord, StorageError> {
        let record = PurchaseRecord::new(product_id.clone(), total);
        self.records.lock().push(record.clone());
        tracing::debug!("Purchase {} kept in memory", record.id);
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_records_are_kept_in_order() {
        let store = InMemoryPurchaseStore::new();

        store.save(&ProductId::from("tea"), Amount::from_minor(450)).await.unwrap();
        store.save(&ProductId::from("cup"), Amount::from_minor(1200)).await.unwrap();

        let records = store.records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].product_id, ProductId::from("tea"));
        assert_eq!(records[1].total, Amount::from_minor(1200));
        assert_ne!(records[0].id, records[1].id);
    }
}
