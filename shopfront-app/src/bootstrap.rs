use std::sync::Arc;

use shopfront_catalog::{InventoryHub, InventoryObserver, StockLogObserver};
use shopfront_core::notification::NotificationSender;
use shopfront_core::repository::{PurchaseStore, StorageError};
use shopfront_core::Quantity;
use shopfront_order::CheckoutFacade;
use shopfront_store::app_config::{Config, NotificationTransport};
use shopfront_store::events::KafkaError;
use shopfront_store::{
    EventProducer, InMemoryPurchaseStore, KafkaNotificationSender, KafkaStockPublisher, LogNotificationSender,
    PgPurchaseStore,
};

use crate::driver::{Storefront, StorefrontSettings};

#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
    #[error("Kafka transport selected but kafka.brokers is not set")]
    MissingBrokers,
    #[error("Kafka producer creation failed: {0}")]
    Kafka(#[from] KafkaError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("Database migration failed: {0}")]
    Migration(String),
}

/// Wire a `Storefront` from configuration.
pub async fn build_storefront(config: &Config) -> Result<Storefront, BootstrapError> {
    let producer = match &config.kafka.brokers {
        Some(brokers) => Some(EventProducer::new(brokers)?),
        None => None,
    };

    let hub = Arc::new(InventoryHub::new());
    hub.register(Arc::new(StockLogObserver));
    if let Some(producer) = &producer {
        let publisher: Arc<dyn InventoryObserver> =
            Arc::new(KafkaStockPublisher::new(producer.clone(), config.kafka.stock_topic.clone()));
        hub.register(publisher);
        tracing::info!("Publishing stock updates to {}", config.kafka.stock_topic);
    }

    let notifier: Arc<dyn NotificationSender> = match config.notification.transport {
        NotificationTransport::Log => Arc::new(LogNotificationSender::new(config.notification.subject.clone())),
        NotificationTransport::Kafka => {
            let producer = producer.clone().ok_or(BootstrapError::MissingBrokers)?;
            Arc::new(KafkaNotificationSender::new(
                producer,
                config.kafka.notification_topic.clone(),
                config.notification.subject.clone(),
            ))
        }
    };

    let store: Arc<dyn PurchaseStore> = match &config.database.url {
        Some(url) => {
            let store = PgPurchaseStore::connect(url).await?;
            store
                .migrate()
                .await
                .map_err(|e| BootstrapError::Migration(e.to_string()))?;
            Arc::new(store)
        }
        None => {
            tracing::warn!("No database configured, purchases are kept in memory");
            Arc::new(InMemoryPurchaseStore::new())
        }
    };

    Ok(Storefront {
        checkout: CheckoutFacade::default(),
        hub,
        notifier,
        store,
        settings: StorefrontSettings {
            recipient: config.notification.recipient.clone(),
            message: config.notification.message.clone(),
            restock_quantity: Quantity(config.inventory.restock_quantity),
        },
        events: producer,
    })
}
