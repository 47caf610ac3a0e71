use std::sync::Arc;
use std::time::Duration;

use shopfront_catalog::{BroadcastError, InventoryHub};
use shopfront_core::notification::NotificationSender;
use shopfront_core::repository::{PurchaseRecord, PurchaseStore};
use shopfront_core::Quantity;
use shopfront_order::{CheckoutError, CheckoutFacade, CheckoutReceipt, CheckoutRequest};
use shopfront_shared::Masked;
use shopfront_store::EventProducer;
use tracing::{error, info, warn};

use crate::input::PurchaseInput;

#[derive(Debug, Clone)]
pub struct StorefrontSettings {
    pub recipient: String,
    pub message: String,
    pub restock_quantity: Quantity,
}

/// Everything one purchase run needs, wired together.
pub struct Storefront {
    pub checkout: CheckoutFacade,
    pub hub: Arc<InventoryHub>,
    pub notifier: Arc<dyn NotificationSender>,
    pub store: Arc<dyn PurchaseStore>,
    pub settings: StorefrontSettings,
    /// Shared Kafka producer, present when brokers are configured
    pub events: Option<EventProducer>,
}

/// What happened during one run
#[derive(Debug)]
pub struct RunReport {
    pub checkout: Result<CheckoutReceipt, CheckoutError>,
    pub stock_update: Result<usize, BroadcastError>,
    pub notification_sent: bool,
    pub record: Option<PurchaseRecord>,
}

impl RunReport {
    /// The one line shown to the shopper
    pub fn status_line(&self) -> String {
        match &self.checkout {
            Ok(receipt) => receipt.to_string(),
            Err(e) => e.to_string(),
        }
    }
}

impl Storefront {
    /// Checkout, stock broadcast, confirmation e-mail, purchase record, in
    /// that order. Everything after checkout runs regardless of its outcome
    /// and only logs its own failures.
    pub async fn run_purchase(&self, input: &PurchaseInput) -> RunReport {
        let request = CheckoutRequest::single(input.product.clone(), input.total);
        let checkout = self.checkout.checkout(&request).await;

        let stock_update = self.hub.update(&input.product, self.settings.restock_quantity);
        if let Err(e) = &stock_update {
            warn!("Stock update broadcast incomplete: {}", e);
        }

        let notification_sent = match self
            .notifier
            .send(&self.settings.recipient, &self.settings.message)
            .await
        {
            Ok(()) => {
                info!("E-mail sent to {}", Masked(self.settings.recipient.as_str()));
                true
            }
            Err(e) => {
                error!("Failed to send e-mail: {}", e);
                false
            }
        };

        let record = match self.store.save(&input.product, input.total).await {
            Ok(record) => {
                info!("Purchase details saved (record {})", record.id);
                Some(record)
            }
            Err(e) => {
                error!("Failed to save purchase details: {}", e);
                None
            }
        };

        RunReport {
            checkout,
            stock_update,
            notification_sent,
            record,
        }
    }

    /// Wait for queued Kafka events to reach the broker. Call before exit,
    /// anything still queued when the producer is dropped is lost.
    pub fn shutdown(&self, timeout: Duration) -> bool {
        let Some(events) = &self.events else {
            return true;
        };

        match events.flush(timeout) {
            Ok(()) => {
                info!("Pending events flushed");
                true
            }
            Err(e) => {
                error!("Failed to flush pending events: {}", e);
                false
            }
        }
    }
}
