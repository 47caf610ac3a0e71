use std::sync::Arc;

use async_trait::async_trait;
use shopfront_core::shipping::{ShipmentDispatcher, ShipmentError, ShippingService, StubShipmentDispatcher};
use shopfront_core::ProductId;

/// Presents a `ShipmentDispatcher` as a `ShippingService`.
///
/// Only the representation changes: the products reach the dispatcher as a
/// boxed slice of raw codes, same order, duplicates kept.
pub struct ShipmentAdapter {
    dispatcher: Arc<dyn ShipmentDispatcher>,
}

impl ShipmentAdapter {
    pub fn new(dispatcher: Arc<dyn ShipmentDispatcher>) -> Self {
        Self { dispatcher }
    }

    fn to_parcel(products: &[ProductId]) -> Box<[String]> {
        products.iter().map(|p| p.as_str().to_owned()).collect()
    }
}

impl Default for ShipmentAdapter {
    fn default() -> Self {
        Self::new(Arc::new(StubShipmentDispatcher))
    }
}

#[async_trait]
impl ShippingService for ShipmentAdapter {
    async fn dispatch(&self, products: &[ProductId]) -> Result<(), ShipmentError> {
        let parcel = Self::to_parcel(products);
        tracing::debug!("Handing parcel of {} item(s) to dispatcher", parcel.len());
        self.dispatcher.ship(parcel).await
    }
}
