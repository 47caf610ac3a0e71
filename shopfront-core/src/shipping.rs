use async_trait::async_trait;

use crate::ProductId;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShipmentError {
    #[error("Carrier rejected shipment: {0}")]
    Rejected(String),
    #[error("Carrier unavailable: {0}")]
    CarrierUnavailable(String),
}

/// The shipping subsystem in its native shape: a fixed-size parcel of raw
/// product codes.
#[async_trait]
pub trait ShipmentDispatcher: Send + Sync {
    async fn ship(&self, parcel: Box<[String]>) -> Result<(), ShipmentError>;
}

/// What checkout talks to: an ordered list of catalog products.
#[async_trait]
pub trait ShippingService: Send + Sync {
    async fn dispatch(&self, products: &[ProductId]) -> Result<(), ShipmentError>;
}

/// Accepts every parcel without doing anything.
#[derive(Debug, Default, Clone)]
pub struct StubShipmentDispatcher;

#[async_trait]
impl ShipmentDispatcher for StubShipmentDispatcher {
    async fn ship(&self, parcel: Box<[String]>) -> Result<(), ShipmentError> {
        tracing::debug!("Stub dispatcher accepted parcel of {} item(s)", parcel.len());
        Ok(())
    }
}
