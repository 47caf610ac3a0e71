use std::sync::Arc;

use shopfront_catalog::{InventoryChecker, OpenInventory};
use shopfront_core::payment::PaymentGateway;
use shopfront_core::shipping::ShippingService;
use shopfront_core::Quantity;

use crate::authorizer::PaymentAuthorizer;
use crate::fulfillment::ShipmentAdapter;
use crate::models::{CheckoutError, CheckoutReceipt, CheckoutRequest};

/// Single entry point for buying: stock check, payment, shipment.
pub struct CheckoutFacade {
    inventory: Arc<dyn InventoryChecker>,
    payments: Arc<dyn PaymentGateway>,
    shipping: Arc<dyn ShippingService>,
}

impl CheckoutFacade {
    pub fn new(
        inventory: Arc<dyn InventoryChecker>,
        payments: Arc<dyn PaymentGateway>,
        shipping: Arc<dyn ShippingService>,
    ) -> Self {
        Self {
            inventory,
            payments,
            shipping,
        }
    }

    /// Run a checkout.
    ///
    /// Products are checked one unit at a time, in request order, and the
    /// first unavailable one aborts the checkout. Payment comes next and
    /// shipping last. A shipping failure leaves the payment in place.
    pub async fn checkout(&self, request: &CheckoutRequest) -> Result<CheckoutReceipt, CheckoutError> {
        if let Some(missing) = request
            .products
            .iter()
            .find(|product| !self.inventory.is_available(product, Quantity::ONE))
        {
            let err = CheckoutError::UnavailableProduct(missing.clone());
            tracing::warn!("{}", err);
            return Err(err);
        }

        if let Err(e) = self.payments.authorize(request.total).await {
            let err = CheckoutError::PaymentDeclined(e);
            tracing::warn!("{}", err);
            return Err(err);
        }

        if let Err(e) = self.shipping.dispatch(&request.products).await {
            // TODO: refund through the payment gateway once it exposes a refund call
            let err = CheckoutError::ShipmentFailed(e);
            tracing::error!("{} (amount {})", err, request.total);
            return Err(err);
        }

        let receipt = CheckoutReceipt::for_request(request);
        tracing::info!("{}", receipt);
        Ok(receipt)
    }
}

impl Default for CheckoutFacade {
    fn default() -> Self {
        Self::new(
            Arc::new(OpenInventory),
            Arc::new(PaymentAuthorizer::default()),
            Arc::new(ShipmentAdapter::default()),
        )
    }
}
