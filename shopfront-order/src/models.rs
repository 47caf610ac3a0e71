use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shopfront_core::payment::PaymentError;
use shopfront_core::shipping::ShipmentError;
use shopfront_core::{Amount, ProductId};
use uuid::Uuid;

/// One checkout attempt: products in the order they are checked, plus the total charge.
/// Duplicates are allowed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckoutRequest {
    pub products: Vec<ProductId>,
    pub total: Amount,
}

impl CheckoutRequest {
    pub fn new(products: Vec<ProductId>, total: Amount) -> Self {
        Self { products, total }
    }

    pub fn single(product: ProductId, total: Amount) -> Self {
        Self::new(vec![product], total)
    }
}

/// Proof of a completed checkout
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckoutReceipt {
    pub order_id: Uuid,
    pub products: Vec<ProductId>,
    pub total: Amount,
    pub completed_at: DateTime<Utc>,
}

impl CheckoutReceipt {
    pub fn for_request(request: &CheckoutRequest) -> Self {
        Self {
            order_id: Uuid::new_v4(),
            products: request.products.clone(),
            total: request.total,
            completed_at: Utc::now(),
        }
    }
}

impl fmt::Display for CheckoutReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Purchase completed successfully (order {}, total {})", self.order_id, self.total)
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CheckoutError {
    #[error("Product {0} is not available")]
    UnavailableProduct(ProductId),

    #[error("Payment not authorized: {0}")]
    PaymentDeclined(#[source] PaymentError),

    /// Payment was already taken when this happens. Nothing is refunded.
    #[error("Shipment failed after payment was taken: {0}")]
    ShipmentFailed(#[source] ShipmentError),
}

impl CheckoutError {
    /// Short machine-comparable reason
    pub fn reason(&self) -> &'static str {
        match self {
            CheckoutError::UnavailableProduct(_) => "unavailable product",
            CheckoutError::PaymentDeclined(_) => "payment declined",
            CheckoutError::ShipmentFailed(_) => "shipment failed",
        }
    }
}
