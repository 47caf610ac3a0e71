use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use shopfront_core::{ProductId, Quantity};

use crate::notifier::{BroadcastError, InventoryHub};

/// Answers whether a product can be sold in the requested quantity.
/// Must not reserve or otherwise change stock.
pub trait InventoryChecker: Send + Sync {
    fn is_available(&self, product: &ProductId, quantity: Quantity) -> bool;
}

/// Treats every product as in stock.
#[derive(Debug, Default, Clone)]
pub struct OpenInventory;

impl InventoryChecker for OpenInventory {
    fn is_available(&self, _product: &ProductId, _quantity: Quantity) -> bool {
        true
    }
}

/// In-memory stock levels. Unknown products are out of stock.
///
/// When a hub is attached every level change is broadcast to its observers.
pub struct StockLedger {
    levels: RwLock<HashMap<ProductId, Quantity>>,
    hub: Option<Arc<InventoryHub>>,
}

impl StockLedger {
    pub fn new() -> Self {
        Self {
            levels: RwLock::new(HashMap::new()),
            hub: None,
        }
    }

    pub fn with_hub(hub: Arc<InventoryHub>) -> Self {
        Self {
            levels: RwLock::new(HashMap::new()),
            hub: Some(hub),
        }
    }

    /// Get current stock level
    pub fn level(&self, product: &ProductId) -> Option<Quantity> {
        self.levels.read().get(product).copied()
    }

    /// Record a new stock level and notify observers.
    ///
    /// The level is stored even when some observers fail.
    pub fn set_level(&self, product: ProductId, quantity: Quantity) -> Result<(), BroadcastError> {
        self.levels.write().insert(product.clone(), quantity);
        tracing::debug!("Stock level for {} set to {}", product, quantity);

        match &self.hub {
            Some(hub) => hub.update(&product, quantity).map(|_| ()),
            None => Ok(()),
        }
    }
}

impl Default for StockLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl InventoryChecker for StockLedger {
    fn is_available(&self, product: &ProductId, quantity: Quantity) -> bool {
        self.level(product).is_some_and(|level| level >= quantity)
    }
}
