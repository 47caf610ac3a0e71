pub mod inventory;
pub mod notifier;

pub use inventory::{InventoryChecker, OpenInventory, StockLedger};
pub use notifier::{BroadcastError, InventoryHub, InventoryObserver, ObserverError, StockLogObserver};
