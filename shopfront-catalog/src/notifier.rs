use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use shopfront_core::{ProductId, Quantity};

/// Something that wants to hear about stock level changes.
pub trait InventoryObserver: Send + Sync {
    fn product_updated(&self, product: &ProductId, quantity: Quantity) -> Result<(), ObserverError>;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Observer failed: {0}")]
pub struct ObserverError(pub String);

#[derive(Debug, thiserror::Error)]
#[error("{} of {attempted} observer(s) failed for product {product}", .failures.len())]
pub struct BroadcastError {
    pub product: ProductId,
    pub attempted: usize,
    pub failures: Vec<ObserverError>,
}

/// Identity of a registered observer: the address of its shared allocation.
/// The registry holds a clone of the `Arc`, so the address cannot be reused
/// while the entry exists.
type ObserverKey = usize;

fn key_of(observer: &Arc<dyn InventoryObserver>) -> ObserverKey {
    Arc::as_ptr(observer) as *const () as usize
}

/// Registry of inventory observers with synchronous fan-out.
///
/// Registration is a set: registering the same `Arc` twice keeps one entry,
/// unregistering an unknown observer does nothing. `update` delivers to a
/// snapshot of the registry taken under the lock, so concurrent
/// (un)registration never interleaves with a broadcast in progress and
/// observers may (un)register from inside their callback.
///
/// One failing observer does not stop delivery to the others; all failures
/// are reported together once every observer has been called.
pub struct InventoryHub {
    observers: RwLock<HashMap<ObserverKey, Arc<dyn InventoryObserver>>>,
}

impl InventoryHub {
    pub fn new() -> Self {
        Self {
            observers: RwLock::new(HashMap::new()),
        }
    }

    /// Returns `true` if the observer was not registered before.
    pub fn register(&self, observer: Arc<dyn InventoryObserver>) -> bool {
        let key = key_of(&observer);
        let mut observers = self.observers.write();
        if observers.contains_key(&key) {
            return false;
        }
        observers.insert(key, observer);
        true
    }

    /// Returns `true` if the observer was registered.
    pub fn unregister(&self, observer: &Arc<dyn InventoryObserver>) -> bool {
        self.observers.write().remove(&key_of(observer)).is_some()
    }

    pub fn is_registered(&self, observer: &Arc<dyn InventoryObserver>) -> bool {
        self.observers.read().contains_key(&key_of(observer))
    }

    pub fn len(&self) -> usize {
        self.observers.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.read().is_empty()
    }

    /// Notify every registered observer of a new stock level.
    ///
    /// Returns the number of observers notified. Delivery order is unspecified.
    pub fn update(&self, product: &ProductId, quantity: Quantity) -> Result<usize, BroadcastError> {
        let snapshot: Vec<Arc<dyn InventoryObserver>> = self.observers.read().values().cloned().collect();
        let attempted = snapshot.len();

        let failures: Vec<ObserverError> = snapshot
            .iter()
            .filter_map(|observer| observer.product_updated(product, quantity).err())
            .collect();

        if failures.is_empty() {
            tracing::debug!("Stock update for {} delivered to {} observer(s)", product, attempted);
            return Ok(attempted);
        }

        for failure in &failures {
            tracing::error!("Stock update for {} not delivered: {}", product, failure);
        }

        Err(BroadcastError {
            product: product.clone(),
            attempted,
            failures,
        })
    }
}

impl Default for InventoryHub {
    fn default() -> Self {
        Self::new()
    }
}

/// Writes every stock change to the log.
#[derive(Debug, Default, Clone)]
pub struct StockLogObserver;

impl InventoryObserver for StockLogObserver {
    fn product_updated(&self, product: &ProductId, quantity: Quantity) -> Result<(), ObserverError> {
        tracing::info!("Inventory updated - product: {}, quantity: {}", product, quantity);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct Recorder {
        seen: Mutex<Vec<(ProductId, Quantity)>>,
    }

    impl Recorder {
        fn calls(&self) -> Vec<(ProductId, Quantity)> {
            self.seen.lock().clone()
        }
    }

    impl InventoryObserver for Recorder {
        fn product_updated(&self, product: &ProductId, quantity: Quantity) -> Result<(), ObserverError> {
            self.seen.lock().push((product.clone(), quantity));
            Ok(())
        }
    }

    struct Broken;

    impl InventoryObserver for Broken {
        fn product_updated(&self, _product: &ProductId, _quantity: Quantity) -> Result<(), ObserverError> {
            Err(ObserverError("disk full".to_string()))
        }
    }

    fn observer(recorder: &Arc<Recorder>) -> Arc<dyn InventoryObserver> {
        recorder.clone()
    }

    #[test]
    fn test_double_register_notifies_once() {
        let hub = InventoryHub::new();
        let o1 = Arc::new(Recorder::default());

        assert!(hub.register(observer(&o1)));
        assert!(!hub.register(observer(&o1)));
        assert_eq!(hub.len(), 1);

        assert_eq!(hub.update(&ProductId::from("P"), Quantity(5)).unwrap(), 1);
        assert_eq!(o1.calls(), vec![(ProductId::from("P"), Quantity(5))]);
    }

    #[test]
    fn test_unregistered_observer_is_not_notified() {
        let hub = InventoryHub::new();
        let o1 = Arc::new(Recorder::default());

        hub.register(observer(&o1));
        assert!(hub.unregister(&observer(&o1)));
        assert!(!hub.is_registered(&observer(&o1)));

        assert_eq!(hub.update(&ProductId::from("P"), Quantity(5)).unwrap(), 0);
        assert!(o1.calls().is_empty());
    }

    #[test]
    fn test_every_observer_notified_exactly_once() {
        let hub = InventoryHub::new();
        let o1 = Arc::new(Recorder::default());
        let o2 = Arc::new(Recorder::default());

        hub.register(observer(&o1));
        hub.register(observer(&o2));
        hub.update(&ProductId::from("P"), Quantity(7)).unwrap();

        assert_eq!(o1.calls(), vec![(ProductId::from("P"), Quantity(7))]);
        assert_eq!(o2.calls(), vec![(ProductId::from("P"), Quantity(7))]);
    }

    #[test]
    fn test_unregister_unknown_observer_is_noop() {
        let hub = InventoryHub::new();
        let o1 = Arc::new(Recorder::default());
        let stranger = Arc::new(Recorder::default());
        hub.register(observer(&o1));

        assert!(!hub.unregister(&observer(&stranger)));
        assert_eq!(hub.len(), 1);
        assert!(hub.is_registered(&observer(&o1)));
    }

    #[test]
    fn test_failing_observer_does_not_block_others() {
        let hub = InventoryHub::new();
        let healthy = Arc::new(Recorder::default());
        hub.register(Arc::new(Broken));
        hub.register(observer(&healthy));

        let err = hub.update(&ProductId::from("P"), Quantity(3)).unwrap_err();

        assert_eq!(err.attempted, 2);
        assert_eq!(err.failures, vec![ObserverError("disk full".to_string())]);
        assert_eq!(healthy.calls(), vec![(ProductId::from("P"), Quantity(3))]);
    }

    #[test]
    fn test_observer_may_unregister_itself_during_broadcast() {
        struct OneShot {
            hub: Arc<InventoryHub>,
            me: Mutex<Option<Arc<dyn InventoryObserver>>>,
            calls: AtomicUsize,
        }

        impl InventoryObserver for OneShot {
            fn product_updated(&self, _product: &ProductId, _quantity: Quantity) -> Result<(), ObserverError> {
                self.calls.fetch_add(1, Ordering::SeqCst);
                if let Some(me) = self.me.lock().take() {
                    self.hub.unregister(&me);
                }
                Ok(())
            }
        }

        let hub = Arc::new(InventoryHub::new());
        let one_shot = Arc::new(OneShot {
            hub: hub.clone(),
            me: Mutex::new(None),
            calls: AtomicUsize::new(0),
        });
        let as_observer: Arc<dyn InventoryObserver> = one_shot.clone();
        *one_shot.me.lock() = Some(as_observer.clone());
        hub.register(as_observer);

        hub.update(&ProductId::from("P"), Quantity(1)).unwrap();
        hub.update(&ProductId::from("P"), Quantity(2)).unwrap();

        assert_eq!(one_shot.calls.load(Ordering::SeqCst), 1);
        assert!(hub.is_empty());
    }

    #[test]
    fn test_concurrent_registration_and_broadcast() {
        let hub = Arc::new(InventoryHub::new());
        let recorders: Vec<Arc<Recorder>> = (0..8).map(|_| Arc::new(Recorder::default())).collect();

        let handles: Vec<_> = recorders
            .iter()
            .map(|recorder| {
                let hub = hub.clone();
                let as_observer = observer(recorder);
                std::thread::spawn(move || {
                    hub.register(as_observer.clone());
                    hub.update(&ProductId::from("P"), Quantity(1)).unwrap();
                    hub.register(as_observer);
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(hub.len(), 8);
        for recorder in &recorders {
            assert!(!recorder.calls().is_empty());
        }
    }
}
