use rdkafka::config::ClientConfig;
use rdkafka::producer::{FutureProducer, FutureRecord, Producer};
use rdkafka::util::Timeout;
use shopfront_catalog::{InventoryObserver, ObserverError};
use shopfront_core::{ProductId, Quantity};
use shopfront_shared::models::StockUpdatedEvent;
use std::time::Duration;
use tracing::{info, error};

pub use rdkafka::error::KafkaError;

#[derive(Clone)]
pub struct EventProducer {
    producer: FutureProducer,
}

impl EventProducer {
    pub fn new(brokers: &str) -> Result<Self, KafkaError> {
        let producer: FutureProducer = ClientConfig::new()
            .set("bootstrap.servers", brokers)
            .set("message.timeout.ms", "5000")
            .create()?;

        Ok(Self { producer })
    }

    /// Send and wait for the broker acknowledgement
    pub async fn publish(&self, topic: &str, key: &str, payload: &str) -> Result<(), KafkaError> {
        let record = FutureRecord::to(topic)
            .key(key)
            .payload(payload);

        match self.producer.send(record, Timeout::After(Duration::from_secs(0))).await {
            Ok(delivery) => {
                info!("Sent message to {}/{}: partition {} offset {}", topic, key, delivery.partition, delivery.offset);
                Ok(())
            }
            Err((e, _msg)) => {
                error!("Failed to send message to {}: {}", topic, e);
                Err(e)
            }
        }
    }

    /// Queue without waiting. Delivery happens in the background; only a full
    /// local queue or a bad record is reported.
    pub fn enqueue(&self, topic: &str, key: &str, payload: &str) -> Result<(), KafkaError> {
        let record = FutureRecord::to(topic)
            .key(key)
            .payload(payload);

        self.producer
            .send_result(record)
            .map(|_delivery| ())
            .map_err(|(e, _record)| e)
    }

    /// Block until every queued message is delivered or `timeout` elapses.
    /// Dropping the producer purges whatever is still queued.
    pub fn flush(&self, timeout: Duration) -> Result<(), KafkaError> {
        self.producer.flush(Timeout::After(timeout))
    }
}

/// Forwards stock changes to a Kafka topic, keyed by product.
pub struct KafkaStockPublisher {
    producer: EventProducer,
    topic: String,
}

impl KafkaStockPublisher {
    pub fn new(producer: EventProducer, topic: impl Into<String>) -> Self {
        Self {
            producer,
            topic: topic.into(),
        }
    }
}

impl InventoryObserver for KafkaStockPublisher {
    fn product_updated(&self, product: &ProductId, quantity: Quantity) -> Result<(), ObserverError> {
        let event = StockUpdatedEvent::new(product.as_str(), quantity.get());
        let payload = serde_json::to_string(&event).map_err(|e| ObserverError(e.to_string()))?;

        self.producer
            .enqueue(&self.topic, product.as_str(), &payload)
            .map_err(|e| ObserverError(format!("kafka enqueue to {} failed: {}", self.topic, e)))
    }
}
