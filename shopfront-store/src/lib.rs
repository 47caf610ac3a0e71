pub mod app_config;
pub mod database;
pub mod memory;
pub mod events;
pub mod notifications;

pub use database::PgPurchaseStore;
pub use memory::InMemoryPurchaseStore;
pub use events::{EventProducer, KafkaStockPublisher};
pub use notifications::{KafkaNotificationSender, LogNotificationSender};
