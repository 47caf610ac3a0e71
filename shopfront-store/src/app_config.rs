use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub notification: NotificationConfig,
    #[serde(default)]
    pub inventory: InventoryConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub kafka: KafkaConfig,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum NotificationTransport {
    #[default]
    Log,
    Kafka,
}

#[derive(Debug, Deserialize, Clone)]
pub struct NotificationConfig {
    pub recipient: String,
    #[serde(default)]
    pub transport: NotificationTransport,
    #[serde(default = "default_subject")]
    pub subject: String,
    #[serde(default = "default_message")]
    pub message: String,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            recipient: "orders@shopfront.example".to_string(),
            transport: NotificationTransport::Log,
            subject: default_subject(),
            message: default_message(),
        }
    }
}

fn default_subject() -> String {
    "E-commerce - Order details".to_string()
}

fn default_message() -> String {
    "Welcome!\nOrder code: 123456\nTracking code: AKSFG3I5FJO0KK44BR".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct InventoryConfig {
    /// Stock level announced after each purchase
    #[serde(default = "default_restock_quantity")]
    pub restock_quantity: u32,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            restock_quantity: default_restock_quantity(),
        }
    }
}

fn default_restock_quantity() -> u32 { 10 }

#[derive(Debug, Deserialize, Clone, Default)]
pub struct DatabaseConfig {
    /// Without a URL purchases are kept in memory
    pub url: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct KafkaConfig {
    pub brokers: Option<String>,
    #[serde(default = "default_stock_topic")]
    pub stock_topic: String,
    #[serde(default = "default_notification_topic")]
    pub notification_topic: String,
}

impl Default for KafkaConfig {
    fn default() -> Self {
        Self {
            brokers: None,
            stock_topic: default_stock_topic(),
            notification_topic: default_notification_topic(),
        }
    }
}

fn default_stock_topic() -> String { "inventory.updated".to_string() }
fn default_notification_topic() -> String { "notifications.email".to_string() }

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Layered load: `{dir}/default`, then `{dir}/{RUN_MODE}` and `{dir}/local`
    /// when present, then `SHOPFRONT__*` environment variables.
    pub fn load_from(dir: &str) -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name(&format!("{}/default", dir)).required(false))
            .add_source(config::File::with_name(&format!("{}/{}", dir, run_mode)).required(false))
            // Not checked in
            .add_source(config::File::with_name(&format!("{}/local", dir)).required(false))
            // Eg. `SHOPFRONT__INVENTORY__RESTOCK_QUANTITY=25`
            .add_source(config::Environment::with_prefix("SHOPFRONT").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
