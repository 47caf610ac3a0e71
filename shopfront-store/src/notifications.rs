use async_trait::async_trait;
use shopfront_core::notification::{NotificationSender, SendError};
use shopfront_shared::models::EmailRequestedEvent;
use shopfront_shared::Masked;

use crate::events::EventProducer;

fn validate_recipient(recipient: &str) -> Result<(), SendError> {
    let trimmed = recipient.trim();
    match trimmed.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
        _ => Err(SendError::InvalidRecipient(format!("{}", Masked(trimmed)))),
    }
}

/// Writes the message to the log instead of delivering it.
#[derive(Debug, Clone)]
pub struct LogNotificationSender {
    subject: String,
}

impl LogNotificationSender {
    pub fn new(subject: impl Into<String>) -> Self {
        Self { subject: subject.into() }
    }
}

#[async_trait]
impl NotificationSender for LogNotificationSender {
    async fn send(&self, recipient: &str, message: &str) -> Result<(), SendError> {
        validate_recipient(recipient)?;
        tracing::info!(recipient = %Masked(recipient), "E-mail '{}' sent: {}", self.subject, message.replace('\n', " | "));
        Ok(())
    }
}

/// Hands the e-mail to the mailer service through Kafka.
pub struct KafkaNotificationSender {
    producer: EventProducer,
    topic: String,
    subject: String,
}

impl KafkaNotificationSender {
    pub fn new(producer: EventProducer, topic: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            producer,
            topic: topic.into(),
            subject: subject.into(),
        }
    }
}

#[async_trait]
impl NotificationSender for KafkaNotificationSender {
    async fn send(&self, recipient: &str, message: &str) -> Result<(), SendError> {
        validate_recipient(recipient)?;

        let event = EmailRequestedEvent::new(recipient.trim(), &self.subject, message);
        let payload = serde_json::to_string(&event).map_err(|e| SendError::DeliveryFailed(e.to_string()))?;

        self.producer
            .publish(&self.topic, &event.request_id.to_string(), &payload)
            .await
            .map_err(|e| SendError::DeliveryFailed(e.to_string()))
    }
}
