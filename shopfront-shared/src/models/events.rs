use uuid::Uuid;

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq)]
pub struct StockUpdatedEvent {
    pub product_id: String,
    pub quantity: u32,
    pub timestamp: i64,
}

impl StockUpdatedEvent {
    pub fn new(product_id: impl Into<String>, quantity: u32) -> Self {
        Self {
            product_id: product_id.into(),
            quantity,
            timestamp: chrono::Utc::now().timestamp(),
        }
    }
}

/// Handed to the mailer service; the recipient never shows up in Debug output.
#[derive(Debug, serde::Serialize, serde::Deserialize, Clone)]
pub struct EmailRequestedEvent {
    pub request_id: Uuid,
    pub recipient: crate::Masked<String>,
    pub subject: String,
    pub body: String,
    pub timestamp: i64,
}

impl EmailRequestedEvent {
    pub fn new(recipient: &str, subject: &str, body: &str) -> Self {
        Self {
            request_id: Uuid::new_v4(),
            recipient: crate::Masked(recipient.to_string()),
            subject: subject.to_string(),
            body: body.to_string(),
            timestamp: chrono::Utc::now().timestamp(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_event_keeps_recipient_in_json_but_not_in_debug() {
        let event = EmailRequestedEvent::new("buyer@example.com", "Order details", "Welcome!");

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["recipient"], "buyer@example.com");
        assert!(!format!("{:?}", event).contains("buyer@example.com"));
    }
}
