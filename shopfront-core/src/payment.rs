use async_trait::async_trait;

use crate::Amount;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PaymentError {
    #[error("Payment declined: {0}")]
    Declined(String),
    #[error("Payment gateway unavailable: {0}")]
    GatewayUnavailable(String),
}

/// The raw charging capability (card network, wallet, ...).
#[async_trait]
pub trait PaymentProcessor: Send + Sync {
    /// Charge the given amount
    async fn charge(&self, amount: Amount) -> Result<(), PaymentError>;
}

/// What checkout talks to. Implementations may wrap a `PaymentProcessor`
/// with extra steps, callers cannot tell the difference.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn authorize(&self, amount: Amount) -> Result<(), PaymentError>;
}

/// Accepts every charge.
#[derive(Debug, Default, Clone)]
pub struct StubPaymentProcessor;

#[async_trait]
impl PaymentProcessor for StubPaymentProcessor {
    async fn charge(&self, amount: Amount) -> Result<(), PaymentError> {
        tracing::debug!("Stub processor charging {}", amount);
        Ok(())
    }
}
