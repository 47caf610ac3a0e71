use std::sync::Arc;

use async_trait::async_trait;
use shopfront_core::payment::{PaymentError, PaymentGateway, PaymentProcessor, StubPaymentProcessor};
use shopfront_core::Amount;
use tokio::sync::OnceCell;

/// Steps run around the actual charge.
///
/// `before_charge` may veto the payment. `after_charge` only runs once the
/// processor accepted the charge and cannot change the outcome.
#[async_trait]
pub trait AuthorizationHooks: Send + Sync {
    async fn before_charge(&self, _amount: Amount) -> Result<(), PaymentError> {
        Ok(())
    }

    async fn after_charge(&self, _amount: Amount) {}
}

/// Purchase-history review before, next-purchase coupon after.
/// Neither step has business rules attached yet.
#[derive(Debug, Default, Clone)]
pub struct LoyaltyHooks;

#[async_trait]
impl AuthorizationHooks for LoyaltyHooks {
    async fn before_charge(&self, amount: Amount) -> Result<(), PaymentError> {
        tracing::info!("Reviewing purchase history before charging {}", amount);
        Ok(())
    }

    async fn after_charge(&self, _amount: Amount) {
        tracing::info!("Sending discount coupon for next purchase");
    }
}

type ProcessorFactory = Box<dyn Fn() -> Arc<dyn PaymentProcessor> + Send + Sync>;

/// Wraps a `PaymentProcessor` with the authorization hooks.
///
/// The processor is either injected up front or built by the factory on the
/// first `authorize` call and reused for the lifetime of the authorizer.
/// Concurrent first calls still build it only once.
pub struct PaymentAuthorizer {
    factory: Option<ProcessorFactory>,
    processor: OnceCell<Arc<dyn PaymentProcessor>>,
    hooks: Arc<dyn AuthorizationHooks>,
}

impl PaymentAuthorizer {
    pub fn new<F>(factory: F) -> Self
    where
        F: Fn() -> Arc<dyn PaymentProcessor> + Send + Sync + 'static,
    {
        Self {
            factory: Some(Box::new(factory)),
            processor: OnceCell::new(),
            hooks: Arc::new(LoyaltyHooks),
        }
    }

    pub fn with_processor(processor: Arc<dyn PaymentProcessor>) -> Self {
        Self {
            factory: None,
            processor: OnceCell::new_with(Some(processor)),
            hooks: Arc::new(LoyaltyHooks),
        }
    }

    pub fn with_hooks(mut self, hooks: Arc<dyn AuthorizationHooks>) -> Self {
        self.hooks = hooks;
        self
    }

    async fn processor(&self) -> Result<&Arc<dyn PaymentProcessor>, PaymentError> {
        self.processor
            .get_or_try_init(|| async {
                match &self.factory {
                    Some(factory) => {
                        tracing::debug!("Creating payment processor");
                        Ok(factory())
                    }
                    None => Err(PaymentError::GatewayUnavailable(
                        "no payment processor configured".to_string(),
                    )),
                }
            })
            .await
    }
}

impl Default for PaymentAuthorizer {
    fn default() -> Self {
        Self::new(|| Arc::new(StubPaymentProcessor) as Arc<dyn PaymentProcessor>)
    }
}

#[async_trait]
impl PaymentGateway for PaymentAuthorizer {
    async fn authorize(&self, amount: Amount) -> Result<(), PaymentError> {
        self.hooks.before_charge(amount).await?;

        let processor = self.processor().await?;
        processor.charge(amount).await?;

        self.hooks.after_charge(amount).await;
        Ok(())
    }
}
