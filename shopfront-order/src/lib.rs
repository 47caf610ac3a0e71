pub mod models;
pub mod authorizer;
pub mod fulfillment;
pub mod orchestrator;

pub use models::{CheckoutError, CheckoutReceipt, CheckoutRequest};
pub use authorizer::{AuthorizationHooks, LoyaltyHooks, PaymentAuthorizer};
pub use fulfillment::ShipmentAdapter;
pub use orchestrator::CheckoutFacade;
