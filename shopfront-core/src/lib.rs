pub mod types;
pub mod payment;
pub mod shipping;
pub mod notification;
pub mod repository;

pub use types::{Amount, ProductId, Quantity};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    ValidationError(String),
}
