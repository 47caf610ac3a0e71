use std::fmt;
use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::CoreError;

/// Opaque catalog identifier. No structure is assumed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Count of units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity(pub u32);

impl Quantity {
    pub const ONE: Quantity = Quantity(1);

    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Money in minor units (cents). Never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(u64);

impl Amount {
    pub const ZERO: Amount = Amount(0);

    pub fn from_minor(minor: u64) -> Self {
        Self(minor)
    }

    pub fn minor_units(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

/// Parses decimal text such as `19.99`. Sub-cent digits are rounded half-even.
impl FromStr for Amount {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        let value = Decimal::from_str(raw)
            .map_err(|e| CoreError::ValidationError(format!("invalid amount '{}': {}", raw, e)))?;

        if value < Decimal::ZERO {
            return Err(CoreError::ValidationError(format!("amount must not be negative: {}", raw)));
        }

        let cents = value
            .checked_mul(Decimal::ONE_HUNDRED)
            .ok_or_else(|| CoreError::ValidationError(format!("amount out of range: {}", raw)))?
            .round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven);

        cents
            .to_u64()
            .map(Amount)
            .ok_or_else(|| CoreError::ValidationError(format!("amount out of range: {}", raw)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_parsing() {
        assert_eq!("19.99".parse::<Amount>().unwrap().minor_units(), 1999);
        assert_eq!(" 250 ".parse::<Amount>().unwrap().minor_units(), 25000);
        assert_eq!("0.005".parse::<Amount>().unwrap().minor_units(), 0);
        assert_eq!("0.015".parse::<Amount>().unwrap().minor_units(), 2);
    }

    #[test]
    fn test_amount_rejects_bad_input() {
        assert!(matches!("abc".parse::<Amount>(), Err(CoreError::ValidationError(_))));
        assert!(matches!("-1.00".parse::<Amount>(), Err(CoreError::ValidationError(_))));
        assert!("".parse::<Amount>().is_err());
    }

    #[test]
    fn test_amount_too_large_is_an_error() {
        let near_max = Decimal::MAX.to_string();
        assert!(matches!(near_max.parse::<Amount>(), Err(CoreError::ValidationError(_))));

        // Fits a Decimal after scaling but not a u64
        assert!(matches!("184467440737095516.16".parse::<Amount>(), Err(CoreError::ValidationError(_))));
        assert_eq!(
            "184467440737095516.15".parse::<Amount>().unwrap().minor_units(),
            u64::MAX
        );
    }

    #[test]
    fn test_amount_display() {
        assert_eq!(Amount::from_minor(1999).to_string(), "19.99");
        assert_eq!(Amount::from_minor(5).to_string(), "0.05");
        assert_eq!(Amount::ZERO.to_string(), "0.00");
    }

    #[test]
    fn test_product_id_serializes_as_plain_string() {
        let id = ProductId::from("SKU-1");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"SKU-1\"");
        assert_eq!(id.to_string(), "SKU-1");
    }
}
