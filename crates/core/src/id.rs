//! Strongly-typed identifiers used across the domain.
//!
//! All identifiers are opaque strings supplied by callers. No format or
//! uniqueness is enforced here.

use serde::{Deserialize, Serialize};

/// Stock-keeping unit: names a distinct product type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sku(String);

/// Identifier of a stock batch (its identity).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BatchReference(String);

/// Identifier of the customer order an order line belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderReference(String);

macro_rules! impl_string_newtype {
    ($t:ty) => {
        impl $t {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $t {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $t {
            fn from(value: &str) -> Self {
                Self(value.to_owned())
            }
        }

        impl From<$t> for String {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl AsRef<str> for $t {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

impl_string_newtype!(Sku);
impl_string_newtype!(BatchReference);
impl_string_newtype!(OrderReference);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_the_raw_identifier() {
        assert_eq!(Sku::new("SMALL-TABLE").to_string(), "SMALL-TABLE");
        assert_eq!(BatchReference::from("batch-001").as_str(), "batch-001");
        assert_eq!(
            String::from(OrderReference::from("order-123".to_string())),
            "order-123"
        );
    }

    #[test]
    fn serializes_transparently() {
        let sku = Sku::new("ELEGANT-LAMP");
        let json = serde_json::to_string(&sku).unwrap();
        assert_eq!(json, "\"ELEGANT-LAMP\"");

        let back: Sku = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sku);
    }
}
