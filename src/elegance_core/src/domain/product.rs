use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::user::{UserError, non_empty};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProductError {
    #[error("product {0} has a negative price")]
    NegativePrice(ProductId),
}

/// External product identifier, as assigned by the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    pub fn parse(value: String) -> Result<Self, UserError> {
        non_empty(value, "productId").map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ProductId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Read-only view of a catalog product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    #[serde(default)]
    pub name: String,
    pub price: Decimal,
    #[serde(default)]
    pub metadata: serde_json::Value,
}

impl Product {
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        price: Decimal,
        metadata: serde_json::Value,
    ) -> Result<Self, ProductError> {
        if price < Decimal::ZERO {
            return Err(ProductError::NegativePrice(id));
        }
        Ok(Self {
            id,
            name: name.into(),
            price,
            metadata,
        })
    }

    /// Stand-in for a favorite whose product no longer resolves.
    pub fn placeholder(id: ProductId) -> Self {
        Self {
            id,
            name: String::new(),
            price: Decimal::ZERO,
            metadata: serde_json::Value::Null,
        }
    }
}
