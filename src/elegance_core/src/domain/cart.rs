use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{email::Email, product::ProductId};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
    #[error("quantity must be at least 1")]
    InvalidQuantity,
    #[error("cart total is out of range")]
    TotalOverflow,
}

/// Number of units on a line item; always at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Quantity(u32);

impl Quantity {
    pub fn get(self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for Quantity {
    type Error = CartError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        if value == 0 {
            return Err(CartError::InvalidQuantity);
        }
        Ok(Self(value))
    }
}

impl From<Quantity> for u32 {
    fn from(value: Quantity) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub product_id: ProductId,
    pub quantity: Quantity,
}

impl CartItem {
    pub fn new(product_id: ProductId, quantity: Quantity) -> Self {
        Self {
            product_id,
            quantity,
        }
    }
}

/// A user's cart document, keyed by the owner's email.
///
/// `item_count` and `total` are running values maintained alongside `items`
/// rather than derived from them, so duplicate removals can leave them out of
/// step with the line items.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    pub email: Email,
    pub items: Vec<CartItem>,
    pub item_count: u64,
    pub total: Decimal,
}

impl Cart {
    /// A new cart holding a single line item.
    pub fn open(email: Email, item: CartItem, unit_price: Decimal) -> Result<Self, CartError> {
        let total = line_total(unit_price, item.quantity)?;
        Ok(Self {
            email,
            items: vec![item],
            item_count: 1,
            total,
        })
    }

    /// Appends a line item. Lines for the same product are never merged.
    ///
    /// The cart is left untouched when the new total does not fit.
    pub fn add_line(&mut self, item: CartItem, unit_price: Decimal) -> Result<(), CartError> {
        self.total = self
            .total
            .checked_add(line_total(unit_price, item.quantity)?)
            .ok_or(CartError::TotalOverflow)?;
        self.item_count += 1;
        self.items.push(item);
        Ok(())
    }

    /// Removes every line for `product_id`.
    ///
    /// Only the first matching line is subtracted from the total, and the item
    /// count drops by exactly one however many lines matched.
    pub fn remove_product(
        &mut self,
        product_id: &ProductId,
        unit_price: Decimal,
    ) -> Result<(), CartError> {
        if let Some(quantity) = self.first_quantity_of(product_id) {
            self.total = self
                .total
                .checked_sub(line_total(unit_price, quantity)?)
                .ok_or(CartError::TotalOverflow)?;
        }
        self.items.retain(|item| &item.product_id != product_id);
        self.item_count = self.item_count.saturating_sub(1);
        Ok(())
    }

    pub fn first_quantity_of(&self, product_id: &ProductId) -> Option<Quantity> {
        self.items
            .iter()
            .find(|item| &item.product_id == product_id)
            .map(|item| item.quantity)
    }
}

pub fn line_total(unit_price: Decimal, quantity: Quantity) -> Result<Decimal, CartError> {
    unit_price
        .checked_mul(Decimal::from(quantity.get()))
        .ok_or(CartError::TotalOverflow)
}
