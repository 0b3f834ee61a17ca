//! Entities referenced by an order.

use common::{CustomerId, DiscountCode, ProductId, StoreId};
use serde::{Deserialize, Serialize};

use super::Money;

/// A store that accepts orders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Store {
    pub id: StoreId,
    pub is_active: bool,
}

impl Store {
    pub fn new(id: StoreId, is_active: bool) -> Self {
        Self { id, is_active }
    }
}

/// A customer placing orders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub is_active: bool,
}

impl Customer {
    pub fn new(id: CustomerId, is_active: bool) -> Self {
        Self { id, is_active }
    }
}

/// A discount that can be claimed with its code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Discount {
    pub code: DiscountCode,
    pub is_active: bool,
}

impl Discount {
    pub fn new(code: impl Into<DiscountCode>, is_active: bool) -> Self {
        Self {
            code: code.into(),
            is_active,
        }
    }
}

/// A product available for ordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,

    /// Unit price.
    pub price: Money,
}

impl Product {
    pub fn new(id: ProductId, price: Money) -> Self {
        Self { id, price }
    }
}
