//! Order aggregate.

use common::OrderId;
use serde::{Deserialize, Serialize};

use super::{Customer, Discount, Money, Product, Store};

/// A resolved product together with the quantity requested for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub product: Product,
    pub quantity: u32,
}

impl OrderLine {
    /// Creates a new order line.
    pub fn new(product: Product, quantity: u32) -> Self {
        Self { product, quantity }
    }

    /// Returns the total price for this line (quantity * unit price).
    pub fn total_price(&self) -> Money {
        self.product.price.multiply(self.quantity)
    }
}

/// Order aggregate root.
///
/// Composes the store, customer, optional discount and products an order
/// refers to. Only [`OrderService`](super::OrderService) builds orders from
/// requests, so a persisted order always references an active store, an
/// active customer, an active discount (if any) and at least one product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub store: Store,
    pub discount: Option<Discount>,
    pub customer: Customer,

    /// Lines in the order they were requested.
    pub lines: Vec<OrderLine>,
}

impl Order {
    /// Creates a new order aggregate.
    pub fn new(
        id: OrderId,
        store: Store,
        customer: Customer,
        discount: Option<Discount>,
        lines: Vec<OrderLine>,
    ) -> Self {
        Self {
            id,
            store,
            discount,
            customer,
            lines,
        }
    }

    /// Returns the ordered products in request order.
    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.lines.iter().map(|line| &line.product)
    }

    /// Returns the number of lines in the order.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Returns the sum of all line totals.
    ///
    /// Saturates at the largest representable amount; orders built by the
    /// service never reach it.
    pub fn total_amount(&self) -> Money {
        self.lines.iter().map(OrderLine::total_price).sum()
    }

    /// Returns the sum of all line totals, or `None` if any line total or
    /// the running sum leaves the representable range.
    pub fn checked_total_amount(&self) -> Option<Money> {
        self.lines.iter().try_fold(Money::zero(), |total, line| {
            line.product
                .price
                .checked_multiply(line.quantity)
                .and_then(|line_total| total.checked_add(line_total))
        })
    }
}
