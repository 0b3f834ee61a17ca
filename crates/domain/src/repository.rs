//! Repository ports the order service depends on.
//!
//! Each trait is a lookup-by-identifier abstraction over one entity type.
//! Lookups return `Ok(None)` when the entity does not exist; `Err` is reserved
//! for storage failures.

use async_trait::async_trait;
use common::{CustomerId, DiscountCode, OrderId, ProductId, StoreId};

use crate::error::RepositoryError;
use crate::order::{Customer, Discount, Order, Product, Store};

/// Convenience type alias for repository results.
pub type Result<T> = std::result::Result<T, RepositoryError>;

#[async_trait]
pub trait StoreRepository: Send + Sync {
    /// Finds a store by ID.
    async fn get_by(&self, id: StoreId) -> Result<Option<Store>>;
}

#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Finds a customer by ID.
    async fn get_by(&self, id: CustomerId) -> Result<Option<Customer>>;
}

#[async_trait]
pub trait DiscountRepository: Send + Sync {
    /// Finds a discount by its code.
    async fn get_by(&self, code: &DiscountCode) -> Result<Option<Discount>>;
}

#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Finds a product by ID.
    async fn get_by(&self, id: ProductId) -> Result<Option<Product>>;
}

#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Finds an order by ID.
    async fn get_by(&self, id: OrderId) -> Result<Option<Order>>;

    /// Saves an order.
    ///
    /// Used for both new and modified orders; an existing order with the
    /// same ID is replaced.
    async fn add(&self, order: Order) -> Result<()>;
}
