//! Domain layer for the order management service.
//!
//! This crate provides:
//! - Entities referenced by an order (store, customer, discount, product)
//! - The Order aggregate and the requests that build it
//! - Repository traits for each entity type
//! - OrderService, which validates requests and persists orders

pub mod error;
pub mod order;
pub mod repository;

pub use common::{CustomerId, DiscountCode, OrderId, ProductId, StoreId};
pub use error::{DomainError, RepositoryError};
pub use order::{
    CreateOrderRequest, Customer, Discount, ModifyOrderRequest, Money, Order, OrderError,
    OrderLine, OrderService, Product, ProductRequestItem, Store,
};
pub use repository::{
    CustomerRepository, DiscountRepository, OrderRepository, ProductRepository, StoreRepository,
};
