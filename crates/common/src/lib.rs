//! Shared identifier types for the order management service.

mod types;

pub use types::{CustomerId, DiscountCode, OrderId, ProductId, StoreId};
