//! Order aggregate and related types.

mod aggregate;
mod entities;
mod requests;
mod service;
mod value_objects;

pub use aggregate::{Order, OrderLine};
pub use entities::{Customer, Discount, Product, Store};
pub use requests::{CreateOrderRequest, ModifyOrderRequest, ProductRequestItem};
pub use service::OrderService;
pub use value_objects::Money;

use common::{OrderId, ProductId};
use thiserror::Error;

/// Business rules an order request can violate.
///
/// The display text of each variant is the message reported to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    /// Store is missing or inactive.
    #[error("Store is deActivated")]
    StoreDeactivated,

    /// Customer is missing or inactive.
    #[error("Customer is deActivated")]
    CustomerDeactivated,

    /// Request carries no products.
    #[error("AtLeast one product is required.")]
    NoProducts,

    /// Discount code is unknown or inactive.
    #[error("Invalid discount code")]
    InvalidDiscountCode,

    /// A requested product does not exist.
    #[error("Product not found: {product_id}")]
    ProductNotFound { product_id: ProductId },

    /// A requested quantity is zero.
    #[error("Invalid quantity for product {product_id}: must be greater than 0")]
    InvalidQuantity { product_id: ProductId },

    /// Order total does not fit the money representation.
    #[error("Order total exceeds the maximum supported amount")]
    TotalOverflow,

    /// Order to modify does not exist.
    #[error("Order not found: {0}")]
    NotFound(OrderId),
}

impl OrderError {
    /// Short machine-readable label, used for logs and metrics.
    pub fn reason(&self) -> &'static str {
        match self {
            OrderError::StoreDeactivated => "store_deactivated",
            OrderError::CustomerDeactivated => "customer_deactivated",
            OrderError::NoProducts => "no_products",
            OrderError::InvalidDiscountCode => "invalid_discount_code",
            OrderError::ProductNotFound { .. } => "product_not_found",
            OrderError::InvalidQuantity { .. } => "invalid_quantity",
            OrderError::TotalOverflow => "total_overflow",
            OrderError::NotFound(_) => "order_not_found",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_messages_are_fixed() {
        assert_eq!(OrderError::StoreDeactivated.to_string(), "Store is deActivated");
        assert_eq!(
            OrderError::CustomerDeactivated.to_string(),
            "Customer is deActivated"
        );
        assert_eq!(
            OrderError::NoProducts.to_string(),
            "AtLeast one product is required."
        );
        assert_eq!(
            OrderError::InvalidDiscountCode.to_string(),
            "Invalid discount code"
        );
    }

    #[test]
    fn messages_name_the_offending_id() {
        let product_id = ProductId::new();
        let err = OrderError::ProductNotFound { product_id };
        assert_eq!(err.to_string(), format!("Product not found: {product_id}"));

        let order_id = OrderId::new();
        assert_eq!(
            OrderError::NotFound(order_id).to_string(),
            format!("Order not found: {order_id}")
        );
    }

    #[test]
    fn reasons_are_distinct() {
        let product_id = ProductId::new();
        let reasons = [
            OrderError::StoreDeactivated.reason(),
            OrderError::CustomerDeactivated.reason(),
            OrderError::NoProducts.reason(),
            OrderError::InvalidDiscountCode.reason(),
            OrderError::ProductNotFound { product_id }.reason(),
            OrderError::InvalidQuantity { product_id }.reason(),
            OrderError::TotalOverflow.reason(),
            OrderError::NotFound(OrderId::new()).reason(),
        ];
        let unique: std::collections::HashSet<_> = reasons.iter().collect();
        assert_eq!(unique.len(), reasons.len());
    }
}
