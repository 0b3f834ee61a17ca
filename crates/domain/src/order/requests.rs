//! Requests accepted by the order service.

use common::{CustomerId, DiscountCode, OrderId, ProductId, StoreId};
use serde::{Deserialize, Serialize};

/// A product and the quantity requested for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRequestItem {
    pub id: ProductId,
    pub quantity: u32,
}

impl ProductRequestItem {
    pub fn new(id: ProductId, quantity: u32) -> Self {
        Self { id, quantity }
    }
}

/// Request to create a new order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    /// The order ID to create.
    pub id: OrderId,
    pub store_id: StoreId,
    pub customer_id: CustomerId,
    #[serde(default)]
    pub discount_code: Option<DiscountCode>,
    #[serde(default)]
    pub products: Vec<ProductRequestItem>,
}

impl CreateOrderRequest {
    /// Creates a request without discount or products.
    pub fn new(id: OrderId, store_id: StoreId, customer_id: CustomerId) -> Self {
        Self {
            id,
            store_id,
            customer_id,
            discount_code: None,
            products: Vec::new(),
        }
    }

    /// Sets the discount code to claim.
    pub fn with_discount(mut self, code: impl Into<DiscountCode>) -> Self {
        self.discount_code = Some(code.into());
        self
    }

    /// Appends a requested product.
    pub fn with_product(mut self, id: ProductId, quantity: u32) -> Self {
        self.products.push(ProductRequestItem::new(id, quantity));
        self
    }
}

/// Request to replace the contents of an existing order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModifyOrderRequest {
    /// The order to modify.
    pub id: OrderId,
    pub store_id: StoreId,
    pub customer_id: CustomerId,
    #[serde(default)]
    pub discount_code: Option<DiscountCode>,
    #[serde(default)]
    pub products: Vec<ProductRequestItem>,
}

impl ModifyOrderRequest {
    /// Creates a request without discount or products.
    pub fn new(id: OrderId, store_id: StoreId, customer_id: CustomerId) -> Self {
        Self {
            id,
            store_id,
            customer_id,
            discount_code: None,
            products: Vec::new(),
        }
    }

    /// Sets the discount code to claim.
    pub fn with_discount(mut self, code: impl Into<DiscountCode>) -> Self {
        self.discount_code = Some(code.into());
        self
    }

    /// Appends a requested product.
    pub fn with_product(mut self, id: ProductId, quantity: u32) -> Self {
        self.products.push(ProductRequestItem::new(id, quantity));
        self
    }
}
