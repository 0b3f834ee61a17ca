//! Order service validating requests and persisting order aggregates.

use std::sync::Arc;

use common::{CustomerId, DiscountCode, OrderId, StoreId};

use crate::error::DomainError;
use crate::repository::{
    CustomerRepository, DiscountRepository, OrderRepository, ProductRepository, StoreRepository,
};

use super::{
    CreateOrderRequest, ModifyOrderRequest, Order, OrderError, OrderLine, ProductRequestItem,
};

/// Records a rejected request and converts it into a domain error.
fn reject(err: OrderError) -> DomainError {
    tracing::warn!(reason = err.reason(), error = %err, "order request rejected");
    metrics::counter!("order_rejections_total", "reason" => err.reason()).increment(1);
    DomainError::Order(err)
}

/// Service for creating and modifying orders.
///
/// Checks every entity a request refers to against its repository, then
/// assembles the [`Order`] aggregate and hands it to the order repository.
/// Lookups run one after another in a fixed order: store, customer,
/// discount, products. The first failing check ends the request and nothing
/// is persisted.
#[derive(Clone)]
pub struct OrderService {
    stores: Arc<dyn StoreRepository>,
    discounts: Arc<dyn DiscountRepository>,
    customers: Arc<dyn CustomerRepository>,
    products: Arc<dyn ProductRepository>,
    orders: Arc<dyn OrderRepository>,
}

impl OrderService {
    /// Creates a new order service over the given repositories.
    pub fn new(
        stores: Arc<dyn StoreRepository>,
        discounts: Arc<dyn DiscountRepository>,
        customers: Arc<dyn CustomerRepository>,
        products: Arc<dyn ProductRepository>,
        orders: Arc<dyn OrderRepository>,
    ) -> Self {
        Self {
            stores,
            discounts,
            customers,
            products,
            orders,
        }
    }

    /// Validates a request and persists the resulting new order.
    #[tracing::instrument(skip(self, request), fields(order_id = %request.id))]
    pub async fn create_order(&self, request: CreateOrderRequest) -> Result<Order, DomainError> {
        let order = self
            .assemble(
                request.id,
                request.store_id,
                request.customer_id,
                request.discount_code.as_ref(),
                &request.products,
            )
            .await?;

        self.orders.add(order.clone()).await?;

        metrics::counter!("orders_created_total").increment(1);
        tracing::info!(lines = order.line_count(), "order created");
        Ok(order)
    }

    /// Validates a request against an existing order and persists the
    /// rebuilt aggregate in its place.
    #[tracing::instrument(skip(self, request), fields(order_id = %request.id))]
    pub async fn update_order(&self, request: ModifyOrderRequest) -> Result<Order, DomainError> {
        let existing = self
            .orders
            .get_by(request.id)
            .await?
            .ok_or_else(|| reject(OrderError::NotFound(request.id)))?;
        tracing::debug!(previous_lines = existing.line_count(), "loaded existing order");

        let order = self
            .assemble(
                existing.id,
                request.store_id,
                request.customer_id,
                request.discount_code.as_ref(),
                &request.products,
            )
            .await?;

        // Same save path as creation; the repository replaces by ID.
        self.orders.add(order.clone()).await?;

        metrics::counter!("orders_updated_total").increment(1);
        tracing::info!(lines = order.line_count(), "order updated");
        Ok(order)
    }

    /// Loads an order by ID.
    ///
    /// Returns None if the order doesn't exist.
    #[tracing::instrument(skip(self))]
    pub async fn get_order(&self, order_id: OrderId) -> Result<Option<Order>, DomainError> {
        Ok(self.orders.get_by(order_id).await?)
    }

    async fn assemble(
        &self,
        order_id: OrderId,
        store_id: StoreId,
        customer_id: CustomerId,
        discount_code: Option<&DiscountCode>,
        items: &[ProductRequestItem],
    ) -> Result<Order, DomainError> {
        let store = match self.stores.get_by(store_id).await? {
            Some(store) if store.is_active => store,
            _ => return Err(reject(OrderError::StoreDeactivated)),
        };

        let customer = match self.customers.get_by(customer_id).await? {
            Some(customer) if customer.is_active => customer,
            _ => return Err(reject(OrderError::CustomerDeactivated)),
        };

        if items.is_empty() {
            return Err(reject(OrderError::NoProducts));
        }

        let discount = match discount_code {
            Some(code) => match self.discounts.get_by(code).await? {
                Some(discount) if discount.is_active => Some(discount),
                _ => return Err(reject(OrderError::InvalidDiscountCode)),
            },
            None => None,
        };

        let mut lines = Vec::with_capacity(items.len());
        for item in items {
            if item.quantity == 0 {
                return Err(reject(OrderError::InvalidQuantity {
                    product_id: item.id,
                }));
            }

            let product = self
                .products
                .get_by(item.id)
                .await?
                .ok_or_else(|| reject(OrderError::ProductNotFound { product_id: item.id }))?;
            lines.push(OrderLine::new(product, item.quantity));
        }

        let order = Order::new(order_id, store, customer, discount, lines);
        if order.checked_total_amount().is_none() {
            return Err(reject(OrderError::TotalOverflow));
        }

        Ok(order)
    }
}
