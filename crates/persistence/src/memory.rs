use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;

use async_trait::async_trait;
use common::{CustomerId, DiscountCode, OrderId, ProductId, StoreId};
use domain::repository::Result;
use domain::{
    Customer, CustomerRepository, Discount, DiscountRepository, Order, OrderRepository,
    OrderService, Product, ProductRepository, RepositoryError, Store, StoreRepository,
};
use tokio::sync::RwLock;

use crate::Seed;

/// Shared keyed map backing the lookup-only repositories.
#[derive(Debug)]
struct Table<K, V> {
    rows: Arc<RwLock<HashMap<K, V>>>,
}

impl<K, V> Clone for Table<K, V> {
    fn clone(&self) -> Self {
        Self {
            rows: Arc::clone(&self.rows),
        }
    }
}

impl<K, V> Default for Table<K, V> {
    fn default() -> Self {
        Self {
            rows: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl<K: Eq + Hash, V: Clone> Table<K, V> {
    async fn get(&self, key: &K) -> Option<V> {
        self.rows.read().await.get(key).cloned()
    }

    async fn insert(&self, key: K, value: V) {
        self.rows.write().await.insert(key, value);
    }

    async fn len(&self) -> usize {
        self.rows.read().await.len()
    }
}

/// In-memory store repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStoreRepository {
    table: Table<StoreId, Store>,
}

impl InMemoryStoreRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a store.
    pub async fn insert(&self, store: Store) {
        self.table.insert(store.id, store).await;
    }

    pub async fn len(&self) -> usize {
        self.table.len().await
    }
}

#[async_trait]
impl StoreRepository for InMemoryStoreRepository {
    async fn get_by(&self, id: StoreId) -> Result<Option<Store>> {
        Ok(self.table.get(&id).await)
    }
}

/// In-memory customer repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCustomerRepository {
    table: Table<CustomerId, Customer>,
}

impl InMemoryCustomerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a customer.
    pub async fn insert(&self, customer: Customer) {
        self.table.insert(customer.id, customer).await;
    }

    pub async fn len(&self) -> usize {
        self.table.len().await
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn get_by(&self, id: CustomerId) -> Result<Option<Customer>> {
        Ok(self.table.get(&id).await)
    }
}

/// In-memory discount repository, keyed by code.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDiscountRepository {
    table: Table<DiscountCode, Discount>,
}

impl InMemoryDiscountRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a discount.
    pub async fn insert(&self, discount: Discount) {
        self.table.insert(discount.code.clone(), discount).await;
    }

    pub async fn len(&self) -> usize {
        self.table.len().await
    }
}

#[async_trait]
impl DiscountRepository for InMemoryDiscountRepository {
    async fn get_by(&self, code: &DiscountCode) -> Result<Option<Discount>> {
        Ok(self.table.get(code).await)
    }
}

/// In-memory product repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProductRepository {
    table: Table<ProductId, Product>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a product.
    pub async fn insert(&self, product: Product) {
        self.table.insert(product.id, product).await;
    }

    pub async fn len(&self) -> usize {
        self.table.len().await
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn get_by(&self, id: ProductId) -> Result<Option<Product>> {
        Ok(self.table.get(&id).await)
    }
}

#[derive(Debug, Default)]
struct InMemoryOrderState {
    orders: HashMap<OrderId, Order>,
    add_calls: usize,
    unavailable: bool,
}

/// In-memory order repository.
///
/// Counts `add` calls and can be switched into a failing mode so callers
/// can observe how persistence was used.
#[derive(Debug, Clone, Default)]
pub struct InMemoryOrderRepository {
    state: Arc<RwLock<InMemoryOrderState>>,
}

impl InMemoryOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores an order directly, bypassing the `add` counter.
    pub async fn insert(&self, order: Order) {
        self.state.write().await.orders.insert(order.id, order);
    }

    /// Makes every subsequent call fail with [`RepositoryError::Unavailable`].
    pub async fn set_unavailable(&self, unavailable: bool) {
        self.state.write().await.unavailable = unavailable;
    }

    /// Returns how many times `add` has succeeded.
    pub async fn add_count(&self) -> usize {
        self.state.read().await.add_calls
    }

    /// Returns the number of stored orders.
    pub async fn len(&self) -> usize {
        self.state.read().await.orders.len()
    }

    fn unavailable() -> RepositoryError {
        RepositoryError::Unavailable("order repository is offline".to_string())
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn get_by(&self, id: OrderId) -> Result<Option<Order>> {
        let state = self.state.read().await;
        if state.unavailable {
            return Err(Self::unavailable());
        }
        Ok(state.orders.get(&id).cloned())
    }

    async fn add(&self, order: Order) -> Result<()> {
        let mut state = self.state.write().await;
        if state.unavailable {
            return Err(Self::unavailable());
        }

        let replaced = state.orders.insert(order.id, order).is_some();
        state.add_calls += 1;
        tracing::debug!(replaced, "order stored");
        Ok(())
    }
}

/// The full set of in-memory repositories the order service needs.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepositories {
    pub stores: InMemoryStoreRepository,
    pub discounts: InMemoryDiscountRepository,
    pub customers: InMemoryCustomerRepository,
    pub products: InMemoryProductRepository,
    pub orders: InMemoryOrderRepository,
}

impl InMemoryRepositories {
    /// Creates empty repositories.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates repositories preloaded with the entities in `seed`.
    pub async fn from_seed(seed: Seed) -> Self {
        let repos = Self::new();
        repos.load(seed).await;
        repos
    }

    /// Adds every entity in `seed`, replacing entries with the same key.
    pub async fn load(&self, seed: Seed) {
        tracing::info!(
            stores = seed.stores.len(),
            customers = seed.customers.len(),
            discounts = seed.discounts.len(),
            products = seed.products.len(),
            "loading seed data"
        );

        for store in seed.stores {
            self.stores.insert(store).await;
        }
        for customer in seed.customers {
            self.customers.insert(customer).await;
        }
        for discount in seed.discounts {
            self.discounts.insert(discount).await;
        }
        for product in seed.products {
            self.products.insert(product).await;
        }
    }

    /// Builds an order service backed by these repositories.
    pub fn order_service(&self) -> OrderService {
        OrderService::new(
            Arc::new(self.stores.clone()),
            Arc::new(self.discounts.clone()),
            Arc::new(self.customers.clone()),
            Arc::new(self.products.clone()),
            Arc::new(self.orders.clone()),
        )
    }
}
