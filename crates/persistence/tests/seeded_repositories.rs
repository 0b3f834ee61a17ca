//! Integration tests for seeding the in-memory repositories.

use domain::{
    CreateOrderRequest, CustomerId, CustomerRepository, DiscountCode, DiscountRepository, OrderId,
    ProductId, ProductRepository, StoreId, StoreRepository,
};
use persistence::{InMemoryRepositories, Seed};

fn seed_json(store: StoreId, customer: CustomerId, product: ProductId) -> String {
    serde_json::json!({
        "stores": [{ "id": store, "is_active": true }],
        "customers": [{ "id": customer, "is_active": true }],
        "discounts": [
            { "code": "SPRING", "is_active": true },
            { "code": "WINTER", "is_active": false }
        ],
        "products": [{ "id": product, "price": { "cents": 1299 } }]
    })
    .to_string()
}

#[tokio::test]
async fn seed_populates_every_repository() {
    let (store, customer, product) = (StoreId::new(), CustomerId::new(), ProductId::new());
    let seed = Seed::from_json(&seed_json(store, customer, product)).unwrap();

    let repos = InMemoryRepositories::from_seed(seed).await;

    assert_eq!(repos.stores.len().await, 1);
    assert_eq!(repos.customers.len().await, 1);
    assert_eq!(repos.discounts.len().await, 2);
    assert_eq!(repos.products.len().await, 1);
    assert_eq!(repos.orders.len().await, 0);

    assert!(repos.stores.get_by(store).await.unwrap().is_some());
    assert!(repos.customers.get_by(customer).await.unwrap().is_some());
    let winter = repos
        .discounts
        .get_by(&DiscountCode::new("WINTER"))
        .await
        .unwrap()
        .unwrap();
    assert!(!winter.is_active);
    let price = repos.products.get_by(product).await.unwrap().unwrap().price;
    assert_eq!(price.cents(), 1299);
}

#[tokio::test]
async fn reloading_replaces_entries_with_same_key() {
    let repos = InMemoryRepositories::new();
    repos
        .load(Seed::from_json(r#"{ "discounts": [{ "code": "SPRING", "is_active": true }] }"#).unwrap())
        .await;
    repos
        .load(Seed::from_json(r#"{ "discounts": [{ "code": "SPRING", "is_active": false }] }"#).unwrap())
        .await;

    assert_eq!(repos.discounts.len().await, 1);
    let spring = repos
        .discounts
        .get_by(&DiscountCode::new("SPRING"))
        .await
        .unwrap()
        .unwrap();
    assert!(!spring.is_active);
}

#[tokio::test]
async fn seeded_service_places_orders() {
    let (store, customer, product) = (StoreId::new(), CustomerId::new(), ProductId::new());
    let seed = Seed::from_json(&seed_json(store, customer, product)).unwrap();
    let repos = InMemoryRepositories::from_seed(seed).await;
    let service = repos.order_service();

    let order = service
        .create_order(
            CreateOrderRequest::new(OrderId::new(), store, customer)
                .with_discount("SPRING")
                .with_product(product, 3),
        )
        .await
        .unwrap();

    assert_eq!(order.total_amount().cents(), 3897);
    assert_eq!(repos.orders.add_count().await, 1);

    let err = service
        .create_order(
            CreateOrderRequest::new(OrderId::new(), store, customer)
                .with_discount("WINTER")
                .with_product(product, 1),
        )
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Invalid discount code");
    assert_eq!(repos.orders.add_count().await, 1);
}
