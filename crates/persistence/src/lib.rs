pub mod error;
pub mod memory;
pub mod seed;

pub use error::SeedError;
pub use memory::{
    InMemoryCustomerRepository, InMemoryDiscountRepository, InMemoryOrderRepository,
    InMemoryProductRepository, InMemoryRepositories, InMemoryStoreRepository,
};
pub use seed::Seed;
