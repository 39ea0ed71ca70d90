//! Database module
//!
//! PostgreSQL connectivity, the `subscribers` row model and its repository,
//! built on SQLx.

pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used items
pub use models::SubscriberRecord;
pub use pool::{DbConfig, DbError, create_pool, create_pool_with_migrations, health_check};
pub use repositories::{SubscriberRepository, SubscriberRepositoryError};

// Re-export sqlx types that might be needed
pub use sqlx::PgPool;
