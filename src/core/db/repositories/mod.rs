//! Database repositories
//!
//! Repositories encapsulate data access logic and give the subscribe service
//! a narrow API over the database.

pub mod subscriber;

pub use subscriber::{SubscriberRepository, SubscriberRepositoryError};
