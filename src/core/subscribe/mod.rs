//! Lead subscription
//!
//! - `store`: the `LeadStore` seam and its in-memory and PostgreSQL backends
//! - `rest`: hosted backend-as-a-service store over its REST API
//! - `service`: validation, normalization and the single insert per submit
//! - `api`: `POST /api/subscribe` and `GET /api/health`

pub mod api;
pub mod rest;
pub mod service;
pub mod store;

pub use api::{SubscribeApiState, subscribe_router};
pub use rest::RestLeadStore;
pub use service::{SubscribeError, SubscribeService};
pub use store::{LeadStore, MemoryLeadStore, StoreError};
