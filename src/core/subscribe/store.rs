//! Lead storage backends

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use crate::core::db::models::SubscriberRecord;
use crate::core::db::{SubscriberRepository, SubscriberRepositoryError, health_check};

/// Store error types
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Email already exists")]
    DuplicateEmail,

    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Store rejected the insert: {0}")]
    Rejected(String),
}

/// Write side of the `subscribers` collection
pub trait LeadStore: Clone + Send + Sync + 'static {
    /// Insert one record. A taken email must come back as
    /// [`StoreError::DuplicateEmail`].
    fn insert(
        &self,
        record: &SubscriberRecord,
    ) -> impl Future<Output = Result<(), StoreError>> + Send;

    /// Cheap reachability check for the health endpoint
    fn ping(&self) -> impl Future<Output = Result<(), StoreError>> + Send;
}

impl LeadStore for SubscriberRepository {
    async fn insert(&self, record: &SubscriberRecord) -> Result<(), StoreError> {
        match self.create(record).await {
            Ok(id) => {
                tracing::debug!("Subscriber row {} inserted", id);
                Ok(())
            }
            Err(SubscriberRepositoryError::EmailAlreadyExists) => Err(StoreError::DuplicateEmail),
            Err(e) => Err(StoreError::Unavailable(e.to_string())),
        }
    }

    async fn ping(&self) -> Result<(), StoreError> {
        health_check(self.pool())
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))
    }
}

/// In-process store keyed by lowercase email
///
/// Used when no backend is configured and in tests. Clones share the same map.
#[derive(Clone, Default)]
pub struct MemoryLeadStore {
    leads: Arc<DashMap<String, SubscriberRecord>>,
    writes: Arc<AtomicUsize>,
}

impl MemoryLeadStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored leads
    pub fn len(&self) -> usize {
        self.leads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.leads.is_empty()
    }

    /// Number of insert calls, including rejected ones
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub fn get(&self, email: &str) -> Option<SubscriberRecord> {
        self.leads
            .get(&email.trim().to_lowercase())
            .map(|r| r.value().clone())
    }
}

impl LeadStore for MemoryLeadStore {
    async fn insert(&self, record: &SubscriberRecord) -> Result<(), StoreError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        match self.leads.entry(record.email_key()) {
            Entry::Occupied(_) => Err(StoreError::DuplicateEmail),
            Entry::Vacant(slot) => {
                slot.insert(record.clone());
                Ok(())
            }
        }
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
