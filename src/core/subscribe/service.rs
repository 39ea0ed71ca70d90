//! Subscribe service
//!
//! Validates a submitted form against the active profile, normalizes it and
//! performs exactly one insert. No retries.

use std::sync::Arc;

use chrono::Utc;

use crate::core::db::models::SubscriberRecord;
use crate::core::lead::{LeadForm, NewLead};
use crate::core::profile::FormProfile;
use crate::core::subscribe::store::{LeadStore, StoreError};
use crate::core::validation::{FieldErrors, validate_lead};

/// Subscribe service error types
#[derive(Debug, thiserror::Error)]
pub enum SubscribeError {
    #[error("Missing or invalid fields")]
    Invalid(FieldErrors),

    #[error("Email already exists")]
    DuplicateEmail,

    #[error("Failed to save subscriber: {0}")]
    Store(String),
}

impl From<StoreError> for SubscribeError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateEmail => SubscribeError::DuplicateEmail,
            _ => SubscribeError::Store(err.to_string()),
        }
    }
}

/// Subscribe service
#[derive(Clone)]
pub struct SubscribeService<S> {
    store: S,
    profile: Arc<FormProfile>,
}

impl<S: LeadStore> SubscribeService<S> {
    pub fn new(store: S, profile: FormProfile) -> Self {
        Self {
            store,
            profile: Arc::new(profile),
        }
    }

    pub fn profile(&self) -> &FormProfile {
        &self.profile
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Validate and store one lead
    pub async fn subscribe(&self, form: LeadForm) -> Result<(), SubscribeError> {
        let errors = validate_lead(&form, &self.profile);
        if !errors.is_empty() {
            return Err(SubscribeError::Invalid(errors));
        }

        let lead = NewLead::from_form(&form, &self.profile);
        let record = SubscriberRecord::new(lead, Utc::now());

        self.store.insert(&record).await?;
        Ok(())
    }

    /// Check the backing store answers
    pub async fn health(&self) -> Result<(), SubscribeError> {
        self.store.ping().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::lead::LeadField;
    use crate::core::subscribe::store::MemoryLeadStore;

    fn form() -> LeadForm {
        LeadForm {
            name: "Ada".to_string(),
            email: "a@b.com".to_string(),
            company_name: "Engines".to_string(),
            revenue_making: "yes".to_string(),
            mrr: "$10".to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_subscribe_stores_normalized_record() {
        let store = MemoryLeadStore::new();
        let service = SubscribeService::new(store.clone(), FormProfile::business_inquiry());

        service.subscribe(form()).await.unwrap();

        let record = store.get("a@b.com").unwrap();
        assert_eq!(record.company_name.as_deref(), Some("Engines"));
        assert_eq!(record.mrr.as_deref(), Some("$10"));
        assert_eq!(record.investment_raised, None);
    }

    #[tokio::test]
    async fn test_invalid_form_never_touches_store() {
        let store = MemoryLeadStore::new();
        let service = SubscribeService::new(store.clone(), FormProfile::business_inquiry());

        let result = service
            .subscribe(LeadForm {
                company_name: String::new(),
                ..form()
            })
            .await;

        match result {
            Err(SubscribeError::Invalid(errors)) => {
                assert!(errors.contains(LeadField::CompanyName))
            }
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(store.writes(), 0);
    }

    #[tokio::test]
    async fn test_duplicate_email() {
        let store = MemoryLeadStore::new();
        let service = SubscribeService::new(store.clone(), FormProfile::business_inquiry());

        service.subscribe(form()).await.unwrap();
        let result = service.subscribe(form()).await;

        assert!(matches!(result, Err(SubscribeError::DuplicateEmail)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_error_conversion() {
        assert!(matches!(
            SubscribeError::from(StoreError::DuplicateEmail),
            SubscribeError::DuplicateEmail
        ));
        assert!(matches!(
            SubscribeError::from(StoreError::Rejected("bad".to_string())),
            SubscribeError::Store(_)
        ));
    }
}
