//! Hosted backend-as-a-service store
//!
//! Inserts rows through the project's PostgREST-style API:
//! `POST {base}/rest/v1/subscribers` authenticated with the project key.

use serde::Deserialize;

use crate::core::db::models::SubscriberRecord;
use crate::core::db::repositories::subscriber::UNIQUE_VIOLATION;
use crate::core::subscribe::store::{LeadStore, StoreError};

/// Table the leads are written to
pub const SUBSCRIBERS_TABLE: &str = "subscribers";

/// Error body returned by the REST API
#[derive(Debug, Deserialize)]
struct RestErrorBody {
    code: Option<String>,
    message: Option<String>,
}

/// Store backed by the hosted REST API
#[derive(Clone)]
pub struct RestLeadStore {
    client: reqwest::Client,
    table_url: String,
    api_key: String,
}

impl RestLeadStore {
    pub fn new(base_url: &str, api_key: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url, api_key)
    }

    pub fn with_client(client: reqwest::Client, base_url: &str, api_key: impl Into<String>) -> Self {
        Self {
            client,
            table_url: format!(
                "{}/rest/v1/{}",
                base_url.trim_end_matches('/'),
                SUBSCRIBERS_TABLE
            ),
            api_key: api_key.into(),
        }
    }

    pub fn table_url(&self) -> &str {
        &self.table_url
    }
}

/// Turn a non-success response into a store error.
///
/// A unique violation shows up as SQLSTATE `23505` in the body, or as a bare
/// 409 when the body could not be read.
pub fn classify_failure(status: u16, body: &str) -> StoreError {
    let parsed = serde_json::from_str::<RestErrorBody>(body).ok();
    let code = parsed.as_ref().and_then(|b| b.code.as_deref());

    if code == Some(UNIQUE_VIOLATION) || (status == 409 && code.is_none()) {
        return StoreError::DuplicateEmail;
    }

    let message = parsed
        .and_then(|b| b.message)
        .unwrap_or_else(|| body.chars().take(200).collect());

    if status >= 500 {
        StoreError::Unavailable(format!("HTTP {}: {}", status, message))
    } else {
        StoreError::Rejected(format!("HTTP {}: {}", status, message))
    }
}

impl LeadStore for RestLeadStore {
    async fn insert(&self, record: &SubscriberRecord) -> Result<(), StoreError> {
        let response = self
            .client
            .post(&self.table_url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header("Prefer", "return=minimal")
            .json(&[record])
            .send()
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(classify_failure(status.as_u16(), &body))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        let response = self
            .client
            .get(&self.table_url)
            .query(&[("select", "id"), ("limit", "1")])
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .send()
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(StoreError::Unavailable(format!(
                "HTTP {}",
                response.status().as_u16()
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_url_strips_trailing_slash() {
        let store = RestLeadStore::new("https://demo.supabase.co/", "key");
        assert_eq!(
            store.table_url(),
            "https://demo.supabase.co/rest/v1/subscribers"
        );
    }

    #[test]
    fn test_unique_violation_code_is_duplicate() {
        let body = r#"{"code":"23505","details":"Key (email)=(a@b.com) already exists.","message":"duplicate key value violates unique constraint"}"#;
        assert!(matches!(
            classify_failure(409, body),
            StoreError::DuplicateEmail
        ));
        assert!(matches!(
            classify_failure(400, body),
            StoreError::DuplicateEmail
        ));
    }

    #[test]
    fn test_bare_conflict_is_duplicate() {
        assert!(matches!(classify_failure(409, ""), StoreError::DuplicateEmail));
    }

    #[test]
    fn test_other_conflict_code_is_not_duplicate() {
        let body = r#"{"code":"23503","message":"foreign key violation"}"#;
        assert!(matches!(classify_failure(409, body), StoreError::Rejected(_)));
    }

    #[test]
    fn test_server_errors_are_unavailable() {
        match classify_failure(503, "upstream down") {
            StoreError::Unavailable(msg) => assert_eq!(msg, "HTTP 503: upstream down"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_client_errors_use_body_message() {
        let body = r#"{"code":"PGRST204","message":"Column 'foo' not found"}"#;
        match classify_failure(400, body) {
            StoreError::Rejected(msg) => assert!(msg.contains("Column 'foo' not found")),
            other => panic!("unexpected {:?}", other),
        }
    }
}
