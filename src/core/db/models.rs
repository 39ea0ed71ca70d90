//! Database models
//!
//! Row types of the `subscribers` table.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::lead::NewLead;

/// Row to insert into `subscribers`
///
/// Serialized as-is for the REST store, so field names match the columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriberRecord {
    pub name: String,
    pub email: String,
    pub company_name: Option<String>,
    pub revenue_making: Option<String>,
    pub mrr: Option<String>,
    pub investment_raised: Option<String>,
    pub investment_amount: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl SubscriberRecord {
    pub fn new(lead: NewLead, created_at: DateTime<Utc>) -> Self {
        Self {
            name: lead.name,
            email: lead.email,
            company_name: lead.company_name,
            revenue_making: lead.revenue_making,
            mrr: lead.mrr,
            investment_raised: lead.investment_raised,
            investment_amount: lead.investment_amount,
            created_at,
        }
    }

    /// Key used for duplicate detection outside the database
    pub fn email_key(&self) -> String {
        self.email.trim().to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lead() -> NewLead {
        NewLead {
            name: "Ada".to_string(),
            email: "Ada@Example.com".to_string(),
            company_name: Some("Engines".to_string()),
            revenue_making: Some("yes".to_string()),
            mrr: Some("$10".to_string()),
            investment_raised: None,
            investment_amount: None,
        }
    }

    #[test]
    fn test_record_serializes_column_names_and_nulls() {
        let record = SubscriberRecord::new(lead(), Utc::now());
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["company_name"], "Engines");
        assert_eq!(json["revenue_making"], "yes");
        assert!(json["investment_raised"].is_null());
        assert!(json["investment_amount"].is_null());
        assert!(json["created_at"].is_string());
    }

    #[test]
    fn test_email_key_is_case_insensitive() {
        let record = SubscriberRecord::new(lead(), Utc::now());
        assert_eq!(record.email_key(), "ada@example.com");
    }
}
