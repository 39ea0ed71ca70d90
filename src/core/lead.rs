//! Lead model shared by the capture form, the validator and the subscribe endpoint.

use serde::{Deserialize, Serialize};

use crate::core::profile::FormProfile;

/// Reads a `null` string field as empty
pub mod null_as_empty {
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
    }
}

/// Raw values of the lead-capture form, exactly as typed by the visitor.
///
/// This is also the JSON body of `POST /api/subscribe`; missing keys and
/// `null` values deserialize to empty strings so the validator can report them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LeadForm {
    #[serde(deserialize_with = "null_as_empty::deserialize")]
    pub name: String,
    #[serde(deserialize_with = "null_as_empty::deserialize")]
    pub email: String,
    #[serde(deserialize_with = "null_as_empty::deserialize")]
    pub company_name: String,
    #[serde(deserialize_with = "null_as_empty::deserialize")]
    pub revenue_making: String,
    #[serde(deserialize_with = "null_as_empty::deserialize")]
    pub mrr: String,
    #[serde(deserialize_with = "null_as_empty::deserialize")]
    pub investment_raised: String,
    #[serde(deserialize_with = "null_as_empty::deserialize")]
    pub investment_amount: String,
}

/// A single field of [`LeadForm`]
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "camelCase")]
pub enum LeadField {
    #[display("name")]
    Name,
    #[display("email")]
    Email,
    #[display("companyName")]
    CompanyName,
    #[display("revenueMaking")]
    RevenueMaking,
    #[display("mrr")]
    Mrr,
    #[display("investmentRaised")]
    InvestmentRaised,
    #[display("investmentAmount")]
    InvestmentAmount,
}

impl LeadField {
    /// All fields in display order
    pub const ALL: [LeadField; 7] = [
        LeadField::Name,
        LeadField::Email,
        LeadField::CompanyName,
        LeadField::RevenueMaking,
        LeadField::Mrr,
        LeadField::InvestmentRaised,
        LeadField::InvestmentAmount,
    ];

    /// Name and email are part of every profile
    pub fn is_core(&self) -> bool {
        matches!(self, LeadField::Name | LeadField::Email)
    }

    /// Fields that are only asked when a yes/no parent field says "yes"
    pub fn parent(&self) -> Option<LeadField> {
        match self {
            LeadField::Mrr => Some(LeadField::RevenueMaking),
            LeadField::InvestmentAmount => Some(LeadField::InvestmentRaised),
            _ => None,
        }
    }

    /// Yes/no select fields
    pub fn is_choice(&self) -> bool {
        matches!(self, LeadField::RevenueMaking | LeadField::InvestmentRaised)
    }
}

/// Answer of a yes/no select
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum YesNo {
    #[display("yes")]
    Yes,
    #[display("no")]
    No,
}

impl YesNo {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "yes" => Some(YesNo::Yes),
            "no" => Some(YesNo::No),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            YesNo::Yes => "yes",
            YesNo::No => "no",
        }
    }
}

impl LeadForm {
    pub fn get(&self, field: LeadField) -> &str {
        match field {
            LeadField::Name => &self.name,
            LeadField::Email => &self.email,
            LeadField::CompanyName => &self.company_name,
            LeadField::RevenueMaking => &self.revenue_making,
            LeadField::Mrr => &self.mrr,
            LeadField::InvestmentRaised => &self.investment_raised,
            LeadField::InvestmentAmount => &self.investment_amount,
        }
    }

    pub fn set(&mut self, field: LeadField, value: String) {
        let slot = match field {
            LeadField::Name => &mut self.name,
            LeadField::Email => &mut self.email,
            LeadField::CompanyName => &mut self.company_name,
            LeadField::RevenueMaking => &mut self.revenue_making,
            LeadField::Mrr => &mut self.mrr,
            LeadField::InvestmentRaised => &mut self.investment_raised,
            LeadField::InvestmentAmount => &mut self.investment_amount,
        };
        *slot = value;
    }

    /// Reset every field to empty
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Whether a conditional field is currently asked for, i.e. its parent
    /// select is answered "yes". Unconditional fields always are.
    pub fn is_active(&self, field: LeadField) -> bool {
        match field.parent() {
            Some(parent) => YesNo::parse(self.get(parent)) == Some(YesNo::Yes),
            None => true,
        }
    }
}

/// Lead ready to be stored: trimmed, with blank or hidden optional fields
/// normalized to `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewLead {
    pub name: String,
    pub email: String,
    pub company_name: Option<String>,
    pub revenue_making: Option<String>,
    pub mrr: Option<String>,
    pub investment_raised: Option<String>,
    pub investment_amount: Option<String>,
}

impl NewLead {
    /// Normalize a submitted form against the profile it was rendered with.
    pub fn from_form(form: &LeadForm, profile: &FormProfile) -> Self {
        let optional = |field: LeadField| -> Option<String> {
            if !profile.shows(field) {
                return None;
            }
            let value = form.get(field).trim();
            (!value.is_empty()).then(|| value.to_string())
        };

        Self {
            name: form.name.trim().to_string(),
            email: form.email.trim().to_string(),
            company_name: optional(LeadField::CompanyName),
            revenue_making: optional(LeadField::RevenueMaking),
            mrr: optional(LeadField::Mrr),
            investment_raised: optional(LeadField::InvestmentRaised),
            investment_amount: optional(LeadField::InvestmentAmount),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_deserializes_camel_case_with_missing_keys() {
        let json = r#"{"name": "Ada", "email": "ada@example.com", "companyName": "Engines"}"#;
        let form: LeadForm = serde_json::from_str(json).unwrap();

        assert_eq!(form.name, "Ada");
        assert_eq!(form.company_name, "Engines");
        assert_eq!(form.mrr, "");
        assert_eq!(form.investment_amount, "");
    }

    #[test]
    fn test_form_reads_null_as_empty() {
        let json = r#"{
            "name": "Ada",
            "email": "ada@example.com",
            "companyName": null,
            "revenueMaking": "no",
            "mrr": null,
            "investmentRaised": null,
            "investmentAmount": null
        }"#;
        let form: LeadForm = serde_json::from_str(json).unwrap();

        assert_eq!(form.revenue_making, "no");
        assert_eq!(form.company_name, "");
        assert_eq!(form.mrr, "");
        assert_eq!(form.investment_amount, "");
    }

    #[test]
    fn test_form_rejects_non_string_values() {
        let json = r#"{"name": "Ada", "email": "ada@example.com", "mrr": 5}"#;
        assert!(serde_json::from_str::<LeadForm>(json).is_err());
    }

    #[test]
    fn test_get_and_set_cover_every_field() {
        let mut form = LeadForm::default();
        for (i, field) in LeadField::ALL.iter().enumerate() {
            form.set(*field, format!("value-{i}"));
        }
        for (i, field) in LeadField::ALL.iter().enumerate() {
            assert_eq!(form.get(*field), format!("value-{i}"));
        }

        form.clear();
        assert_eq!(form, LeadForm::default());
    }

    #[test]
    fn test_field_display_matches_wire_name() {
        assert_eq!(LeadField::CompanyName.to_string(), "companyName");
        assert_eq!(
            serde_json::to_string(&LeadField::InvestmentAmount).unwrap(),
            "\"investmentAmount\""
        );
    }

    #[test]
    fn test_conditional_field_activity() {
        let mut form = LeadForm::default();
        assert!(!form.is_active(LeadField::Mrr));
        assert!(form.is_active(LeadField::CompanyName));

        form.revenue_making = "yes".to_string();
        assert!(form.is_active(LeadField::Mrr));

        form.revenue_making = "no".to_string();
        assert!(!form.is_active(LeadField::Mrr));
    }

    #[test]
    fn test_yes_no_parse() {
        assert_eq!(YesNo::parse("yes"), Some(YesNo::Yes));
        assert_eq!(YesNo::parse(" no "), Some(YesNo::No));
        assert_eq!(YesNo::parse(""), None);
        assert_eq!(YesNo::parse("maybe"), None);
        assert_eq!(YesNo::Yes.to_string(), "yes");
    }

    #[test]
    fn test_new_lead_normalizes_blank_fields_to_none() {
        let form = LeadForm {
            name: "  Ada ".to_string(),
            email: "ada@example.com ".to_string(),
            company_name: "Engines".to_string(),
            revenue_making: "no".to_string(),
            mrr: "   ".to_string(),
            investment_raised: String::new(),
            investment_amount: String::new(),
        };

        let lead = NewLead::from_form(&form, &FormProfile::business_inquiry());

        assert_eq!(lead.name, "Ada");
        assert_eq!(lead.email, "ada@example.com");
        assert_eq!(lead.company_name.as_deref(), Some("Engines"));
        assert_eq!(lead.revenue_making.as_deref(), Some("no"));
        assert_eq!(lead.mrr, None);
        assert_eq!(lead.investment_raised, None);
        assert_eq!(lead.investment_amount, None);
    }

    #[test]
    fn test_new_lead_drops_fields_hidden_by_profile() {
        let form = LeadForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            company_name: "Engines".to_string(),
            ..Default::default()
        };

        let lead = NewLead::from_form(&form, &FormProfile::simple_waitlist());

        assert_eq!(lead.company_name, None);
    }
}
