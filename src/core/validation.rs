//! Validation of lead-capture submissions
//!
//! The same rules run in the browser before a submit and on the server before
//! the insert, so a visitor never sees a server-side 400 for something the
//! form could have caught.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::core::lead::{LeadField, LeadForm, YesNo};
use crate::core::profile::FormProfile;

/// Why a single field was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Required text field left blank
    Required { label: String },
    /// Required yes/no select left unanswered
    Unanswered(LeadField),
    /// Email does not look like `x@y.z`
    InvalidEmail,
    /// Follow-up field required because its parent was answered "yes"
    RequiredWhenYes(LeadField),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Required { label } => write!(f, "{} is required", label),
            ValidationError::Unanswered(LeadField::InvestmentRaised) => {
                write!(f, "Please select if you've raised investment")
            }
            ValidationError::Unanswered(_) => {
                write!(f, "Please select if you're making revenue")
            }
            ValidationError::InvalidEmail => write!(f, "Please enter a valid email"),
            ValidationError::RequiredWhenYes(LeadField::InvestmentAmount) => {
                write!(f, "Investment amount is required when you've raised investment")
            }
            ValidationError::RequiredWhenYes(_) => {
                write!(f, "MRR is required when making revenue")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Per-field error messages. Empty means the submission is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<LeadField, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: LeadField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: LeadField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn insert(&mut self, field: LeadField, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn remove(&mut self, field: LeadField) -> Option<String> {
        self.0.remove(&field)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (LeadField, &str)> {
        self.0.iter().map(|(f, m)| (*f, m.as_str()))
    }
}

/// Check `<non-space>+@<non-space>+.<non-space>+` anywhere in the value.
pub fn is_valid_email(value: &str) -> bool {
    value.char_indices().any(|(at, c)| {
        if c != '@' {
            return false;
        }
        let has_local = value[..at]
            .chars()
            .next_back()
            .is_some_and(|p| !p.is_whitespace());
        if !has_local {
            return false;
        }
        let rest = &value[at + 1..];
        let domain = rest.split(char::is_whitespace).next().unwrap_or_default();
        domain
            .char_indices()
            .any(|(i, d)| d == '.' && i > 0 && i + d.len_utf8() < domain.len())
    })
}

/// "Founder Name" -> "Founder name"
fn sentence_case(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

fn required_label(field: LeadField, profile: &FormProfile) -> String {
    match field {
        LeadField::Name => sentence_case(profile.copy.name_label),
        LeadField::Email => "Email".to_string(),
        LeadField::CompanyName => "Company name".to_string(),
        LeadField::Mrr => "MRR".to_string(),
        LeadField::InvestmentAmount => "Investment amount".to_string(),
        LeadField::RevenueMaking | LeadField::InvestmentRaised => field.to_string(),
    }
}

/// Validate a single field in the context of the whole form.
pub fn validate_field(
    field: LeadField,
    form: &LeadForm,
    profile: &FormProfile,
) -> Result<(), ValidationError> {
    if !profile.shows(field) {
        return Ok(());
    }

    let value = form.get(field).trim();

    if value.is_empty() {
        if profile.requires(field) {
            return Err(if field.is_choice() {
                ValidationError::Unanswered(field)
            } else {
                ValidationError::Required {
                    label: required_label(field, profile),
                }
            });
        }
        if field.parent().is_some() && form.is_active(field) {
            return Err(ValidationError::RequiredWhenYes(field));
        }
        return Ok(());
    }

    if field == LeadField::Email && !is_valid_email(value) {
        return Err(ValidationError::InvalidEmail);
    }

    if field.is_choice() && YesNo::parse(value).is_none() {
        return Err(ValidationError::Unanswered(field));
    }

    Ok(())
}

/// Validate every field the profile renders.
pub fn validate_lead(form: &LeadForm, profile: &FormProfile) -> FieldErrors {
    let mut errors = FieldErrors::new();
    for field in profile.fields() {
        if let Err(e) = validate_field(field, form, profile) {
            errors.insert(field, e.to_string());
        }
    }
    errors
}
