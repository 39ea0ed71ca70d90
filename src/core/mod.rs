//! Core domain models and business logic for lead capture
//!
//! Everything outside the `ssr`-gated modules compiles for the browser too,
//! so the form and the endpoint share one validator.

#[cfg(feature = "ssr")]
pub mod config;
#[cfg(feature = "ssr")]
pub mod db;
pub mod grid_pattern;
pub mod launch;
pub mod lead;
pub mod particles;
pub mod profile;
pub mod submission;
#[cfg(feature = "ssr")]
pub mod subscribe;
pub mod validation;

pub use lead::{LeadField, LeadForm, NewLead, YesNo};
pub use profile::{FormCopy, FormProfile, Theme};
pub use submission::{LeadFormState, Settled, SubmissionState, SubmitFailure, SubmitRejected};
pub use validation::{FieldErrors, ValidationError, is_valid_email, validate_field, validate_lead};
