//! Submit state machine of a lead-capture form instance
//!
//! `Idle -> Submitting -> {Success, Error} -> Idle`. The machine is plain data
//! so the browser component can keep it in a signal and tests can drive it
//! without a DOM.

use crate::core::lead::{LeadField, LeadForm};
use crate::core::profile::FormProfile;
use crate::core::validation::{FieldErrors, validate_lead};

/// How a submit attempt failed, as shown to the visitor
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SubmitFailure {
    #[error("This email is already registered")]
    DuplicateEmail,
    #[error("Failed to submit. Please try again.")]
    Generic,
}

impl SubmitFailure {
    /// Map the status of `POST /api/subscribe` to an outcome
    pub fn from_status(status: u16) -> Result<(), SubmitFailure> {
        match status {
            200..=299 => Ok(()),
            409 => Err(SubmitFailure::DuplicateEmail),
            _ => Err(SubmitFailure::Generic),
        }
    }
}

/// Where the form currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Success,
    Error(SubmitFailure),
}

/// Why a submit was not started
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SubmitRejected {
    #[error("a submission is already in flight")]
    InFlight,
    #[error("the form has invalid fields")]
    Invalid,
}

/// Identifies one finished attempt so a stale auto-reset timer cannot wipe a
/// newer state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settled(u64);

/// Fields, per-field errors and submit state of one form instance
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LeadFormState {
    pub fields: LeadForm,
    pub errors: FieldErrors,
    pub state: SubmissionState,
    attempt: u64,
}

impl LeadFormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_submitting(&self) -> bool {
        self.state == SubmissionState::Submitting
    }

    pub fn is_success(&self) -> bool {
        self.state == SubmissionState::Success
    }

    /// Update a field and drop its stale error message
    pub fn edit(&mut self, field: LeadField, value: String) {
        self.fields.set(field, value);
        self.errors.remove(field);
    }

    /// Validate and move to `Submitting`.
    ///
    /// Returns the payload to send. Refused while a request is in flight or
    /// while the success view is showing, and when validation fails (the
    /// field errors are stored for display).
    pub fn begin_submit(&mut self, profile: &FormProfile) -> Result<LeadForm, SubmitRejected> {
        if matches!(
            self.state,
            SubmissionState::Submitting | SubmissionState::Success
        ) {
            return Err(SubmitRejected::InFlight);
        }

        let errors = validate_lead(&self.fields, profile);
        if !errors.is_empty() {
            self.errors = errors;
            self.state = SubmissionState::Idle;
            return Err(SubmitRejected::Invalid);
        }

        self.errors.clear();
        self.state = SubmissionState::Submitting;
        self.attempt += 1;
        Ok(self.fields.clone())
    }

    /// Record the outcome of the in-flight request.
    ///
    /// Returns the ticket the caller passes to [`Self::expire`] once the
    /// profile's reset delay has elapsed, or `None` if nothing was in flight.
    pub fn complete(&mut self, outcome: Result<(), SubmitFailure>) -> Option<Settled> {
        if self.state != SubmissionState::Submitting {
            return None;
        }

        match outcome {
            Ok(()) => self.state = SubmissionState::Success,
            Err(failure) => {
                self.errors.insert(LeadField::Email, failure.to_string());
                self.state = SubmissionState::Error(failure);
            }
        }
        Some(Settled(self.attempt))
    }

    /// Automatic return to `Idle` after the display delay.
    ///
    /// Success clears every field; an error clears its message. A ticket from
    /// an older attempt is ignored.
    pub fn expire(&mut self, ticket: Settled) -> bool {
        if ticket.0 != self.attempt {
            return false;
        }

        match self.state {
            SubmissionState::Success => {
                self.fields.clear();
                self.errors.clear();
            }
            SubmissionState::Error(_) => {
                self.errors.remove(LeadField::Email);
            }
            SubmissionState::Idle | SubmissionState::Submitting => return false,
        }
        self.state = SubmissionState::Idle;
        true
    }
}
