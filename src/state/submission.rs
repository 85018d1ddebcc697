//! Single-flight submission status for the pool update API.
//!
//! DESIGN
//! ======
//! `Idle -> InFlight -> {Success, Failed}`. Terminal outcomes stay visible
//! until dismissed or until the next edit session starts. A second `begin`
//! while in flight is rejected, never queued.

#[cfg(test)]
#[path = "submission_test.rs"]
mod submission_test;

use crate::net::types::ApiFieldError;

use super::pool_draft::DraftError;

/// Reason shown when the API fails without saying why.
pub const GENERIC_FAILURE_REASON: &str = "Your node pools could not be updated.";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("a submission is already in flight")]
    AlreadyInFlight,
    #[error("no submission is in flight")]
    NotInFlight,
    #[error("pool of type {type_key} has no nodes")]
    ZeroCountPool { type_key: String },
    #[error(transparent)]
    Draft(#[from] DraftError),
    #[error("pool update rejected: {0}")]
    Rejected(String),
}

/// Lifecycle of the most recent submission.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    InFlight,
    Success,
    /// Every reason reported, in API order. Never empty.
    Failed(Vec<ApiFieldError>),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubmissionController {
    status: SubmissionStatus,
}

impl SubmissionController {
    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    pub fn is_in_flight(&self) -> bool {
        self.status == SubmissionStatus::InFlight
    }

    pub fn begin(&mut self) -> Result<(), SubmitError> {
        if self.is_in_flight() {
            return Err(SubmitError::AlreadyInFlight);
        }
        self.status = SubmissionStatus::InFlight;
        Ok(())
    }

    /// Apply the API outcome to an in-flight submission.
    pub fn finish(&mut self, outcome: Result<(), Vec<ApiFieldError>>) -> Result<(), SubmitError> {
        if !self.is_in_flight() {
            return Err(SubmitError::NotInFlight);
        }
        match outcome {
            Ok(()) => {
                tracing::info!("node pool update accepted");
                self.status = SubmissionStatus::Success;
            }
            Err(errors) => {
                tracing::warn!(errors = errors.len(), "node pool update rejected");
                self.status = SubmissionStatus::Failed(non_empty(errors));
            }
        }
        Ok(())
    }

    /// Fail without contacting the API (client-side validation).
    pub fn reject(&mut self, errors: Vec<ApiFieldError>) -> Result<(), SubmitError> {
        if self.is_in_flight() {
            return Err(SubmitError::AlreadyInFlight);
        }
        self.status = SubmissionStatus::Failed(non_empty(errors));
        Ok(())
    }

    /// Clear a finished outcome. An in-flight submission is left alone.
    pub fn dismiss(&mut self) {
        if !self.is_in_flight() {
            self.status = SubmissionStatus::Idle;
        }
    }

    /// All reported errors for a failed submission.
    pub fn errors(&self) -> &[ApiFieldError] {
        match &self.status {
            SubmissionStatus::Failed(errors) => errors.as_slice(),
            _ => &[],
        }
    }

    /// The reason shown to the user: only the first one.
    pub fn surfaced_message(&self) -> Option<&str> {
        self.errors().first().map(|e| e.reason.as_str())
    }
}

fn non_empty(errors: Vec<ApiFieldError>) -> Vec<ApiFieldError> {
    if errors.is_empty() {
        vec![ApiFieldError::reason(GENERIC_FAILURE_REASON)]
    } else {
        errors
    }
}
