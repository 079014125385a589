//! Contact form state holder.
//!
//! Tracks the current field values, the submission status and the feedback
//! the page should show. Timing is driven by the caller passing `now`, which
//! keeps the state machine free of clocks and easy to step through in tests.

use crate::{
    ContactField, ContactForm, ContactSubmission, ContactValidator, DEFAULT_SUCCESS_DISPLAY_SECS,
    FieldErrors, SubmissionStatus,
};

use std::time::{Duration, Instant};

/// Result of asking the form to submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitAttempt {
    /// Validation passed; the caller must dispatch and then call `complete`
    Ready(ContactSubmission),
    /// Validation failed; nothing was sent
    Invalid(FieldErrors),
    /// A submission is already in flight; nothing happens
    InFlight,
}

/// What the delivery collaborator reported back
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryOutcome {
    Delivered,
    /// Carries the provider's error text when it supplied one
    Failed(Option<String>),
}

#[derive(Debug, Clone)]
pub struct ContactFormState {
    form: ContactForm,
    status: SubmissionStatus,
    field_errors: FieldErrors,
    error_message: Option<String>,
    succeeded_at: Option<Instant>,
    success_display: Duration,
}

impl Default for ContactFormState {
    fn default() -> Self {
        Self::new(Duration::from_secs(DEFAULT_SUCCESS_DISPLAY_SECS))
    }
}

impl ContactFormState {
    pub fn new(success_display: Duration) -> Self {
        Self {
            form: ContactForm::default(),
            status: SubmissionStatus::Idle,
            field_errors: FieldErrors::new(),
            error_message: None,
            succeeded_at: None,
            success_display,
        }
    }

    /// Start from values that were already typed (e.g. a posted form)
    pub fn with_form(form: ContactForm, success_display: Duration) -> Self {
        Self {
            form,
            ..Self::new(success_display)
        }
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn field_errors(&self) -> &FieldErrors {
        &self.field_errors
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn success_display(&self) -> Duration {
        self.success_display
    }

    /// Submit is disabled while a request is outstanding
    pub fn can_submit(&self) -> bool {
        self.status != SubmissionStatus::Sending
    }

    /// Update one field. Editing dismisses any success or error banner and
    /// clears the stale message for that field.
    ///
    /// Rendered pages repeat this in the browser: the page script drops the
    /// banner and the field's error text on `input`.
    pub fn set_field(&mut self, field: ContactField, value: impl Into<String>) {
        self.form.set(field, value);
        self.field_errors = self.remaining_errors_without(field);

        if self.status.is_settled() {
            self.reset_to_idle();
        }
    }

    /// Validate and, if everything checks out, move to `Sending`.
    pub fn submit(&mut self) -> SubmitAttempt {
        if self.status == SubmissionStatus::Sending {
            return SubmitAttempt::InFlight;
        }

        self.reset_to_idle();

        match ContactValidator::validate(&self.form) {
            Ok(submission) => {
                self.field_errors = FieldErrors::new();
                self.status = SubmissionStatus::Sending;
                SubmitAttempt::Ready(submission)
            }
            Err(errors) => {
                self.field_errors = errors.clone();
                SubmitAttempt::Invalid(errors)
            }
        }
    }

    /// Record the delivery result. Ignored unless a submission is in flight.
    pub fn complete(&mut self, outcome: DeliveryOutcome, now: Instant) {
        if self.status != SubmissionStatus::Sending {
            return;
        }

        match outcome {
            DeliveryOutcome::Delivered => {
                self.form.clear();
                self.field_errors = FieldErrors::new();
                self.error_message = None;
                self.succeeded_at = Some(now);
                self.status = SubmissionStatus::Success;
            }
            DeliveryOutcome::Failed(message) => {
                self.error_message = message.filter(|m| !m.trim().is_empty());
                self.status = SubmissionStatus::Error;
            }
        }
    }

    /// Advance time. A success banner reverts to idle once it has been shown
    /// for the display duration.
    ///
    /// Rendered pages carry the same duration as `data-dismiss-after` (see
    /// `success_display`) and the page script removes the banner when it ends.
    pub fn tick(&mut self, now: Instant) {
        if self.status != SubmissionStatus::Success {
            return;
        }

        if let Some(at) = self.succeeded_at
            && now.saturating_duration_since(at) >= self.success_display
        {
            self.reset_to_idle();
        }
    }

    fn reset_to_idle(&mut self) {
        self.status = SubmissionStatus::Idle;
        self.error_message = None;
        self.succeeded_at = None;
    }

    fn remaining_errors_without(&self, field: ContactField) -> FieldErrors {
        let mut remaining = FieldErrors::new();
        for (f, msg) in self.field_errors.iter().filter(|(f, _)| *f != field) {
            remaining.add(f, msg);
        }
        remaining
    }
}
