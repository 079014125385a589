//! One pass of the contact form: validate, send once, record the result.

use crate::InFlightSubmissions;

use sb_core::{ContactFormState, DeliveryOutcome, SubmitAttempt};
use sb_mail::SubmissionDispatcher;

use std::time::Instant;

/// Where a submit ended up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowOutcome {
    Delivered,
    Failed,
    Invalid,
    /// The same message was already being sent, so nothing happened
    Skipped,
}

pub struct ContactWorkflow;

impl ContactWorkflow {
    /// Drive `state` through submit and delivery.
    ///
    /// The dispatcher is called at most once, and only when validation
    /// passes and neither `state` nor `in_flight` already has this message
    /// outstanding. A skipped run leaves `state` in `Sending`.
    pub async fn run(
        state: &mut ContactFormState,
        dispatcher: &SubmissionDispatcher,
        in_flight: &InFlightSubmissions,
        now: Instant,
    ) -> WorkflowOutcome {
        let submission = match state.submit() {
            SubmitAttempt::Ready(submission) => submission,
            SubmitAttempt::Invalid(errors) => {
                log::debug!("Contact form rejected: {}", errors);
                return WorkflowOutcome::Invalid;
            }
            SubmitAttempt::InFlight => return WorkflowOutcome::Skipped,
        };

        let Some(_claim) = in_flight.claim(&submission) else {
            log::info!(
                "Contact message from {} is already being sent; skipping duplicate",
                submission.email()
            );
            return WorkflowOutcome::Skipped;
        };

        match dispatcher.dispatch(&submission).await {
            Ok(()) => {
                state.complete(DeliveryOutcome::Delivered, now);
                WorkflowOutcome::Delivered
            }
            Err(e) => {
                let message = e.provider_message().map(String::from);
                state.complete(DeliveryOutcome::Failed(message), now);
                WorkflowOutcome::Failed
            }
        }
    }
}
