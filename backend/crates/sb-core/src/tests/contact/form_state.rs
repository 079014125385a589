use crate::tests::valid_form;
use crate::{
    ContactField, ContactFormState, DeliveryOutcome, SubmissionStatus, SubmitAttempt,
};

use std::time::{Duration, Instant};

const DISPLAY: Duration = Duration::from_secs(5);

fn filled_state() -> ContactFormState {
    ContactFormState::with_form(valid_form(), DISPLAY)
}

#[test]
fn test_new_state_is_idle_and_submittable() {
    let state = ContactFormState::default();

    assert_eq!(state.status(), SubmissionStatus::Idle);
    assert!(state.can_submit());
    assert!(state.form().is_empty());
    assert_eq!(state.success_display(), DISPLAY);
}

#[test]
fn test_set_field_updates_value() {
    let mut state = ContactFormState::new(DISPLAY);

    state.set_field(ContactField::Name, "Asha");
    state.set_field(ContactField::ProjectType, "interior");

    assert_eq!(state.form().name, "Asha");
    assert_eq!(state.form().project_type, "interior");
}

#[test]
fn test_successful_delivery_walks_idle_sending_success_idle() {
    let mut state = filled_state();
    let start = Instant::now();

    let attempt = state.submit();
    assert!(matches!(attempt, SubmitAttempt::Ready(_)));
    assert_eq!(state.status(), SubmissionStatus::Sending);
    assert!(!state.can_submit());

    state.complete(DeliveryOutcome::Delivered, start);
    assert_eq!(state.status(), SubmissionStatus::Success);
    assert!(state.form().is_empty(), "fields are cleared on success");

    state.tick(start + DISPLAY - Duration::from_millis(1));
    assert_eq!(state.status(), SubmissionStatus::Success);

    state.tick(start + DISPLAY);
    assert_eq!(state.status(), SubmissionStatus::Idle);
}

#[test]
fn test_failed_delivery_keeps_fields_and_provider_message() {
    let mut state = filled_state();

    state.submit();
    state.complete(
        DeliveryOutcome::Failed(Some("The service ID is invalid".to_string())),
        Instant::now(),
    );

    assert_eq!(state.status(), SubmissionStatus::Error);
    assert_eq!(state.form(), &valid_form());
    assert_eq!(state.error_message(), Some("The service ID is invalid"));
    assert!(state.can_submit(), "user may retry after an error");
}

#[test]
fn test_failed_delivery_with_blank_message_falls_back_to_none() {
    let mut state = filled_state();

    state.submit();
    state.complete(DeliveryOutcome::Failed(Some("  ".to_string())), Instant::now());

    assert_eq!(state.error_message(), None);
}

#[test]
fn test_error_does_not_auto_dismiss() {
    let mut state = filled_state();
    let start = Instant::now();

    state.submit();
    state.complete(DeliveryOutcome::Failed(None), start);
    state.tick(start + DISPLAY * 10);

    assert_eq!(state.status(), SubmissionStatus::Error);
}

#[test]
fn test_submit_while_sending_is_noop() {
    let mut state = filled_state();

    assert!(matches!(state.submit(), SubmitAttempt::Ready(_)));
    assert_eq!(state.submit(), SubmitAttempt::InFlight);
    assert_eq!(state.status(), SubmissionStatus::Sending);
}

#[test]
fn test_invalid_submit_stays_idle_with_field_errors() {
    let mut state = filled_state();
    state.set_field(ContactField::Email, "not-an-email");

    let attempt = state.submit();

    assert!(matches!(attempt, SubmitAttempt::Invalid(ref e) if e.contains(ContactField::Email)));
    assert_eq!(state.status(), SubmissionStatus::Idle);
    assert!(state.field_errors().contains(ContactField::Email));
}

#[test]
fn test_editing_field_clears_its_error_only() {
    let mut state = ContactFormState::new(DISPLAY);
    state.submit();
    assert!(state.field_errors().contains(ContactField::Name));
    assert!(state.field_errors().contains(ContactField::Email));

    state.set_field(ContactField::Name, "John Doe");

    assert!(!state.field_errors().contains(ContactField::Name));
    assert!(state.field_errors().contains(ContactField::Email));
}

#[test]
fn test_edit_after_error_returns_to_idle() {
    let mut state = filled_state();
    state.submit();
    state.complete(DeliveryOutcome::Failed(None), Instant::now());

    state.set_field(ContactField::Message, "Updated project details here");

    assert_eq!(state.status(), SubmissionStatus::Idle);
    assert_eq!(state.error_message(), None);
}

#[test]
fn test_edit_after_success_returns_to_idle_before_timeout() {
    let mut state = filled_state();
    state.submit();
    state.complete(DeliveryOutcome::Delivered, Instant::now());

    state.set_field(ContactField::Name, "Next Visitor");

    assert_eq!(state.status(), SubmissionStatus::Idle);
}

#[test]
fn test_edit_while_sending_keeps_sending() {
    let mut state = filled_state();
    state.submit();

    state.set_field(ContactField::Phone, "8073365694");

    assert_eq!(state.status(), SubmissionStatus::Sending);
}

#[test]
fn test_complete_without_submit_is_ignored() {
    let mut state = filled_state();

    state.complete(DeliveryOutcome::Delivered, Instant::now());

    assert_eq!(state.status(), SubmissionStatus::Idle);
    assert_eq!(state.form(), &valid_form());
}
