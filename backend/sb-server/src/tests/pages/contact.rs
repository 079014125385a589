use crate::pages::contact::render;

use sb_core::{ContactField, ContactForm, ContactFormState, DeliveryOutcome};

use std::time::{Duration, Instant};

fn state() -> ContactFormState {
    ContactFormState::with_form(
        ContactForm {
            name: "A".to_string(),
            email: "bad".to_string(),
            phone: "".to_string(),
            project_type: "renovation".to_string(),
            message: "<b>short</b>".to_string(),
        },
        Duration::from_secs(7),
    )
}

#[test]
fn test_idle_form_has_no_banner_and_send_label() {
    let html = render(&ContactFormState::default());

    assert!(!html.contains("banner-"));
    assert!(html.contains(">Send Message</button>"));
}

#[test]
fn test_invalid_form_shows_errors_and_keeps_values() {
    let mut state = state();
    let _ = state.submit();

    let html = render(&state);

    assert!(html.contains(r#"id="name-error""#));
    assert!(html.contains(r#"id="email-error""#));
    assert!(!html.contains(r#"id="phone-error""#));
    assert!(html.contains(r#"value="bad""#));
    assert!(html.contains(r#"<option value="renovation" selected>"#));
    assert!(html.contains("&lt;b&gt;short&lt;/b&gt;"));
}

#[test]
fn test_sending_form_disables_submit() {
    let mut state = ContactFormState::default();
    state.set_field(ContactField::Name, "John Doe");
    state.set_field(ContactField::Email, "john@example.com");
    state.set_field(ContactField::ProjectType, "other");
    state.set_field(ContactField::Message, "Please call me back.");
    let _ = state.submit();

    let html = render(&state);

    assert!(html.contains(" disabled>Sending...</button>"));
}

#[test]
fn test_success_banner_dismisses_after_display_time() {
    let mut state = ContactFormState::new(Duration::from_secs(7));
    state.set_field(ContactField::Name, "John Doe");
    state.set_field(ContactField::Email, "john@example.com");
    state.set_field(ContactField::ProjectType, "other");
    state.set_field(ContactField::Message, "Please call me back.");
    let _ = state.submit();
    state.complete(DeliveryOutcome::Delivered, Instant::now());

    let html = render(&state);

    assert!(html.contains(r#"data-dismiss-after="7000""#));
    assert!(html.contains("Thank you! Your message has been sent successfully."));
}

#[test]
fn test_failed_delivery_shows_generic_error_without_provider_text() {
    let mut state = ContactFormState::default();
    state.set_field(ContactField::Name, "John Doe");
    state.set_field(ContactField::Email, "john@example.com");
    state.set_field(ContactField::ProjectType, "other");
    state.set_field(ContactField::Message, "Please call me back.");
    let _ = state.submit();
    state.complete(DeliveryOutcome::Failed(None), Instant::now());

    let html = render(&state);

    assert!(html.contains("banner-error"));
    assert!(html.contains("There was an error sending your message. Please try again."));
    assert!(html.contains(r#"value="John Doe""#));
}

#[test]
fn test_form_opts_into_single_submit_with_both_labels() {
    let html = render(&ContactFormState::default());

    assert!(html.contains(r#"novalidate data-submit-once>"#));
    assert!(html.contains(r#"data-send-label="Send Message" data-sending-label="Sending...""#));
}
