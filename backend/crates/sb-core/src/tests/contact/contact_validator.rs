use crate::contact::contact_validator::{MAX_MESSAGE_LENGTH, MAX_NAME_LENGTH};
use crate::tests::valid_form;
use crate::{ContactField, ContactValidator, ProjectType};

use googletest::assert_that;
use googletest::prelude::{anything, eq, err, none, ok, some};

// =========================================================================
// Happy Path
// =========================================================================

#[test]
fn given_example_form_when_validate_then_submission_carries_all_fields() {
    // Given
    let form = valid_form();

    // When
    let result = ContactValidator::validate(&form);

    // Then
    assert_that!(result, ok(anything()));
    let submission = result.unwrap();
    assert_that!(submission.name(), eq("John Doe"));
    assert_that!(submission.email(), eq("john@example.com"));
    assert_that!(submission.phone(), some(eq("9481545865")));
    assert_that!(submission.project_type(), eq(ProjectType::Residential));
    assert_that!(submission.message(), eq("Tell us about your project..."));
}

#[test]
fn given_blank_phone_when_validate_then_phone_is_none() {
    let mut form = valid_form();
    form.phone = "   ".to_string();

    let submission = ContactValidator::validate(&form).unwrap();

    assert_that!(submission.phone(), none());
}

#[test]
fn given_padded_values_when_validate_then_values_are_trimmed() {
    let mut form = valid_form();
    form.name = "  John Doe  ".to_string();
    form.email = " john@example.com ".to_string();

    let submission = ContactValidator::validate(&form).unwrap();

    assert_that!(submission.name(), eq("John Doe"));
    assert_that!(submission.email(), eq("john@example.com"));
}

#[test]
fn given_formatted_phone_with_ten_digits_when_validate_then_ok() {
    let mut form = valid_form();
    form.phone = "+91 (948) 154-5865".to_string();

    assert_that!(ContactValidator::validate(&form), ok(anything()));
}

#[test]
fn given_boundary_lengths_when_validate_then_ok() {
    let mut form = valid_form();
    form.name = "Jo".to_string();
    form.message = "m".repeat(MAX_MESSAGE_LENGTH);
    assert_that!(ContactValidator::validate(&form), ok(anything()));

    form.name = "n".repeat(MAX_NAME_LENGTH);
    form.message = "0123456789".to_string();
    assert_that!(ContactValidator::validate(&form), ok(anything()));
}

// =========================================================================
// Field Rules
// =========================================================================

#[test]
fn given_short_or_long_name_when_validate_then_name_error() {
    for name in ["", "J", " J ", &"n".repeat(MAX_NAME_LENGTH + 1)] {
        let mut form = valid_form();
        form.name = name.to_string();

        let errors = ContactValidator::validate(&form).unwrap_err();

        assert_that!(errors.len(), eq(1));
        assert!(errors.contains(ContactField::Name), "name {name:?}");
    }
}

#[test]
fn given_name_with_multibyte_chars_when_validate_then_counts_characters() {
    let mut form = valid_form();
    form.name = "é".repeat(MAX_NAME_LENGTH);

    assert_that!(ContactValidator::validate(&form), ok(anything()));
}

#[test]
fn given_malformed_email_when_validate_then_email_error() {
    for email in [
        "",
        "john",
        "john@",
        "@example.com",
        "john@example",
        "john@@example.com",
        "john doe@example.com",
        "john@example..com",
    ] {
        let mut form = valid_form();
        form.email = email.to_string();

        let errors = ContactValidator::validate(&form).unwrap_err();

        assert_eq!(
            errors.get(ContactField::Email),
            Some("Please enter a valid email address"),
            "email {email:?}"
        );
    }
}

#[test]
fn given_phone_with_too_few_digits_when_validate_then_phone_error() {
    let mut form = valid_form();
    form.phone = "94815-458".to_string();

    let errors = ContactValidator::validate(&form).unwrap_err();

    assert_that!(
        errors.get(ContactField::Phone),
        some(eq("Phone number must contain at least 10 digits"))
    );
}

#[test]
fn given_missing_or_unknown_project_type_when_validate_then_project_type_error() {
    for value in ["", "industrial"] {
        let mut form = valid_form();
        form.project_type = value.to_string();

        let errors = ContactValidator::validate(&form).unwrap_err();

        assert_that!(
            errors.get(ContactField::ProjectType),
            some(eq("Please select a project type"))
        );
    }
}

#[test]
fn given_short_message_when_validate_then_message_error() {
    let mut form = valid_form();
    form.message = "Too short".to_string();

    let errors = ContactValidator::validate(&form).unwrap_err();

    assert_that!(
        errors.get(ContactField::Message),
        some(eq("Message must be at least 10 characters"))
    );
}

#[test]
fn given_long_message_when_validate_then_message_error() {
    let mut form = valid_form();
    form.message = "m".repeat(MAX_MESSAGE_LENGTH + 1);

    let errors = ContactValidator::validate(&form).unwrap_err();

    assert_that!(
        errors.get(ContactField::Message),
        some(eq("Message must not exceed 1000 characters"))
    );
}

#[test]
fn given_empty_form_when_validate_then_every_required_field_reported() {
    let form = crate::ContactForm::default();

    let result = ContactValidator::validate(&form);

    assert_that!(result, err(anything()));
    let errors = result.unwrap_err();
    let fields: Vec<_> = errors.iter().map(|(f, _)| f).collect();
    assert_eq!(
        fields,
        vec![
            ContactField::Name,
            ContactField::Email,
            ContactField::ProjectType,
            ContactField::Message,
        ]
    );
}

#[test]
fn given_field_errors_when_serialized_then_keyed_by_form_names() {
    let mut form = valid_form();
    form.project_type = String::new();

    let errors = ContactValidator::validate(&form).unwrap_err();
    let json = serde_json::to_value(&errors).unwrap();

    assert_eq!(json["projectType"], "Please select a project type");
}
