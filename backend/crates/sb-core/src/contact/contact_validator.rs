use crate::{ContactField, ContactForm, ContactSubmission, FieldErrors, ProjectType};

use std::sync::LazyLock;

use regex::Regex;

pub const MIN_NAME_LENGTH: usize = 2;
pub const MAX_NAME_LENGTH: usize = 100;
pub const MIN_PHONE_DIGITS: usize = 10;
pub const MIN_MESSAGE_LENGTH: usize = 10;
pub const MAX_MESSAGE_LENGTH: usize = 1000;

// local@domain.tld with no whitespace and a single '@'
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@.]+(\.[^\s@.]+)+$").expect("email pattern is a valid regex")
});

/// Validates contact form input before anything leaves the server
pub struct ContactValidator;

impl ContactValidator {
    /// Check every field and either build a submission or report all violations.
    ///
    /// Lengths are counted in characters on trimmed input.
    pub fn validate(form: &ContactForm) -> Result<ContactSubmission, FieldErrors> {
        let mut errors = FieldErrors::new();

        let name = form.name.trim();
        if let Err(msg) = Self::validate_name(name) {
            errors.add(ContactField::Name, msg);
        }

        let email = form.email.trim();
        if let Err(msg) = Self::validate_email(email) {
            errors.add(ContactField::Email, msg);
        }

        let phone = form.phone.trim();
        if let Err(msg) = Self::validate_phone(phone) {
            errors.add(ContactField::Phone, msg);
        }

        let project_type = match Self::validate_project_type(form.project_type.trim()) {
            Ok(project_type) => Some(project_type),
            Err(msg) => {
                errors.add(ContactField::ProjectType, msg);
                None
            }
        };

        let message = form.message.trim();
        if let Err(msg) = Self::validate_message(message) {
            errors.add(ContactField::Message, msg);
        }

        match project_type {
            Some(project_type) if errors.is_empty() => Ok(ContactSubmission {
                name: name.to_string(),
                email: email.to_string(),
                phone: (!phone.is_empty()).then(|| phone.to_string()),
                project_type,
                message: message.to_string(),
            }),
            _ => Err(errors),
        }
    }

    pub fn validate_name(name: &str) -> Result<(), String> {
        let len = name.chars().count();
        if len < MIN_NAME_LENGTH {
            return Err(format!("Name must be at least {MIN_NAME_LENGTH} characters"));
        }
        if len > MAX_NAME_LENGTH {
            return Err(format!("Name must not exceed {MAX_NAME_LENGTH} characters"));
        }
        Ok(())
    }

    pub fn validate_email(email: &str) -> Result<(), String> {
        if EMAIL_PATTERN.is_match(email) {
            Ok(())
        } else {
            Err("Please enter a valid email address".to_string())
        }
    }

    /// Phone is optional; when given it needs enough digits to be dialable.
    pub fn validate_phone(phone: &str) -> Result<(), String> {
        if phone.is_empty() {
            return Ok(());
        }

        let digits = phone.chars().filter(char::is_ascii_digit).count();
        if digits < MIN_PHONE_DIGITS {
            return Err(format!(
                "Phone number must contain at least {MIN_PHONE_DIGITS} digits"
            ));
        }
        Ok(())
    }

    pub fn validate_project_type(value: &str) -> Result<ProjectType, String> {
        value
            .parse()
            .map_err(|_| "Please select a project type".to_string())
    }

    pub fn validate_message(message: &str) -> Result<(), String> {
        let len = message.chars().count();
        if len < MIN_MESSAGE_LENGTH {
            return Err(format!(
                "Message must be at least {MIN_MESSAGE_LENGTH} characters"
            ));
        }
        if len > MAX_MESSAGE_LENGTH {
            return Err(format!(
                "Message must not exceed {MAX_MESSAGE_LENGTH} characters"
            ));
        }
        Ok(())
    }
}
