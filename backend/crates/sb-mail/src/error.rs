use error_location::ErrorLocation;
use std::panic::Location;
use thiserror::Error;

/// Errors that can occur while handing a message to the email service
#[derive(Error, Debug)]
pub enum MailError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("Email service rejected message (status: {status}): {message} {location}")]
    Provider {
        status: u16,
        message: String,
        location: ErrorLocation,
    },
}

impl MailError {
    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        MailError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    #[track_caller]
    pub fn provider(status: u16, message: impl Into<String>) -> Self {
        MailError::Provider {
            status,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Text the email service sent back, suitable for showing the visitor.
    /// Transport failures have none.
    pub fn provider_message(&self) -> Option<&str> {
        match self {
            MailError::Provider { message, .. } if !message.trim().is_empty() => {
                Some(message.as_str())
            }
            _ => None,
        }
    }
}

impl From<reqwest::Error> for MailError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        MailError::from_reqwest(err)
    }
}

pub type Result<T> = std::result::Result<T, MailError>;
