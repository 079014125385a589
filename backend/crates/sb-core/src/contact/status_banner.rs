use crate::{ContactFormState, SubmissionStatus};

pub const SUCCESS_TEXT: &str =
    "Thank you! Your message has been sent successfully. We'll get back to you soon.";
pub const GENERIC_ERROR_TEXT: &str =
    "There was an error sending your message. Please try again.";
pub const SEND_LABEL: &str = "Send Message";
pub const SENDING_LABEL: &str = "Sending...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

impl BannerKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// Inline feedback shown above the submit button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBanner {
    pub kind: BannerKind,
    pub text: String,
}

impl StatusBanner {
    pub fn from_state(state: &ContactFormState) -> Option<Self> {
        match state.status() {
            SubmissionStatus::Idle | SubmissionStatus::Sending => None,
            SubmissionStatus::Success => Some(Self {
                kind: BannerKind::Success,
                text: SUCCESS_TEXT.to_string(),
            }),
            SubmissionStatus::Error => Some(Self {
                kind: BannerKind::Error,
                text: state
                    .error_message()
                    .unwrap_or(GENERIC_ERROR_TEXT)
                    .to_string(),
            }),
        }
    }

    pub fn submit_label(state: &ContactFormState) -> &'static str {
        if state.can_submit() {
            SEND_LABEL
        } else {
            SENDING_LABEL
        }
    }
}
