
use crate::{EmailSender, MailError, MailResult, TemplateMessage};

use std::sync::Mutex;

use async_trait::async_trait;
use sb_core::{ContactForm, ContactSubmission, ContactValidator};

/// Sender that records every message and answers with a canned result
pub(crate) struct RecordingSender {
    pub(crate) sent: Mutex<Vec<TemplateMessage>>,
    reject_with: Option<(u16, String)>,
}

impl RecordingSender {
    pub(crate) fn accepting() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            reject_with: None,
        }
    }

    pub(crate) fn rejecting(status: u16, message: &str) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            reject_with: Some((status, message.to_string())),
        }
    }

    pub(crate) fn sent(&self) -> Vec<TemplateMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl EmailSender for RecordingSender {
    async fn send(&self, message: &TemplateMessage) -> MailResult<()> {
        self.sent.lock().unwrap().push(message.clone());
        match &self.reject_with {
            Some((status, text)) => Err(MailError::provider(*status, text.clone())),
            None => Ok(()),
        }
    }
}

pub(crate) fn submission(phone: &str) -> ContactSubmission {
    let form = ContactForm {
        name: "John Doe".to_string(),
        email: "john@example.com".to_string(),
        phone: phone.to_string(),
        project_type: "residential".to_string(),
        message: "I'd like a quote for a villa.".to_string(),
    };
    ContactValidator::validate(&form).unwrap()
}
