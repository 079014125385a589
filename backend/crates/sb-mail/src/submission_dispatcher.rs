use crate::{DeliveryConfig, EmailSender, MailResult, TemplateMessage, TemplateParams};

use std::sync::Arc;

use log::{info, warn};
use sb_core::ContactSubmission;

/// Turns a validated submission into one outbound email
#[derive(Clone)]
pub struct SubmissionDispatcher {
    sender: Arc<dyn EmailSender>,
    config: DeliveryConfig,
}

impl SubmissionDispatcher {
    pub fn new(sender: Arc<dyn EmailSender>, config: DeliveryConfig) -> Self {
        Self { sender, config }
    }

    pub fn config(&self) -> &DeliveryConfig {
        &self.config
    }

    pub fn message_for(&self, submission: &ContactSubmission) -> TemplateMessage {
        TemplateMessage {
            service_id: self.config.service_id.clone(),
            template_id: self.config.template_id.clone(),
            template_params: TemplateParams {
                to_email: self.config.to_email.clone(),
                from_name: submission.name().to_string(),
                from_email: submission.email().to_string(),
                phone: submission.phone().unwrap_or_default().to_string(),
                project_type: submission.project_type().as_str().to_string(),
                message: submission.message().to_string(),
            },
        }
    }

    /// Send the submission. Called once per accepted submit.
    pub async fn dispatch(&self, submission: &ContactSubmission) -> MailResult<()> {
        let message = self.message_for(submission);

        match self.sender.send(&message).await {
            Ok(()) => {
                info!(
                    "Contact message from {} <{}> delivered ({})",
                    submission.name(),
                    submission.email(),
                    submission.project_type()
                );
                Ok(())
            }
            Err(e) => {
                warn!(
                    "Contact message from <{}> was not delivered: {}",
                    submission.email(),
                    e
                );
                Err(e)
            }
        }
    }
}
