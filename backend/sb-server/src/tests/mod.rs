
use sb_mail::{DeliveryConfig, EmailSender, MailError, MailResult, SubmissionDispatcher, TemplateMessage};

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

/// Sender that counts calls and optionally rejects with provider text
pub(crate) struct CountingSender {
    calls: AtomicUsize,
    reject_with: Option<String>,
}

impl CountingSender {
    pub(crate) fn accepting() -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            reject_with: None,
        })
    }

    pub(crate) fn rejecting(message: &str) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            reject_with: Some(message.to_string()),
        })
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EmailSender for CountingSender {
    async fn send(&self, _message: &TemplateMessage) -> MailResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.reject_with {
            Some(text) => Err(MailError::provider(400, text.clone())),
            None => Ok(()),
        }
    }
}

pub(crate) fn dispatcher(sender: Arc<CountingSender>) -> SubmissionDispatcher {
    SubmissionDispatcher::new(
        sender,
        DeliveryConfig {
            service_id: "service_test".to_string(),
            template_id: "template_test".to_string(),
            to_email: "info@sanjeevinibuilders.com".to_string(),
        },
    )
}
