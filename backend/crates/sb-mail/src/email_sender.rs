use crate::{MailResult, TemplateMessage};

use async_trait::async_trait;

/// Anything that can hand a template message to an email service.
///
/// Implementations must be `Send + Sync` so one sender can be shared by
/// every request handler.
#[async_trait]
pub trait EmailSender: Send + Sync {
    /// Send exactly one message. No retries.
    async fn send(&self, message: &TemplateMessage) -> MailResult<()>;
}
