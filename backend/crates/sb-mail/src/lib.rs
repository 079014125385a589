//! Outbound delivery of contact form submissions.
//!
//! The site never talks SMTP itself. A validated submission is turned into
//! a template message and handed to a hosted email service over HTTPS.

mod delivery_config;
mod email_sender;
mod emailjs_client;
mod error;
mod submission_dispatcher;
mod template_message;

#[cfg(test)]
mod tests;

pub use delivery_config::DeliveryConfig;
pub use email_sender::EmailSender;
pub use emailjs_client::EmailJsClient;
pub use error::{MailError, Result as MailResult};
pub use submission_dispatcher::SubmissionDispatcher;
pub use template_message::{TemplateMessage, TemplateParams};
