use crate::{ConfigError, ConfigErrorResult, DEFAULT_CONTACT_EMAIL, DEFAULT_EMAIL_API_URL};

use serde::Deserialize;

/// Credentials and routing for the email delivery service.
///
/// Every credential defaults to empty. A missing value is not a startup
/// error; the provider rejects the request and the visitor sees the
/// delivery error banner.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EmailConfig {
    /// Send endpoint of the delivery service
    pub api_url: String,
    pub public_key: String,
    /// Private access token, only needed when the account enforces it
    pub access_token: Option<String>,
    pub service_id: String,
    pub template_id: String,
    /// Inbox that receives contact form messages
    pub contact_email: String,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            api_url: String::from(DEFAULT_EMAIL_API_URL),
            public_key: String::new(),
            access_token: None,
            service_id: String::new(),
            template_id: String::new(),
            contact_email: String::from(DEFAULT_CONTACT_EMAIL),
        }
    }
}

impl EmailConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(self.api_url.starts_with("http://") || self.api_url.starts_with("https://")) {
            return Err(ConfigError::email(format!(
                "email.api_url must be an http(s) URL, got '{}'",
                self.api_url
            )));
        }

        if !self.is_configured() {
            log::warn!(
                "Email delivery credentials are incomplete; contact form submissions will fail until public_key, service_id and template_id are set"
            );
        }

        Ok(())
    }

    /// True when every credential the provider needs is present
    pub fn is_configured(&self) -> bool {
        !self.public_key.trim().is_empty()
            && !self.service_id.trim().is_empty()
            && !self.template_id.trim().is_empty()
    }
}
