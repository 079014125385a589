use crate::{EmailSender, MailError, MailResult, TemplateMessage, TemplateParams};

use async_trait::async_trait;
use reqwest::Client as ReqwestClient;
use sb_config::EmailConfig;
use serde::Serialize;

/// HTTP client for the EmailJS REST send endpoint
pub struct EmailJsClient {
    pub api_url: String,
    pub public_key: String,
    pub access_token: Option<String>,
    client: ReqwestClient,
}

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    access_token: Option<&'a str>,
    template_params: &'a TemplateParams,
}

impl EmailJsClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `api_url` - Full send endpoint (e.g., "https://api.emailjs.com/api/v1.0/email/send")
    /// * `public_key` - Account public key, sent as `user_id`
    /// * `access_token` - Optional private key for accounts that require it
    pub fn new(api_url: &str, public_key: &str, access_token: Option<&str>) -> Self {
        Self {
            api_url: api_url.trim().to_string(),
            public_key: public_key.to_string(),
            access_token: access_token
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(String::from),
            client: ReqwestClient::new(),
        }
    }

    pub fn from_config(config: &EmailConfig) -> Self {
        Self::new(
            &config.api_url,
            &config.public_key,
            config.access_token.as_deref(),
        )
    }
}

#[async_trait]
impl EmailSender for EmailJsClient {
    async fn send(&self, message: &TemplateMessage) -> MailResult<()> {
        let body = SendRequest {
            service_id: &message.service_id,
            template_id: &message.template_id,
            user_id: &self.public_key,
            access_token: self.access_token.as_deref(),
            template_params: &message.template_params,
        };

        let response = self.client.post(&self.api_url).json(&body).send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(());
        }

        // The service answers failures with a plain text reason
        let text = response.text().await.unwrap_or_default();
        Err(MailError::provider(status.as_u16(), text.trim()))
    }
}
