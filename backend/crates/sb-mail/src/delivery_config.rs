use sb_config::EmailConfig;

/// Where contact submissions go and which template renders them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryConfig {
    pub service_id: String,
    pub template_id: String,
    pub to_email: String,
}

impl From<&EmailConfig> for DeliveryConfig {
    fn from(config: &EmailConfig) -> Self {
        Self {
            service_id: config.service_id.clone(),
            template_id: config.template_id.clone(),
            to_email: config.contact_email.clone(),
        }
    }
}
