use serde::Serialize;

/// Variables substituted into the email template
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateParams {
    pub to_email: String,
    pub from_name: String,
    pub from_email: String,
    /// Empty when the visitor left it blank
    pub phone: String,
    pub project_type: String,
    pub message: String,
}

/// One message for the email service: which template to render and with what
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateMessage {
    pub service_id: String,
    pub template_id: String,
    pub template_params: TemplateParams,
}
