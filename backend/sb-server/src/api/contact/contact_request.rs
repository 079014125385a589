use sb_core::ContactForm;

use serde::Deserialize;

/// POST /api/v1/contact body. Missing fields read as empty.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub project_type: String,
    pub message: String,
}

impl From<ContactRequest> for ContactForm {
    fn from(request: ContactRequest) -> Self {
        ContactForm {
            name: request.name,
            email: request.email,
            phone: request.phone,
            project_type: request.project_type,
            message: request.message,
        }
    }
}
