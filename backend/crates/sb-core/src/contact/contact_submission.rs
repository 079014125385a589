use crate::ProjectType;

use serde::Serialize;

/// A contact form that passed validation.
///
/// Only `ContactValidator` constructs these, so holding one means every
/// field rule has already been checked.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub(crate) name: String,
    pub(crate) email: String,
    pub(crate) phone: Option<String>,
    pub(crate) project_type: ProjectType,
    pub(crate) message: String,
}

impl ContactSubmission {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    pub fn project_type(&self) -> ProjectType {
        self.project_type
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
