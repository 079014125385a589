use serde::{Serialize, Serializer};

/// Fields of the contact form, ordered as they appear on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContactField {
    Name,
    Email,
    Phone,
    ProjectType,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 5] = [
        Self::Name,
        Self::Email,
        Self::Phone,
        Self::ProjectType,
        Self::Message,
    ];

    /// Form field name (matches the HTML `name` attribute)
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::ProjectType => "projectType",
            Self::Message => "message",
        }
    }
}

impl std::fmt::Display for ContactField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for ContactField {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
