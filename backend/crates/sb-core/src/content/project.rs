use crate::{ProjectCategory, ProjectStatus};

use serde::{Deserialize, Serialize};

const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Specification {
    pub label: String,
    pub value: String,
}

/// One portfolio entry from the static project document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub slug: String,
    pub title: String,
    pub category: ProjectCategory,
    /// Display type, e.g. "Luxury Residential"
    #[serde(rename = "type")]
    pub kind: String,
    pub location: String,
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub team: Option<String>,
    #[serde(default)]
    pub status: ProjectStatus,
    pub description: String,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub area: Option<String>,
    #[serde(default)]
    pub specifications: Vec<Specification>,
    #[serde(default)]
    pub images: Vec<String>,
    /// Slug of the project to suggest after this one
    #[serde(default)]
    pub next: Option<String>,
    /// Shown in the home page "signature projects" strip
    #[serde(default)]
    pub featured: bool,
}

impl Project {
    pub fn cover_image(&self) -> &str {
        self.images
            .first()
            .map(String::as_str)
            .unwrap_or(PLACEHOLDER_IMAGE)
    }

    pub fn link(&self) -> String {
        format!("/projects/{}", self.slug)
    }
}
