use sb_core::{Project, Specification};

use serde::Serialize;

/// Project as exposed by the JSON API
#[derive(Debug, Clone, Serialize)]
pub struct ProjectDto {
    pub slug: String,
    pub title: String,
    pub category: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub location: String,
    pub year: Option<String>,
    pub team: Option<String>,
    pub status: String,
    pub description: String,
    pub overview: Option<String>,
    pub features: Vec<String>,
    pub highlights: Vec<String>,
    pub area: Option<String>,
    pub specifications: Vec<Specification>,
    pub images: Vec<String>,
    pub cover_image: String,
    pub next: Option<String>,
    pub featured: bool,
    /// Site path of the detail page
    pub url: String,
}

impl From<&Project> for ProjectDto {
    fn from(project: &Project) -> Self {
        Self {
            slug: project.slug.clone(),
            title: project.title.clone(),
            category: project.category.as_str().to_string(),
            kind: project.kind.clone(),
            location: project.location.clone(),
            year: project.year.clone(),
            team: project.team.clone(),
            status: project.status.as_str().to_string(),
            description: project.description.clone(),
            overview: project.overview.clone(),
            features: project.features.clone(),
            highlights: project.highlights.clone(),
            area: project.area.clone(),
            specifications: project.specifications.clone(),
            images: project.images.clone(),
            cover_image: project.cover_image().to_string(),
            next: project.next.clone(),
            featured: project.featured,
            url: project.link(),
        }
    }
}
