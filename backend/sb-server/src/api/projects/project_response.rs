use crate::ProjectDto;
use serde::Serialize;

/// Single project response
#[derive(Debug, Serialize)]
pub struct ProjectResponse {
    pub project: ProjectDto,
    /// Project linked as "next" from the detail page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_project: Option<ProjectDto>,
}
