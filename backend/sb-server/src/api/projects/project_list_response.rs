use crate::ProjectDto;
use serde::Serialize;

/// List of projects response
#[derive(Debug, Serialize)]
pub struct ProjectListResponse {
    /// Filter that produced the list
    pub category: String,
    pub projects: Vec<ProjectDto>,
}
