use serde::Deserialize;

/// Query parameters for project listing
#[derive(Debug, Default, Deserialize)]
pub struct ListProjectsQuery {
    /// "all", "residential", "commercial" or "restoration"
    pub category: Option<String>,
}
