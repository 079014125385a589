//! Project REST API handlers
//!
//! Read-only handlers for listing and retrieving portfolio projects.

use crate::{
    ApiError, ApiResult, AppState, ListProjectsQuery, ProjectDto, ProjectListResponse,
    ProjectResponse,
};

use sb_core::CategoryFilter;

use std::panic::Location;

use axum::{
    Json,
    extract::{Path, Query, State},
};
use error_location::ErrorLocation;

// =============================================================================
// Handlers
// =============================================================================

/// GET /api/v1/projects?category=
///
/// List projects, optionally narrowed to one category
pub async fn list_projects(
    State(state): State<AppState>,
    Query(query): Query<ListProjectsQuery>,
) -> ApiResult<Json<ProjectListResponse>> {
    let filter = CategoryFilter::from_query(query.category.as_deref())?;

    Ok(Json(ProjectListResponse {
        category: filter.as_str().to_string(),
        projects: state
            .catalog
            .filter(filter)
            .into_iter()
            .map(ProjectDto::from)
            .collect(),
    }))
}

/// GET /api/v1/projects/{slug}
///
/// Get a single project by slug
pub async fn get_project(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> ApiResult<Json<ProjectResponse>> {
    let project = state
        .catalog
        .get(&slug)
        .ok_or_else(|| ApiError::NotFound {
            message: format!("Project {} not found", slug),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(Json(ProjectResponse {
        project: project.into(),
        next_project: state.catalog.next_of(&slug).map(ProjectDto::from),
    }))
}
