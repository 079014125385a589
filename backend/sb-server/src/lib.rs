pub mod api;
pub mod app_state;
pub mod contact_workflow;
pub mod error;
pub mod health;
pub mod in_flight;
pub mod logger;
pub mod pages;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    contact::{
        contact::submit_contact, contact_request::ContactRequest,
        contact_response::ContactResponse,
    },
    error::ApiError,
    error::Result as ApiResult,
    projects::{
        list_projects_query::ListProjectsQuery,
        project_dto::ProjectDto,
        project_list_response::ProjectListResponse,
        project_response::ProjectResponse,
        projects::{get_project, list_projects},
    },
};
pub use app_state::AppState;
pub use contact_workflow::{ContactWorkflow, WorkflowOutcome};
pub use error::{Result as ServerErrorResult, ServerError};
pub use in_flight::{InFlightClaim, InFlightSubmissions};

pub use crate::routes::build_router;
