use crate::{AppState, get_project, health, list_projects, pages, submit_contact};

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Site pages
        .route("/", get(pages::home::home_page))
        .route("/about", get(pages::about::about_page))
        .route("/projects", get(pages::projects::projects_page))
        .route(
            "/projects/residential",
            get(pages::projects::residential_page),
        )
        .route("/projects/{slug}", get(pages::project_detail::project_page))
        .route("/team", get(pages::team::team_page))
        .route(
            "/contact",
            get(pages::contact::contact_page).post(pages::contact::contact_submit),
        )
        .route("/static/site.css", get(pages::assets::stylesheet))
        // JSON API
        .route("/api/v1/projects", get(list_projects))
        .route("/api/v1/projects/{slug}", get(get_project))
        .route("/api/v1/contact", post(submit_contact))
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        .fallback(pages::not_found::not_found_page)
        // Add shared state
        .with_state(state)
        // The JSON API may be called from other origins
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
