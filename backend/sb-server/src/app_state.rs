use crate::InFlightSubmissions;

use sb_core::ProjectCatalog;
use sb_mail::SubmissionDispatcher;

use std::sync::Arc;
use std::time::Duration;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<ProjectCatalog>,
    pub dispatcher: SubmissionDispatcher,
    /// Contact messages currently being delivered, shared by every route
    pub in_flight: InFlightSubmissions,
    /// How long the contact success banner stays up
    pub success_display: Duration,
    /// Whether email credentials were present at startup
    pub mail_configured: bool,
}

impl AppState {
    pub fn new(
        catalog: ProjectCatalog,
        dispatcher: SubmissionDispatcher,
        success_display: Duration,
        mail_configured: bool,
    ) -> Self {
        Self {
            catalog: Arc::new(catalog),
            dispatcher,
            in_flight: InFlightSubmissions::new(),
            success_display,
            mail_configured,
        }
    }
}
