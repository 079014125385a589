//! Contact REST API handler

use crate::{
    ApiError, ApiResult, AppState, ContactRequest, ContactResponse, ContactWorkflow,
    WorkflowOutcome,
};

use sb_core::{ContactFormState, StatusBanner};

use std::panic::Location;
use std::time::Instant;

use axum::{Json, extract::State};
use error_location::ErrorLocation;

/// POST /api/v1/contact
///
/// Validate and deliver one contact message. An identical message that is
/// still being delivered answers 409 without a second send.
pub async fn submit_contact(
    State(state): State<AppState>,
    Json(request): Json<ContactRequest>,
) -> ApiResult<Json<ContactResponse>> {
    let mut form_state = ContactFormState::with_form(request.into(), state.success_display);

    let outcome = ContactWorkflow::run(
        &mut form_state,
        &state.dispatcher,
        &state.in_flight,
        Instant::now(),
    )
    .await;
    let banner = StatusBanner::from_state(&form_state);

    match outcome {
        WorkflowOutcome::Delivered => Ok(Json(ContactResponse {
            status: form_state.status().as_str().to_string(),
            message: banner.map(|b| b.text).unwrap_or_default(),
        })),
        WorkflowOutcome::Invalid => Err(ApiError::Validation {
            fields: form_state.field_errors().clone(),
            location: ErrorLocation::from(Location::caller()),
        }),
        WorkflowOutcome::Failed => Err(ApiError::Delivery {
            message: banner.map(|b| b.text).unwrap_or_default(),
            location: ErrorLocation::from(Location::caller()),
        }),
        WorkflowOutcome::Skipped => Err(ApiError::Conflict {
            message: "This message is already being sent".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }),
    }
}
