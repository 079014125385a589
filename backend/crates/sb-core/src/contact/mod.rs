pub mod contact_field;
pub mod contact_form;
pub mod contact_submission;
pub mod contact_validator;
pub mod field_errors;
pub mod form_state;
pub mod project_type;
pub mod status_banner;
pub mod submission_status;
