mod contact_validator;
mod form_state;
mod project_type;
