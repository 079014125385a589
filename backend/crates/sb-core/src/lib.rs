pub mod contact;
pub mod content;
pub mod error;


pub use contact::contact_field::ContactField;
pub use contact::contact_form::ContactForm;
pub use contact::contact_submission::ContactSubmission;
pub use contact::contact_validator::ContactValidator;
pub use contact::field_errors::FieldErrors;
pub use contact::form_state::{ContactFormState, DeliveryOutcome, SubmitAttempt};
pub use contact::project_type::ProjectType;
pub use contact::status_banner::{BannerKind, SEND_LABEL, SENDING_LABEL, StatusBanner};
pub use contact::submission_status::SubmissionStatus;
pub use content::category_filter::CategoryFilter;
pub use content::company;
pub use content::navigation::{NAV_LINKS, NavLink};
pub use content::project::{Project, Specification};
pub use content::project_catalog::ProjectCatalog;
pub use content::project_category::ProjectCategory;
pub use content::project_status::ProjectStatus;
pub use error::{CoreError, Result};

/// How long the success banner stays up before the form returns to idle.
pub const DEFAULT_SUCCESS_DISPLAY_SECS: u64 = 5;
