pub mod contact;
pub mod contact_request;
pub mod contact_response;
