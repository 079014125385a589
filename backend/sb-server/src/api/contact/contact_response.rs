use serde::Serialize;

/// Accepted contact submission response
#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub status: String,
    pub message: String,
}
