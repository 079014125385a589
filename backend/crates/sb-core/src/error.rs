use std::path::PathBuf;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid project type: {value} {location}")]
    InvalidProjectType {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid project category: {value} {location}")]
    InvalidCategory {
        value: String,
        location: ErrorLocation,
    },

    #[error("Project catalog error: {message} {location}")]
    Catalog {
        message: String,
        location: ErrorLocation,
    },

    #[error("Project data is not valid JSON: {source} {location}")]
    Json {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
