use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Kind of project a visitor is enquiring about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectType {
    Residential,
    Commercial,
    Interior,
    Renovation,
    Other,
}

impl ProjectType {
    /// Every selectable option, in the order the form lists them
    pub const ALL: [ProjectType; 5] = [
        Self::Residential,
        Self::Commercial,
        Self::Interior,
        Self::Renovation,
        Self::Other,
    ];

    /// Wire value used by the form and the email template
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Residential => "residential",
            Self::Commercial => "commercial",
            Self::Interior => "interior",
            Self::Renovation => "renovation",
            Self::Other => "other",
        }
    }

    /// Human-readable option label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Residential => "Residential",
            Self::Commercial => "Commercial",
            Self::Interior => "Interior Design",
            Self::Renovation => "Renovation",
            Self::Other => "Other",
        }
    }
}

impl FromStr for ProjectType {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "residential" => Ok(Self::Residential),
            "commercial" => Ok(Self::Commercial),
            "interior" => Ok(Self::Interior),
            "renovation" => Ok(Self::Renovation),
            "other" => Ok(Self::Other),
            _ => Err(CoreError::InvalidProjectType {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for ProjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
