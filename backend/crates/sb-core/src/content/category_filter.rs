use crate::{ProjectCategory, Result as CoreErrorResult};

use std::str::FromStr;

/// Selection of the projects page filter bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(ProjectCategory),
}

impl CategoryFilter {
    /// Filter options in button order
    pub fn options() -> impl Iterator<Item = CategoryFilter> {
        std::iter::once(Self::All).chain(ProjectCategory::ALL.into_iter().map(Self::Only))
    }

    /// Missing or blank query values mean "all"
    #[track_caller]
    pub fn from_query(value: Option<&str>) -> CoreErrorResult<Self> {
        match value.map(str::trim) {
            None | Some("") => Ok(Self::All),
            Some(v) => v.parse(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(category) => category.as_str(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All Projects",
            Self::Only(category) => category.label(),
        }
    }

    pub fn matches(&self, category: ProjectCategory) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => *wanted == category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = crate::CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "all" => Ok(Self::All),
            other => other.parse().map(Self::Only),
        }
    }
}
