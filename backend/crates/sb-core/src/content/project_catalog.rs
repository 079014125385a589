//! Immutable, slug-keyed view over the static project document.

use crate::{CategoryFilter, CoreError, Project, ProjectCategory, Result as CoreErrorResult};

use std::collections::HashMap;
use std::panic::Location;
use std::path::Path;

use error_location::ErrorLocation;
use serde::Deserialize;

const EMBEDDED_PROJECTS: &str = include_str!("../../content/projects.json");

#[derive(Debug, Deserialize)]
struct ProjectDocument {
    projects: Vec<Project>,
}

#[derive(Debug, Clone)]
pub struct ProjectCatalog {
    projects: Vec<Project>,
    by_slug: HashMap<String, usize>,
}

impl ProjectCatalog {
    /// Parse and index a project document.
    ///
    /// Rejects blank or duplicate slugs and `next` links that point nowhere.
    #[track_caller]
    pub fn from_json(json: &str) -> CoreErrorResult<Self> {
        let document: ProjectDocument =
            serde_json::from_str(json).map_err(|source| CoreError::Json {
                source,
                location: ErrorLocation::from(Location::caller()),
            })?;

        Self::from_projects(document.projects)
    }

    #[track_caller]
    pub fn from_projects(projects: Vec<Project>) -> CoreErrorResult<Self> {
        let mut by_slug = HashMap::with_capacity(projects.len());

        for (index, project) in projects.iter().enumerate() {
            if project.slug.trim().is_empty() {
                return Err(Self::catalog_error(format!(
                    "project at index {index} has an empty slug"
                )));
            }

            if by_slug.insert(project.slug.clone(), index).is_some() {
                return Err(Self::catalog_error(format!(
                    "duplicate project slug '{}'",
                    project.slug
                )));
            }
        }

        for project in &projects {
            if let Some(next) = &project.next
                && !by_slug.contains_key(next)
            {
                return Err(Self::catalog_error(format!(
                    "project '{}' links to unknown next project '{}'",
                    project.slug, next
                )));
            }
        }

        Ok(Self { projects, by_slug })
    }

    /// Read a project document from disk
    #[track_caller]
    pub fn load(path: &Path) -> CoreErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| CoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json(&contents)
    }

    /// The project document bundled with the binary
    #[track_caller]
    pub fn embedded() -> CoreErrorResult<Self> {
        Self::from_json(EMBEDDED_PROJECTS)
    }

    pub fn get(&self, slug: &str) -> Option<&Project> {
        self.by_slug.get(slug).map(|&index| &self.projects[index])
    }

    /// All projects in document order
    pub fn all(&self) -> &[Project] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn filter(&self, filter: CategoryFilter) -> Vec<&Project> {
        self.projects
            .iter()
            .filter(|p| filter.matches(p.category))
            .collect()
    }

    pub fn in_category(&self, category: ProjectCategory) -> Vec<&Project> {
        self.filter(CategoryFilter::Only(category))
    }

    pub fn featured(&self) -> Vec<&Project> {
        self.projects.iter().filter(|p| p.featured).collect()
    }

    /// The project suggested after `slug`, if it names one
    pub fn next_of(&self, slug: &str) -> Option<&Project> {
        self.get(slug)
            .and_then(|p| p.next.as_deref())
            .and_then(|next| self.get(next))
    }

    #[track_caller]
    fn catalog_error(message: String) -> CoreError {
        CoreError::Catalog {
            message,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
