use crate::{CategoryFilter, CoreError, ProjectCatalog, ProjectCategory, ProjectStatus};

use googletest::assert_that;
use googletest::prelude::{anything, eq, err, ok};
use tempfile::TempDir;

const TWO_PROJECTS: &str = r#"{
    "projects": [
        {
            "slug": "alpha",
            "title": "Alpha",
            "category": "residential",
            "type": "Villa",
            "location": "Hebbal",
            "description": "First",
            "images": ["/alpha-1.jpg", "/alpha-2.jpg"],
            "next": "beta",
            "featured": true
        },
        {
            "slug": "beta",
            "title": "Beta",
            "category": "commercial",
            "type": "Office",
            "location": "Peenya",
            "status": "in-progress",
            "description": "Second"
        }
    ]
}"#;

// =========================================================================
// Embedded document
// =========================================================================

#[test]
fn given_embedded_document_when_loaded_then_all_projects_indexed() {
    let result = ProjectCatalog::embedded();

    assert_that!(result, ok(anything()));
    let catalog = result.unwrap();
    assert_that!(catalog.len(), eq(6));

    let penthouse = catalog.get("skyline-penthouse").unwrap();
    assert_that!(penthouse.title.as_str(), eq("Skyline Penthouse"));
    assert_that!(penthouse.specifications.len(), eq(6));
    assert_that!(
        catalog.next_of("skyline-penthouse").map(|p| p.slug.as_str()),
        eq(Some("urban-vista"))
    );
}

#[test]
fn given_embedded_document_when_filtered_then_matches_categories() {
    let catalog = ProjectCatalog::embedded().unwrap();

    assert_that!(catalog.in_category(ProjectCategory::Residential).len(), eq(3));
    assert_that!(catalog.in_category(ProjectCategory::Commercial).len(), eq(2));
    assert_that!(catalog.in_category(ProjectCategory::Restoration).len(), eq(1));
    assert_that!(catalog.filter(CategoryFilter::All).len(), eq(6));
    assert_that!(catalog.featured().len(), eq(3));
}

// =========================================================================
// Parsing
// =========================================================================

#[test]
fn given_minimal_projects_when_parsed_then_defaults_apply() {
    let catalog = ProjectCatalog::from_json(TWO_PROJECTS).unwrap();

    let beta = catalog.get("beta").unwrap();
    assert_that!(beta.status, eq(ProjectStatus::InProgress));
    assert_that!(beta.cover_image(), eq("/placeholder.svg"));
    assert!(beta.features.is_empty());
    assert!(!beta.featured);

    let alpha = catalog.get("alpha").unwrap();
    assert_that!(alpha.status, eq(ProjectStatus::Completed));
    assert_that!(alpha.cover_image(), eq("/alpha-1.jpg"));
    assert_that!(alpha.link(), eq("/projects/alpha"));
}

#[test]
fn given_catalog_when_listing_then_document_order_kept() {
    let catalog = ProjectCatalog::from_json(TWO_PROJECTS).unwrap();

    let slugs: Vec<_> = catalog.all().iter().map(|p| p.slug.as_str()).collect();
    assert_eq!(slugs, vec!["alpha", "beta"]);
}

#[test]
fn given_unknown_slug_when_get_then_none() {
    let catalog = ProjectCatalog::from_json(TWO_PROJECTS).unwrap();

    assert!(catalog.get("gamma").is_none());
    assert!(catalog.next_of("beta").is_none());
}

#[test]
fn given_duplicate_slug_when_parsed_then_error() {
    let json = TWO_PROJECTS.replace("\"slug\": \"beta\"", "\"slug\": \"alpha\"");

    let result = ProjectCatalog::from_json(&json);

    assert_that!(result, err(anything()));
}

#[test]
fn given_dangling_next_when_parsed_then_error() {
    let json = TWO_PROJECTS.replace("\"next\": \"beta\"", "\"next\": \"omega\"");

    let result = ProjectCatalog::from_json(&json);

    assert!(matches!(result, Err(CoreError::Catalog { .. })));
}

#[test]
fn given_blank_slug_when_parsed_then_error() {
    let json = TWO_PROJECTS.replace("\"slug\": \"beta\"", "\"slug\": \" \"");

    assert!(matches!(
        ProjectCatalog::from_json(&json),
        Err(CoreError::Catalog { .. })
    ));
}

#[test]
fn given_invalid_json_when_parsed_then_json_error() {
    assert!(matches!(
        ProjectCatalog::from_json("{ not json"),
        Err(CoreError::Json { .. })
    ));
}

#[test]
fn given_unknown_category_when_parsed_then_json_error() {
    let json = TWO_PROJECTS.replace("\"commercial\"", "\"industrial\"");

    assert!(matches!(
        ProjectCatalog::from_json(&json),
        Err(CoreError::Json { .. })
    ));
}

// =========================================================================
// Loading from disk
// =========================================================================

#[test]
fn given_file_on_disk_when_load_then_ok() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("projects.json");
    std::fs::write(&path, TWO_PROJECTS).unwrap();

    let catalog = ProjectCatalog::load(&path).unwrap();

    assert_that!(catalog.len(), eq(2));
}

#[test]
fn given_missing_file_when_load_then_io_error() {
    let temp = TempDir::new().unwrap();

    let result = ProjectCatalog::load(&temp.path().join("missing.json"));

    assert!(matches!(result, Err(CoreError::Io { .. })));
}
