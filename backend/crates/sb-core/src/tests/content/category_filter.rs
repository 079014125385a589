use crate::{CategoryFilter, ProjectCategory};

#[test]
fn test_from_query_defaults_to_all() {
    assert_eq!(CategoryFilter::from_query(None).unwrap(), CategoryFilter::All);
    assert_eq!(CategoryFilter::from_query(Some("  ")).unwrap(), CategoryFilter::All);
    assert_eq!(CategoryFilter::from_query(Some("all")).unwrap(), CategoryFilter::All);
}

#[test]
fn test_from_query_parses_category() {
    assert_eq!(
        CategoryFilter::from_query(Some("commercial")).unwrap(),
        CategoryFilter::Only(ProjectCategory::Commercial)
    );
}

#[test]
fn test_from_query_rejects_unknown() {
    assert!(CategoryFilter::from_query(Some("industrial")).is_err());
}

#[test]
fn test_options_in_button_order() {
    let labels: Vec<_> = CategoryFilter::options().map(|f| f.label()).collect();
    assert_eq!(
        labels,
        vec!["All Projects", "Residential", "Commercial", "Restoration"]
    );
}

#[test]
fn test_matches() {
    assert!(CategoryFilter::All.matches(ProjectCategory::Restoration));
    assert!(CategoryFilter::Only(ProjectCategory::Residential).matches(ProjectCategory::Residential));
    assert!(!CategoryFilter::Only(ProjectCategory::Residential).matches(ProjectCategory::Commercial));
}
