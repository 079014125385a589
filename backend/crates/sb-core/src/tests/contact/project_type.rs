use crate::ProjectType;

use std::str::FromStr;

#[test]
fn test_project_type_round_trips_through_wire_value() {
    for project_type in ProjectType::ALL {
        assert_eq!(
            ProjectType::from_str(project_type.as_str()).unwrap(),
            project_type
        );
    }
}

#[test]
fn test_project_type_labels() {
    assert_eq!(ProjectType::Interior.label(), "Interior Design");
    assert_eq!(ProjectType::Residential.label(), "Residential");
}

#[test]
fn test_project_type_rejects_unknown_and_empty() {
    assert!(ProjectType::from_str("").is_err());
    assert!(ProjectType::from_str("Residential").is_err());
    assert!(ProjectType::from_str("industrial").is_err());
}
