use crate::NAV_LINKS;

#[test]
fn test_home_link_only_active_on_root() {
    let home = NAV_LINKS[0];
    assert!(home.is_active("/"));
    assert!(!home.is_active("/about"));
}

#[test]
fn test_section_link_active_on_sub_pages() {
    let projects = NAV_LINKS
        .iter()
        .find(|l| l.href == "/projects")
        .unwrap();

    assert!(projects.is_active("/projects"));
    assert!(projects.is_active("/projects/skyline-penthouse"));
    assert!(!projects.is_active("/projectsx"));
    assert!(!projects.is_active("/contact"));
}
