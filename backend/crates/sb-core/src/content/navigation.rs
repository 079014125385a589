#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

impl NavLink {
    /// Home only matches exactly; sections also match their sub-pages.
    pub fn is_active(&self, path: &str) -> bool {
        if self.href == "/" {
            return path == "/";
        }

        path == self.href
            || path
                .strip_prefix(self.href)
                .is_some_and(|rest| rest.starts_with('/'))
    }
}

pub const NAV_LINKS: [NavLink; 5] = [
    NavLink { href: "/", label: "Home" },
    NavLink { href: "/about", label: "About" },
    NavLink { href: "/projects", label: "Projects" },
    NavLink { href: "/team", label: "Team" },
    NavLink { href: "/contact", label: "Contact" },
];
