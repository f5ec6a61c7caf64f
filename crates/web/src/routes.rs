// =============================================================================
// Interactive Studios Web - Route Table
// =============================================================================
// Table of Contents:
// 1. Page Enum
// 2. Path Parsing
// =============================================================================
// Every routable page lives here. The nav bar and the router both read from
// these tables, so a link can't point at a path the router doesn't know.
// =============================================================================

use std::fmt;
use std::str::FromStr;

use crate::error::SiteError;

// -----------------------------------------------------------------------------
// 1. Page Enum
// -----------------------------------------------------------------------------

/// A page reachable through client-side navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    About,
    Contact,
    Pricing,
    Docs,
    Login,
    GetStarted,
}

impl Page {
    /// Every page with its own route, in declaration order.
    pub const ROUTED: [Page; 6] = [
        Page::About,
        Page::Contact,
        Page::Pricing,
        Page::Docs,
        Page::Login,
        Page::GetStarted,
    ];

    /// Links shown in the collapsible nav menu.
    pub const NAV_MENU: [Page; 4] = [Page::About, Page::Contact, Page::Pricing, Page::Docs];

    /// URL path for this page.
    pub const fn path(self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::About => "/about",
            Page::Contact => "/contact",
            Page::Pricing => "/pricing",
            Page::Docs => "/docs",
            Page::Login => "/login",
            Page::GetStarted => "/get-started",
        }
    }

    /// Path without its leading slash, as the router matches it.
    pub fn segment(self) -> &'static str {
        self.path().trim_start_matches('/')
    }

    /// Text used for this page's nav entry.
    pub const fn label(self) -> &'static str {
        match self {
            Page::Home => "Interactive Studios",
            Page::About => "About",
            Page::Contact => "Contact",
            Page::Pricing => "Pricing",
            Page::Docs => "Docs",
            Page::Login => "Log In",
            Page::GetStarted => "Get Started",
        }
    }

    // -------------------------------------------------------------------------
    // 2. Path Parsing
    // -------------------------------------------------------------------------

    /// Resolve a URL path to a page. One trailing slash is tolerated.
    pub fn from_path(path: &str) -> Option<Page> {
        let trimmed = match path.strip_suffix('/') {
            Some(rest) if !rest.is_empty() && !rest.ends_with('/') => rest,
            _ => path,
        };

        std::iter::once(Page::Home)
            .chain(Page::ROUTED)
            .find(|page| page.path() == trimmed)
    }
}

/// Page matching the browser's current pathname, if it is one of ours.
pub fn active_page(pathname: &str) -> Option<Page> {
    match pathname.parse::<Page>() {
        Ok(page) => Some(page),
        Err(e) => {
            log::debug!("{e}");
            None
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for Page {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Page::from_path(s).ok_or_else(|| SiteError::UnknownRoute(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routed_paths() {
        let paths: Vec<&str> = Page::ROUTED.iter().map(|p| p.path()).collect();
        assert_eq!(
            paths,
            vec!["/about", "/contact", "/pricing", "/docs", "/login", "/get-started"]
        );
    }

    #[test]
    fn test_from_path_matches_exactly() {
        for page in Page::ROUTED {
            assert_eq!(Page::from_path(page.path()), Some(page));
        }
        assert_eq!(Page::from_path("/"), Some(Page::Home));
        assert_eq!(Page::from_path("/docs/"), Some(Page::Docs));
        assert_eq!(Page::from_path("/Docs"), None);
        assert_eq!(Page::from_path("/docs/intro"), None);
        assert_eq!(Page::from_path("docs"), None);
        assert_eq!(Page::from_path(""), None);
        assert_eq!(Page::from_path("//"), None);
    }

    #[test]
    fn test_nav_menu_is_routed() {
        for page in Page::NAV_MENU.iter() {
            assert!(Page::ROUTED.contains(page), "{page:?} has no route");
        }
        assert!(!Page::ROUTED.contains(&Page::Home));
    }

    #[test]
    fn test_segments() {
        assert_eq!(Page::Home.segment(), "");
        assert_eq!(Page::GetStarted.segment(), "get-started");
        for page in Page::ROUTED {
            assert_eq!(format!("/{}", page.segment()), page.path());
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(Page::Login.label(), "Log In");
        assert_eq!(Page::GetStarted.label(), "Get Started");
        assert_eq!(Page::Home.label(), "Interactive Studios");
    }

    #[test]
    fn test_active_page() {
        assert_eq!(active_page("/about"), Some(Page::About));
        assert_eq!(active_page("/"), Some(Page::Home));
        assert_eq!(active_page("/get-started/"), Some(Page::GetStarted));
        assert_eq!(active_page("/missing"), None);
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!("/pricing".parse::<Page>(), Ok(Page::Pricing));
        assert_eq!(
            "/blog".parse::<Page>(),
            Err(SiteError::UnknownRoute("/blog".to_string()))
        );
        assert_eq!(Page::GetStarted.to_string(), "/get-started");
    }
}
