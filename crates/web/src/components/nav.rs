// =============================================================================
// Interactive Studios Web - Navigation Bar
// =============================================================================
// Fixed glass nav bar over the landing scene.
// Mobile-responsive: the hamburger opens the menu panel on narrow viewports,
// and every navigation click closes it again.
// =============================================================================

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::config::SiteConfig;
use crate::routes::{active_page, Page};
use crate::state::{RouterNavigator, ShellState};

/// Page the brand logo routes to.
pub const LOGO_TARGET: Page = Page::Home;

/// Call-to-action buttons on the right of the bar, with their classes.
pub const NAV_BUTTONS: [(Page, &str); 2] = [
    (Page::Login, "login-button"),
    (Page::GetStarted, "get-started-button"),
];

/// Class for a menu link, marking the page currently routed.
pub fn nav_item_class(page: Page, current: Option<Page>) -> &'static str {
    if current == Some(page) {
        "nav-item active"
    } else {
        "nav-item"
    }
}

/// Top navigation bar with logo, menu links and call-to-action buttons.
#[component]
pub fn Navbar() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let shell = expect_context::<ShellState>();
    let menu_open = shell.menu_open;

    let navigator = RouterNavigator::new(use_navigate());
    let location = use_location();
    let current = Memo::new(move |_| active_page(&location.pathname.get()));

    view! {
        <nav class="navbar">
            // Logo (always visible)
            <button
                type="button"
                class="nav-logo"
                on:click=move |_| shell.navigate_to_page(&navigator, LOGO_TARGET)
            >
                {config.brand}
            </button>

            // Hamburger button (mobile only)
            <button
                type="button"
                class="hamburger"
                aria-label="Toggle menu"
                aria-expanded=move || menu_open.get().to_string()
                on:click=move |_| shell.toggle_menu()
            >
                "☰"
            </button>

            // Menu panel: always shown on desktop, toggled on mobile
            <div class=move || if menu_open.get() { "nav-menu open" } else { "nav-menu" }>
                {Page::NAV_MENU
                    .into_iter()
                    .map(|page| view! { <NavItem page=page current=current /> })
                    .collect_view()}
            </div>

            <div class="nav-buttons">
                {NAV_BUTTONS
                    .into_iter()
                    .map(|(page, class)| view! { <NavButton page=page class=class /> })
                    .collect_view()}
            </div>
        </nav>
    }
}

/// A text link in the nav menu.
#[component]
pub fn NavItem(page: Page, current: Memo<Option<Page>>) -> impl IntoView {
    let shell = expect_context::<ShellState>();
    let navigator = RouterNavigator::new(use_navigate());

    view! {
        <button
            type="button"
            class=move || nav_item_class(page, current.get())
            aria-current=move || (current.get() == Some(page)).then_some("page")
            on:click=move |_| shell.navigate_to_page(&navigator, page)
        >
            {page.label()}
        </button>
    }
}

/// A button that routes to `page` and closes the menu.
///
/// The label defaults to the page's nav label.
#[component]
pub fn NavButton(
    page: Page,
    #[prop(into)] class: String,
    #[prop(optional, into)] label: Option<String>,
) -> impl IntoView {
    let shell = expect_context::<ShellState>();
    let navigator = RouterNavigator::new(use_navigate());
    let label = label.unwrap_or_else(|| page.label().to_string());

    view! {
        <button
            type="button"
            class=class
            on:click=move |_| shell.navigate_to_page(&navigator, page)
        >
            {label}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_logo_routes_home() {
        let visited = RefCell::new(Vec::new());
        let navigator = |path: &str| visited.borrow_mut().push(path.to_string());
        let shell = ShellState::new();
        shell.toggle_menu();

        shell.navigate_to_page(&navigator, LOGO_TARGET);

        assert_eq!(*visited.borrow(), vec!["/"]);
        assert!(!shell.menu_open.get_untracked());
    }

    #[test]
    fn test_bar_entries_route_to_literal_paths() {
        let visited = RefCell::new(Vec::new());
        let navigator = |path: &str| visited.borrow_mut().push(path.to_string());
        let shell = ShellState::new();

        let entries = Page::NAV_MENU
            .into_iter()
            .chain(NAV_BUTTONS.into_iter().map(|(page, _)| page));
        for page in entries {
            shell.navigate_to_page(&navigator, page);
        }

        assert_eq!(
            *visited.borrow(),
            vec!["/about", "/contact", "/pricing", "/docs", "/login", "/get-started"]
        );
    }

    #[test]
    fn test_nav_buttons_are_routed() {
        for (page, _) in NAV_BUTTONS {
            assert!(Page::ROUTED.contains(&page), "{page:?} has no route");
        }
    }

    #[test]
    fn test_nav_button_labels() {
        let labels: Vec<&str> = NAV_BUTTONS.iter().map(|(page, _)| page.label()).collect();
        assert_eq!(labels, vec!["Log In", "Get Started"]);
    }

    #[test]
    fn test_nav_item_class_marks_current_page() {
        assert_eq!(nav_item_class(Page::Docs, Some(Page::Docs)), "nav-item active");
        assert_eq!(nav_item_class(Page::Docs, Some(Page::About)), "nav-item");
        assert_eq!(nav_item_class(Page::Docs, None), "nav-item");
    }

    #[test]
    fn test_current_page_from_location() {
        assert_eq!(nav_item_class(Page::Pricing, active_page("/pricing/")), "nav-item active");
        assert_eq!(nav_item_class(Page::Pricing, active_page("/blog")), "nav-item");
    }
}
