// =============================================================================
// Interactive Studios Web - Hero Header
// =============================================================================

use leptos::prelude::*;

use super::NavButton;
use crate::routes::Page;

/// Hero buttons as `(label, target, class)`.
pub const HERO_ACTIONS: [(&str, Page, &str); 2] = [
    ("Explore", Page::Docs, "explore"),
    ("Pricing", Page::Pricing, "pricing"),
];

/// Centered landing headline with the two primary actions.
#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <header class="hero">
            <h1>"Explore the new wave"</h1>
            <p>"Collaborate with your Colleges, Faster & More Efficient!"</p>
            {HERO_ACTIONS
                .into_iter()
                .map(|(label, page, class)| view! { <NavButton page=page class=class label=label /> })
                .collect_view()}
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ShellState;
    use std::cell::RefCell;

    #[test]
    fn test_explore_and_pricing_targets() {
        let visited = RefCell::new(Vec::new());
        let navigator = |path: &str| visited.borrow_mut().push(path.to_string());
        let shell = ShellState::new();
        shell.toggle_menu();

        for (_, page, _) in HERO_ACTIONS {
            shell.navigate_to_page(&navigator, page);
        }

        let labels: Vec<&str> = HERO_ACTIONS.iter().map(|(label, _, _)| *label).collect();
        assert_eq!(labels, vec!["Explore", "Pricing"]);
        assert_eq!(*visited.borrow(), vec!["/docs", "/pricing"]);
        assert!(!shell.menu_open.get_untracked());
    }
}
