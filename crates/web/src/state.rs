// =============================================================================
// Interactive Studios Web - Shell State
// =============================================================================
// Table of Contents:
// 1. Navigator
// 2. Shell State
// 3. Navigation Actions
// =============================================================================

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::routes::Page;

// -----------------------------------------------------------------------------
// 1. Navigator
// -----------------------------------------------------------------------------

/// Anything that can move the app to a new client-side route.
pub trait Navigator {
    fn navigate(&self, path: &str);
}

impl<F> Navigator for F
where
    F: Fn(&str),
{
    fn navigate(&self, path: &str) {
        self(path)
    }
}

/// Navigator backed by the `leptos_router` navigate hook.
#[derive(Clone)]
pub struct RouterNavigator<F> {
    navigate: F,
}

impl<F> RouterNavigator<F>
where
    F: Fn(&str, NavigateOptions),
{
    /// Wrap the closure returned by `use_navigate()`.
    pub fn new(navigate: F) -> Self {
        Self { navigate }
    }
}

impl<F> Navigator for RouterNavigator<F>
where
    F: Fn(&str, NavigateOptions),
{
    fn navigate(&self, path: &str) {
        (self.navigate)(path, NavigateOptions::default());
    }
}

// -----------------------------------------------------------------------------
// 2. Shell State
// -----------------------------------------------------------------------------

/// State owned by the page shell, provided via Leptos context.
///
/// Route state belongs to the router; the shell only tracks whether the
/// mobile menu panel is open.
#[derive(Clone, Copy, Debug)]
pub struct ShellState {
    /// Whether the nav menu panel is showing on narrow viewports.
    pub menu_open: RwSignal<bool>,
}

impl ShellState {
    /// Create shell state with the menu closed.
    pub fn new() -> Self {
        Self {
            menu_open: RwSignal::new(false),
        }
    }

    /// Flip the menu panel.
    pub fn toggle_menu(&self) {
        self.menu_open.update(|open| *open = !*open);
        log::debug!("Menu toggled (open: {})", self.menu_open.get_untracked());
    }

    /// Hide the menu panel.
    pub fn close_menu(&self) {
        self.menu_open.set(false);
    }

    // -------------------------------------------------------------------------
    // 3. Navigation Actions
    // -------------------------------------------------------------------------

    /// Route to `page`, then close the menu.
    pub fn navigate_to_page(&self, navigator: &impl Navigator, page: Page) {
        log::debug!("Navigating to {}", page.path());
        navigator.navigate(page.path());
        self.close_menu();
    }
}

impl Default for ShellState {
    fn default() -> Self {
        Self::new()
    }
}
