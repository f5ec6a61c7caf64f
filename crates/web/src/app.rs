// =============================================================================
// Interactive Studios Web - Main App Component
// =============================================================================
// Table of Contents:
// 1. Imports
// 2. App Component
// 3. Router Configuration
// =============================================================================

use leptos::prelude::*;
use leptos_meta::provide_meta_context;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::StaticSegment;

use crate::components::Shell;
use crate::config::SiteConfig;
use crate::pages::{
    AboutPage, ContactPage, DocsPage, GetStartedPage, HomePage, LoginPage, NotFoundPage,
    PricingPage,
};
use crate::routes::Page;
use crate::state::ShellState;

// -----------------------------------------------------------------------------
// 2. App Component
// -----------------------------------------------------------------------------

/// Root application component with routing.
///
/// Provides the meta context, [`SiteConfig`] and [`ShellState`] to the shell
/// and every routed page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(SiteConfig::new());
    provide_context(ShellState::new());

    // -------------------------------------------------------------------------
    // 3. Router Configuration
    // -------------------------------------------------------------------------

    view! {
        <Router>
            <Shell />
            <main class="page-outlet">
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=StaticSegment(Page::Home.segment()) view=HomePage />
                    <Route path=StaticSegment(Page::About.segment()) view=AboutPage />
                    <Route path=StaticSegment(Page::Contact.segment()) view=ContactPage />
                    <Route path=StaticSegment(Page::Pricing.segment()) view=PricingPage />
                    <Route path=StaticSegment(Page::Docs.segment()) view=DocsPage />
                    <Route path=StaticSegment(Page::Login.segment()) view=LoginPage />
                    <Route path=StaticSegment(Page::GetStarted.segment()) view=GetStartedPage />
                </Routes>
            </main>
        </Router>
    }
}
