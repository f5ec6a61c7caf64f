// =============================================================================
// Interactive Studios Web - Docs Page
// =============================================================================

use leptos::prelude::*;
use leptos_meta::Title;

use crate::config::SiteConfig;

/// Getting-around guide, reached from the nav bar and the hero "Explore" button.
#[component]
pub fn DocsPage() -> impl IntoView {
    let config = expect_context::<SiteConfig>();

    view! {
        <Title text=config.page_title("Docs") />
        <section class="page page-docs">
            <h1 class="page-title">"Documentation"</h1>
            <p class="page-subtitle">"Everything you need to start collaborating in a scene."</p>
            <ol class="docs-steps">
                <li>"Create a workspace and invite your classmates."</li>
                <li>"Pick a scene template or import your own."</li>
                <li>"Share the link. Everyone edits live."</li>
            </ol>
        </section>
    }
}
