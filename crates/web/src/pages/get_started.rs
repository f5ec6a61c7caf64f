// =============================================================================
// Interactive Studios Web - Get Started Page
// =============================================================================

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::NavButton;
use crate::config::SiteConfig;
use crate::routes::Page;

#[component]
pub fn GetStartedPage() -> impl IntoView {
    let config = expect_context::<SiteConfig>();

    view! {
        <Title text=config.page_title("Get Started") />
        <section class="page page-get-started">
            <h1 class="page-title">"Get Started"</h1>
            <p class="page-subtitle">"Set up your first shared scene in a few minutes."</p>
            <div class="page-actions">
                <NavButton page=Page::Docs class="btn btn-primary" label="Read the Docs" />
                <NavButton page=Page::Pricing class="btn btn-secondary" label="Compare Plans" />
            </div>
        </section>
    }
}
