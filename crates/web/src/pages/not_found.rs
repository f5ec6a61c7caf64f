// =============================================================================
// Interactive Studios Web - 404 Not Found Page
// =============================================================================

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::NavButton;
use crate::config::SiteConfig;
use crate::routes::Page;

/// 404 Not Found page.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    let config = expect_context::<SiteConfig>();

    view! {
        <Title text=config.page_title("Not Found") />
        <section class="page page-not-found">
            <span class="not-found-code">"404"</span>
            <h1>"Page Not Found"</h1>
            <p>"The page you're looking for doesn't exist or has been moved."</p>
            <NavButton page=Page::Home class="btn btn-primary" label="Go Home" />
        </section>
    }
}
