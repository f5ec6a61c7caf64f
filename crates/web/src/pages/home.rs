// =============================================================================
// Interactive Studios Web - Home Route
// =============================================================================

use leptos::prelude::*;
use leptos_meta::Title;

use crate::config::SiteConfig;

/// The landing shell already is the home page; this only sets the title.
#[component]
pub fn HomePage() -> impl IntoView {
    let config = expect_context::<SiteConfig>();

    view! { <Title text=config.brand /> }
}
