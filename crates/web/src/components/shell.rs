// =============================================================================
// Interactive Studios Web - Page Shell
// =============================================================================
// Static landing layout: nav bar, full-screen scene and hero header.
// =============================================================================

use leptos::prelude::*;

use super::{Hero, Navbar, SceneBackground};
use crate::config::SiteConfig;

/// Landing wrapper: nav bar, scene background and hero header.
#[component]
pub fn Shell() -> impl IntoView {
    let config = expect_context::<SiteConfig>();

    view! {
        <div class="wrapper">
            <Navbar />
            <SceneBackground url=config.scene_url />
            <Hero />
        </div>
    }
}
