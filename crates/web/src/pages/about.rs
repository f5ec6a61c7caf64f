// =============================================================================
// Interactive Studios Web - About Page
// =============================================================================

use leptos::prelude::*;
use leptos_meta::Title;

use crate::config::SiteConfig;

#[component]
pub fn AboutPage() -> impl IntoView {
    let config = expect_context::<SiteConfig>();

    view! {
        <Title text=config.page_title("About") />
        <section class="page page-about">
            <h1 class="page-title">"About Us"</h1>
            <p class="page-subtitle">
                "Interactive Studios builds shared 3D spaces where teams plan, review and ship together."
            </p>
            <div class="page-grid">
                <div class="page-card">
                    <h3>"Made for classrooms"</h3>
                    <p>"Started by students who wanted group projects to feel like being in the same room."</p>
                </div>
                <div class="page-card">
                    <h3>"Runs in the browser"</h3>
                    <p>"Nothing to install. Open a link and you are in the scene."</p>
                </div>
            </div>
        </section>
    }
}
