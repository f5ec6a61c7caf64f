// =============================================================================
// Interactive Studios Web - Contact Page
// =============================================================================

use leptos::prelude::*;
use leptos_meta::Title;

use crate::config::SiteConfig;

#[component]
pub fn ContactPage() -> impl IntoView {
    let config = expect_context::<SiteConfig>();

    view! {
        <Title text=config.page_title("Contact") />
        <section class="page page-contact">
            <h1 class="page-title">"Get in Touch"</h1>
            <p class="page-subtitle">"Questions, feedback, or just want to say hi?"</p>
            <div class="page-grid">
                <div class="page-card">
                    <h3>"Email"</h3>
                    <a href="mailto:hello@interactivestudios.dev" class="page-link">
                        "hello@interactivestudios.dev"
                    </a>
                </div>
                <div class="page-card">
                    <h3>"Support"</h3>
                    <p>"We typically respond within 24-48 hours."</p>
                </div>
            </div>
        </section>
    }
}
