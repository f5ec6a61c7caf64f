// =============================================================================
// Interactive Studios Web - Login Page
// =============================================================================

use leptos::prelude::*;
use leptos_meta::Title;

use crate::config::SiteConfig;

/// Sign-in form. Submission is not wired to a backend.
#[component]
pub fn LoginPage() -> impl IntoView {
    let config = expect_context::<SiteConfig>();

    view! {
        <Title text=config.page_title("Log In") />
        <section class="page page-login">
            <h1 class="page-title">"Welcome back"</h1>
            <form class="login-form" on:submit=|e| e.prevent_default()>
                <label class="form-label">
                    "Email"
                    <input type="email" class="form-input" placeholder="you@example.com" />
                </label>
                <label class="form-label">
                    "Password"
                    <input type="password" class="form-input" placeholder="••••••••" />
                </label>
                <button type="submit" class="btn btn-primary">"Log In"</button>
            </form>
        </section>
    }
}
