// =============================================================================
// Interactive Studios Web - Pricing Page
// =============================================================================

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::NavButton;
use crate::config::SiteConfig;
use crate::routes::Page;

/// One pricing tier card.
struct Plan {
    name: &'static str,
    price: &'static str,
    features: &'static [&'static str],
    highlighted: bool,
}

static PLANS: [Plan; 3] = [
    Plan {
        name: "Student",
        price: "Free",
        features: &["3 shared scenes", "Up to 5 collaborators", "Community support"],
        highlighted: false,
    },
    Plan {
        name: "Team",
        price: "$12 / month",
        features: &["Unlimited scenes", "Up to 25 collaborators", "Version history"],
        highlighted: true,
    },
    Plan {
        name: "Campus",
        price: "Contact us",
        features: &["Single sign-on", "Unlimited collaborators", "Priority support"],
        highlighted: false,
    },
];

#[component]
pub fn PricingPage() -> impl IntoView {
    let config = expect_context::<SiteConfig>();

    view! {
        <Title text=config.page_title("Pricing") />
        <section class="page page-pricing">
            <h1 class="page-title">"Pricing"</h1>
            <p class="page-subtitle">"Start free. Upgrade when your group grows."</p>
            <div class="page-grid">
                {PLANS
                    .iter()
                    .map(|plan| {
                        view! {
                            <div class={if plan.highlighted { "page-card plan featured" } else { "page-card plan" }}>
                                <h3>{plan.name}</h3>
                                <span class="plan-price">{plan.price}</span>
                                <ul class="plan-features">
                                    {plan.features.iter().map(|f| view! { <li>{*f}</li> }).collect_view()}
                                </ul>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="page-actions">
                <NavButton page=Page::GetStarted class="btn btn-primary" />
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_featured_plan() {
        assert_eq!(PLANS.iter().filter(|p| p.highlighted).count(), 1);
        assert!(PLANS.iter().all(|p| !p.features.is_empty()));
    }
}
