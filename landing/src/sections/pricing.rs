use crate::content::{PRICING_PLANS, PricingPlan};
use leptos::prelude::*;

/// "Clear pricing" section: billing toggle and one card per [`PricingPlan`].
#[component]
pub fn Pricing() -> impl IntoView {
    view! {
        <section id="pricing" class="pricing">
            <div class="container">
                <h2 class="section-title">"Clear pricing"</h2>
                <p class="section-description">"Real feedback from brands"</p>
                <BillingToggle />
                <div class="pricing-grid">
                    {PRICING_PLANS
                        .iter()
                        .map(|plan| view! { <PlanCard plan=*plan /> })
                        .collect::<Vec<_>>()}
                </div>
                <p class="pricing-note">
                    <span class="pricing-trial">"14-day free trial"</span>
                </p>
            </div>
        </section>
    }
}

// No selection state is wired: Monthly is always styled as the active option
// and neither button changes what the cards show.
#[component]
fn BillingToggle() -> impl IntoView {
    view! {
        <div class="billing-toggle">
            <button type="button" class="billing-option active">"Monthly"</button>
            <button type="button" class="billing-option">"Yearly"</button>
        </div>
    }
}

#[component]
fn PlanCard(plan: PricingPlan) -> impl IntoView {
    view! {
        <article class="plan-card">
            <h3 class="plan-name">{plan.name}</h3>
            <p class="plan-price">{plan.price}</p>
            <p class="plan-description">{plan.description}</p>
            <button type="button" class="btn btn-primary plan-cta">"Get Started"</button>
        </article>
    }
}
