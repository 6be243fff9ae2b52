use crate::content::{FEATURES, FeatureItem, HOME_ROUTE};
use leptos::prelude::*;

/// "Main features" grid with one card per [`FeatureItem`].
#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section id="features" class="features">
            <div class="container">
                <h2 class="section-title">"Main features"</h2>
                <div class="features-grid">
                    {FEATURES
                        .iter()
                        .map(|item| view! { <FeatureCard item=*item /> })
                        .collect::<Vec<_>>()}
                </div>
                <button type="button" class="btn btn-primary features-cta">
                    <a href=HOME_ROUTE>"View all"</a>
                </button>
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(item: FeatureItem) -> impl IntoView {
    view! {
        <article class="feature-card">
            <img src=item.image alt=item.title class="feature-image" />
            <h3 class="feature-title">{item.title}</h3>
            <p class="feature-text">{item.text}</p>
        </article>
    }
}
