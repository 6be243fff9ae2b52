// Home page - fixed nav over the stacked landing sections
use crate::sections::{Features, Footer, Hero, Nav, Pricing};
use leptos::prelude::*;

/// Composition root of the landing page.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page">
            <div class="nav-fixed">
                <Nav />
            </div>
            <main class="page-body">
                <div class="hero-gradient">
                    <Hero />
                </div>
                <Features />
                <Pricing />
                <Footer />
            </main>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn sections_follow_document_order() {
        let html = view! { <HomePage /> }.to_html();

        let hero = html.find("Ready to create a professional").unwrap();
        let features = html.find("Main features").unwrap();
        let pricing = html.find("Clear pricing").unwrap();
        let footer = html.find("© 2025 PortfoliX").unwrap();

        assert!(hero < features);
        assert!(features < pricing);
        assert!(pricing < footer);
    }

    #[test]
    fn nav_precedes_hero_gradient() {
        let html = view! { <HomePage /> }.to_html();

        let nav = html.find(r#"class="nav""#).unwrap();
        let gradient = html.find(r#"class="hero-gradient""#).unwrap();
        assert!(nav < gradient);
    }
}
