use crate::content::{HERO_BANNER_IMAGE, MODELS_ROUTE};
use leptos::prelude::*;

/// Headline, pitch and the "Get started" call-to-action.
#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="container">
                <h1 class="hero-title">
                    "Ready to create a professional"
                    <br />
                    "Portfolio for minutes"
                </h1>
                <p class="hero-description">
                    "Stand out in a competitive market with a professional portfolio, made simple. Portfolix lets you create a stunning, custom portfolio in minutes."
                </p>
                <a href=MODELS_ROUTE class="btn btn-primary hero-cta">
                    "Get started"
                </a>
                <Banner />
            </div>
        </section>
    }
}

// Decorative only: neither button has a handler.
#[component]
fn Banner() -> impl IntoView {
    let background = format!("background: url('{HERO_BANNER_IMAGE}') center/cover; height: 250px;");
    view! {
        <div class="hero-banner" style=background>
            <div class="hero-banner-actions">
                <button type="button" class="pill pill-filled">"Components"</button>
                <button type="button" class="pill pill-outline">"Templates"</button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    fn render() -> String {
        view! { <Hero /> }.to_html()
    }

    #[test]
    fn call_to_action_targets_models() {
        let html = render();
        assert!(html.contains(r#"href="/models""#));
        assert!(html.contains("Get started"));
    }

    #[test]
    fn renders_headline_and_pitch() {
        let html = render();
        assert!(html.contains("Ready to create a professional"));
        assert!(html.contains("Portfolio for minutes"));
        assert!(html.contains("Portfolix lets you create a stunning, custom portfolio in minutes."));
    }

    #[test]
    fn banner_buttons_are_inert() {
        let html = render();
        assert!(html.contains("/images/Content.png"));
        assert!(html.contains("Components"));
        assert!(html.contains("Templates"));
        assert!(!html.contains("onclick"));
    }

    #[test]
    fn rendering_is_idempotent() {
        assert_eq!(render(), render());
    }
}
