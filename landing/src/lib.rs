//! # portfolix-landing
//!
//! Leptos SSR components for the PortfoliX marketing landing page.
//!
//! The page is a fixed stack of presentational sections: a navigation bar,
//! the Hero call-to-action, the Features grid, the Pricing cards and the
//! Footer. All copy is literal (see [`content`]); rendering has no inputs and
//! always produces the same HTML.
//!
//! ## Quick Start
//!
//! ```rust
//! use portfolix_landing::render_page;
//!
//! let html = render_page();
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains(r#"href="/models""#));
//! ```
//!
//! ## Architecture
//!
//! - [`content`] - Literal display copy and its data types
//! - [`sections`] - Leptos components, one per page section
//! - [`pages`] - Home composition and the full HTML document
//! - [`styles`] - Inline CSS
//! - [`site`] - Writing the rendered page to an output directory
//!
//! ```text
//! PageDocument
//! └── HomePage
//!     ├── Nav
//!     ├── Hero (inside the gradient wrapper)
//!     ├── Features
//!     ├── Pricing
//!     └── Footer
//! ```

#![warn(missing_docs)]

pub mod content;
pub mod pages;
pub mod sections;
pub mod site;
pub mod styles;

use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use pages::{HomePage, PageDocument};

pub use content::{LandingContent, landing_content};
pub use site::{SiteError, write_site};

/// Render the Home composition as an HTML fragment.
///
/// # Example
///
/// ```rust
/// let html = portfolix_landing::render_home();
/// assert!(html.contains("Main features"));
/// ```
pub fn render_home() -> String {
    view! { <HomePage /> }.to_html()
}

/// Render the complete landing page document.
///
/// Returns a full HTML document as a `String`, including `<!DOCTYPE html>`.
pub fn render_page() -> String {
    let html = view! { <PageDocument /> }.to_html();

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_full_document() {
        let html = render_page();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html"));
        assert!(html.contains("<title>PortfoliX - Professional portfolios in minutes</title>"));
        assert!(html.contains("--purple-600"));
    }

    #[test]
    fn page_body_holds_home_sections() {
        let html = render_page();
        let body = html.find("<body>").unwrap();

        assert!(html[body..].contains(r#"class="nav""#));
        assert!(html[body..].contains("Clear pricing"));
    }

    #[test]
    fn rendering_is_byte_identical_across_calls() {
        assert_eq!(render_home(), render_home());
        assert_eq!(render_page(), render_page());
    }

    #[test]
    fn home_keeps_section_order() {
        let html = render_home();
        let hero = html.find("Get started").unwrap();
        let features = html.find("Seamless Portfolio Creation").unwrap();
        let pricing = html.find("Lunch Pack").unwrap();

        assert!(hero < features && features < pricing);
    }

    #[test]
    fn card_counts_match_content() {
        let html = render_home();
        assert_eq!(html.matches(r#"class="feature-card""#).count(), 3);
        assert_eq!(html.matches(r#"class="plan-card""#).count(), 3);
    }
}
