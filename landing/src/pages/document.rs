//! Root document component - the complete HTML page

use super::HomePage;
use crate::styles::LANDING_CSS;
use leptos::prelude::*;

/// Default `<title>` of the landing page.
pub const PAGE_TITLE: &str = "PortfoliX - Professional portfolios in minutes";

/// The complete HTML document wrapping [`HomePage`].
#[component]
pub fn PageDocument(
    /// Text of the `<title>` element
    #[prop(default = PAGE_TITLE)]
    title: &'static str,
) -> impl IntoView {
    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1.0" />
                <link rel="icon" href="/logo/logo.png" />
                <title>{title}</title>
                <style>{LANDING_CSS}</style>
            </head>
            <body>
                <HomePage />
            </body>
        </html>
    }
}
