use crate::content::{BRAND_NAME, HOME_ROUTE, LOGO_IMAGE, NAV_LINKS};
use leptos::prelude::*;

/// Top navigation bar: brand link plus the static route links.
///
/// Session-dependent entries (profile menu, search, login) are not part of
/// the public landing page.
#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="nav">
            <div class="nav-inner">
                <a href=HOME_ROUTE class="nav-brand">
                    <div class="nav-logo">
                        <img src=LOGO_IMAGE alt="PortfoliX Logo" />
                    </div>
                    <span class="nav-title">{BRAND_NAME}</span>
                </a>
                <ul class="nav-links">
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <li>
                                    <a href=link.href class="nav-link">{link.label}</a>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ul>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn renders_brand_and_links() {
        let html = view! { <Nav /> }.to_html();

        assert!(html.contains("PortfoliX"));
        assert!(html.contains(r#"src="/logo/logo.png""#));
        assert_eq!(html.matches(r#"class="nav-link""#).count(), 3);
        assert!(html.contains(r#"href="/edit""#));
    }
}
