use crate::content::{BRAND_NAME, FOOTER_COLUMNS, FOOTER_IMAGE};
use leptos::prelude::*;

/// Brand, link columns and copyright line.
#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer-inner">
                <div class="footer-brand">
                    <h3 class="footer-title">{BRAND_NAME}</h3>
                </div>
                <div class="footer-columns">
                    {FOOTER_COLUMNS
                        .iter()
                        .map(|column| {
                            view! {
                                <div class="footer-column">
                                    <h4 class="footer-heading">{column.heading}</h4>
                                    <ul>
                                        {column
                                            .items
                                            .iter()
                                            .map(|item| view! { <li class="footer-item">{*item}</li> })
                                            .collect::<Vec<_>>()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
            <p class="footer-copyright">"© 2025 PortfoliX"</p>
            <img src=FOOTER_IMAGE alt="footer logo" class="footer-image" />
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn renders_all_columns_and_copyright() {
        let html = view! { <Footer /> }.to_html();

        for column in FOOTER_COLUMNS {
            assert!(html.contains(column.heading));
        }
        assert_eq!(html.matches(r#"class="footer-item""#).count(), 14);
        assert!(html.contains("© 2025 PortfoliX"));
        assert!(html.contains(r#"src="/images/footer_image.png""#));
    }
}
