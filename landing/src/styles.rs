//! CSS styles for the landing page.
//!
//! The stylesheet is inlined into the document `<head>` so the rendered page
//! needs nothing but the image assets from the static server.
//!
//! # Customization
//!
//! ```rust
//! use portfolix_landing::styles::LANDING_CSS;
//!
//! let my_css = ".hero-title { letter-spacing: -0.02em; }";
//! let combined = format!("{}\n{}", LANDING_CSS, my_css);
//! assert!(combined.contains(".hero-title"));
//! ```

/// Complete CSS for the landing page - light theme with purple accents.
///
/// Hover states are the only animation on the page and are pure CSS.
// Kept free of `<`, `>` and `&` so the text node renders unescaped.
pub const LANDING_CSS: &str = r#"
:root {
    --purple-400: #c084fc;
    --purple-600: #9333ea;
    --purple-700: #7e22ce;
    --violet-700: #6d28d9;
    --blue-600: #2563eb;
    --gray-300: #d1d5db;
    --gray-400: #9ca3af;
    --gray-500: #6b7280;
    --gray-600: #4b5563;
    --gray-700: #374151;
    --gray-800: #1f2937;
    --gray-900: #111827;
    --green-400: #4ade80;
    --white: #ffffff;
    --radius: 0.75rem;
    --font-sans: "Inter", ui-sans-serif, system-ui, -apple-system, "Segoe UI", sans-serif;
}

*, *::before, *::after { box-sizing: border-box; }

body {
    margin: 0;
    font-family: var(--font-sans);
    color: var(--gray-900);
    background: var(--white);
    line-height: 1.5;
}

a { color: inherit; text-decoration: none; }
img { max-width: 100%; display: block; }
ul { list-style: none; margin: 0; padding: 0; }

.container {
    max-width: 1120px;
    margin: 0 auto;
    padding: 0 1rem;
}

/* Buttons */
.btn {
    display: inline-block;
    border: none;
    border-radius: 0.375rem;
    padding: 0.5rem 1.25rem;
    font: inherit;
    cursor: pointer;
    transition: background 150ms ease, opacity 150ms ease;
}
.btn-primary { background: var(--purple-600); color: var(--white); }
.btn-primary:hover { background: var(--purple-700); }

.pill {
    border-radius: 9999px;
    padding: 0.5rem 1rem;
    border: none;
    font: inherit;
    cursor: pointer;
}
.pill-filled { background: var(--violet-700); color: var(--white); }
.pill-outline { background: var(--white); color: var(--violet-700); }

/* Navigation */
.nav-fixed { position: fixed; top: 0; left: 0; right: 0; z-index: 50; }
.nav {
    background: var(--white);
    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
}
.nav-inner {
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding: 0.375rem 1rem;
}
.nav-brand { display: flex; align-items: center; gap: 0.375rem; }
.nav-brand:hover { opacity: 0.9; }
.nav-logo { width: 1.625rem; height: 1.625rem; border-radius: 9999px; overflow: hidden; }
.nav-logo img { width: 100%; height: 100%; object-fit: contain; }
.nav-title {
    font-weight: 700;
    font-size: 1.125rem;
    background: linear-gradient(to right, var(--purple-600), var(--blue-600));
    -webkit-background-clip: text;
    background-clip: text;
    color: transparent;
}
.nav-links { display: flex; gap: 1.5rem; font-size: 0.875rem; color: var(--gray-700); }
.nav-link {
    padding-bottom: 0.125rem;
    border-bottom: 2px solid transparent;
    font-weight: 500;
    transition: color 150ms ease, border-color 150ms ease;
}
.nav-link:hover { color: var(--purple-600); border-color: var(--purple-600); }

/* Page layout */
.page-body { padding-top: 4rem; }

/* Hero */
.hero-gradient {
    background: linear-gradient(180deg, #3b0764 0%, #6d28d9 55%, #a78bfa 100%);
    color: var(--white);
    padding: 4rem 0 3rem;
}
.hero { text-align: center; padding: 0 1.5rem; }
.hero-title { font-size: 2.25rem; font-weight: 700; margin: 0; }
.hero-description {
    margin: 2rem auto 0;
    max-width: 42rem;
    color: var(--white);
}
.hero-cta { margin-top: 2rem; padding: 0.75rem 2rem; border-radius: 9999px; }
.hero-banner { margin-top: 3rem; border-radius: 1.5rem; padding: 2rem; }
.hero-banner-actions { display: flex; justify-content: center; gap: 1rem; }

/* Sections */
.section-title { font-size: 1.5rem; font-weight: 700; margin: 0; }
.section-description { color: var(--gray-300); margin-top: 0.5rem; }

/* Features */
.features { text-align: center; padding: 4rem 1rem; }
.features .section-title { color: var(--purple-700); }
.features-grid {
    display: grid;
    grid-template-columns: 1fr;
    gap: 1.5rem;
    margin-top: 1rem;
}
.feature-card { display: flex; flex-direction: column; align-items: center; }
.feature-image { border-radius: 0.5rem; }
.feature-title { margin-top: 0.75rem; font-size: 1rem; font-weight: 600; }
.feature-text { color: var(--gray-600); margin-top: 0.25rem; }
.features-cta { margin-top: 2rem; }

/* Pricing */
.pricing { padding: 3rem 1rem; background: var(--gray-900); color: var(--white); text-align: center; }
.billing-toggle {
    display: inline-flex;
    margin-top: 1.5rem;
    background: var(--white);
    border-radius: 9999px;
}
.billing-option {
    border: none;
    background: transparent;
    padding: 0.5rem 1.5rem;
    font: inherit;
    color: var(--gray-600);
    border-radius: 9999px;
}
.billing-option.active { background: var(--purple-600); color: var(--white); font-weight: 700; }
.pricing-grid {
    display: grid;
    grid-template-columns: 1fr;
    gap: 1.5rem;
    margin-top: 3rem;
    text-align: left;
}
.plan-card { background: var(--gray-800); padding: 1.5rem; border-radius: var(--radius); }
.plan-name { font-size: 1.25rem; font-weight: 700; margin: 0; }
.plan-price { color: var(--purple-400); font-size: 1.5rem; margin-top: 0.5rem; }
.plan-description { margin-top: 1rem; color: var(--gray-300); }
.plan-cta { width: 100%; margin-top: 1.5rem; padding: 0.75rem 0; }
.pricing-note { margin-top: 3rem; color: var(--gray-400); }
.pricing-trial { color: var(--green-400); }

/* Footer */
.footer { position: relative; padding: 3.5rem 1.5rem; background: var(--white); }
.footer-inner { display: flex; flex-direction: column; justify-content: space-between; gap: 2.5rem; }
.footer-title { font-weight: 700; font-size: 1.25rem; color: var(--purple-700); margin: 0; }
.footer-columns { display: flex; gap: 5rem; }
.footer-heading { font-weight: 600; margin: 0 0 0.75rem; }
.footer-copyright { text-align: center; margin-top: 2.5rem; color: var(--gray-500); }
.footer-image { position: absolute; bottom: 0; z-index: 0; }

@media (min-width: 768px) {
    .features-grid, .pricing-grid { grid-template-columns: repeat(3, 1fr); }
    .footer-inner { flex-direction: row; }
}

@media (min-width: 1024px) {
    .footer { padding-left: 5rem; padding-right: 5rem; }
}
"#;
