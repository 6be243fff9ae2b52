//! Literal display copy for the landing page.
//!
//! Every section owns a fixed, ordered set of `'static` items. Nothing here is
//! loaded or mutated at runtime; the arrays are sized in their types so a
//! section always renders the same number of cards.
//!
//! # Example
//!
//! ```rust
//! use portfolix_landing::content::{FEATURES, PRICING_PLANS};
//!
//! assert_eq!(FEATURES[0].title, "Seamless Portfolio Creation");
//! assert_eq!(PRICING_PLANS[1].price, "30 000F cfa");
//! ```

use serde::Serialize;

/// Product name shown in the navigation bar and footer.
pub const BRAND_NAME: &str = "PortfoliX";

/// Root route, target of the brand link and the "View all" action.
pub const HOME_ROUTE: &str = "/";
/// Template gallery, target of the Hero call-to-action.
pub const MODELS_ROUTE: &str = "/models";
/// Portfolio editor.
pub const EDIT_ROUTE: &str = "/edit";

/// Brand logo in the navigation bar.
pub const LOGO_IMAGE: &str = "/logo/logo.png";
/// Background of the decorative Hero banner.
pub const HERO_BANNER_IMAGE: &str = "/images/Content.png";
/// Decorative image pinned to the bottom of the footer.
pub const FOOTER_IMAGE: &str = "/images/footer_image.png";

/// One card of the Features section.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct FeatureItem {
    /// Image path, resolved by the static asset server
    pub image: &'static str,
    /// Card heading
    pub title: &'static str,
    /// One-line description under the heading
    pub text: &'static str,
}

/// One card of the Pricing section.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PricingPlan {
    /// Plan name, e.g. "Smart Plan"
    pub name: &'static str,
    /// Price label, rendered verbatim
    pub price: &'static str,
    /// Short pitch for the plan
    pub description: &'static str,
}

/// A link in the navigation bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct NavLink {
    /// Visible label
    pub label: &'static str,
    /// Route handed to the router
    pub href: &'static str,
}

/// A titled column of footer entries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct FooterColumn {
    /// Column heading
    pub heading: &'static str,
    /// Plain-text entries, in display order
    pub items: &'static [&'static str],
}

/// Cards of the Features section, in display order.
pub const FEATURES: [FeatureItem; 3] = [
    FeatureItem {
        image: "/images/1.jpeg",
        title: "Seamless Portfolio Creation",
        text: "Build your professional identity in minutes",
    },
    FeatureItem {
        image: "/images/2.jpeg",
        title: "Smart Template Management",
        text: "Design freedom at your fingertips",
    },
    FeatureItem {
        image: "/images/3.jpeg",
        title: "Secure User and Content Management",
        text: "Your creativity deserves protection",
    },
];

/// Cards of the Pricing section, in display order.
pub const PRICING_PLANS: [PricingPlan; 3] = [
    PricingPlan {
        name: "Lunch Pack",
        price: "10 000F cfa",
        description: "Transformed content game in weeks with clear lift in traffic and conversions.",
    },
    PricingPlan {
        name: "Smart Plan",
        price: "30 000F cfa",
        description: "Campaigns aligned with real customer connection and creative impact.",
    },
    PricingPlan {
        name: "Boost Kit",
        price: "20 000F cfa",
        description: "Plug into a creative powerhouse with strategic direction and better conversions.",
    },
];

/// Static links of the navigation bar.
pub const NAV_LINKS: [NavLink; 3] = [
    NavLink {
        label: "Home",
        href: HOME_ROUTE,
    },
    NavLink {
        label: "Models",
        href: MODELS_ROUTE,
    },
    NavLink {
        label: "Edit",
        href: EDIT_ROUTE,
    },
];

/// Footer link columns. Entries are plain text, not links.
pub const FOOTER_COLUMNS: [FooterColumn; 3] = [
    FooterColumn {
        heading: "Explore",
        items: &["What We Offer", "Case Studies", "Blog", "Resources", "FAQs"],
    },
    FooterColumn {
        heading: "Company",
        items: &["Home", "About", "Service", "Testimonials", "Pricing"],
    },
    FooterColumn {
        heading: "Legal Links",
        items: &["Privacy Policy", "Cookies", "Disclaimer", "Copyright"],
    },
];

/// Snapshot of all literal copy on the page, for export as JSON.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LandingContent {
    /// Product name
    pub brand: &'static str,
    /// Navigation bar links
    pub nav: &'static [NavLink],
    /// Features cards
    pub features: &'static [FeatureItem],
    /// Pricing cards
    pub pricing: &'static [PricingPlan],
    /// Footer columns
    pub footer: &'static [FooterColumn],
}

impl LandingContent {
    /// Pretty-printed JSON representation.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Collect every literal list into one [`LandingContent`].
pub fn landing_content() -> LandingContent {
    LandingContent {
        brand: BRAND_NAME,
        nav: &NAV_LINKS,
        features: &FEATURES,
        pricing: &PRICING_PLANS,
        footer: &FOOTER_COLUMNS,
    }
}
