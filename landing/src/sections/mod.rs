//! Landing page sections, one component each

mod features;
mod footer;
mod hero;
mod nav;
mod pricing;

pub use features::Features;
pub use footer::Footer;
pub use hero::Hero;
pub use nav::Nav;
pub use pricing::Pricing;
