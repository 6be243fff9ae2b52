//! Landing page routes

mod document;
mod home;

pub use document::{PAGE_TITLE, PageDocument};
pub use home::HomePage;
