//! Application pages module
//!
//! - Landing page (lead capture)
//! - Not found page

mod landing;
mod not_found;

pub use landing::LandingPage;
pub use not_found::NotFoundPage;
