pub mod backgrounds;
pub mod common;
pub mod icon;
pub mod launch_banner;
pub mod lead_form;
pub mod pages;
pub mod submit;

pub use icon::{Icon, icons};
pub use launch_banner::LaunchBanner;
pub use lead_form::LeadCaptureForm;
