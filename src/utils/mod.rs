//! Utility modules for the sitemap hook.

pub mod date;
pub mod log;
