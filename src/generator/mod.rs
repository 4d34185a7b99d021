//! Sitemap entry resolution and XML output.

pub mod entry;
pub mod sitemap;
