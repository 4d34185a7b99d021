//! `[site]` section configuration.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[site]` section in sitemap.toml - where the built site lives.
///
/// # Example
/// ```toml
/// [site]
/// url = "https://example.com/docs"
/// dir = "site"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteSection {
    /// Base URL every sitemap location is anchored to.
    /// Sitemap generation is skipped when absent or empty.
    #[serde(default = "defaults::site::url")]
    #[educe(Default = defaults::site::url())]
    pub url: Option<String>,

    /// Built site directory; sitemap files are written here.
    #[serde(default = "defaults::site::dir")]
    #[educe(Default = defaults::site::dir())]
    pub dir: PathBuf,
}
