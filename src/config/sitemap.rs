//! `[sitemap]` section configuration.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[sitemap]` section in sitemap.toml - output settings.
///
/// # Example
/// ```toml
/// [sitemap]
/// enable = true
/// filename = "sitemap.xml"   # compressed copy: sitemap.xml.gz
/// gzip = true
/// pretty = true
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SitemapSection {
    /// Master switch for sitemap generation.
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub enable: bool,

    /// Sitemap file name inside the site directory.
    #[serde(default = "defaults::sitemap::filename")]
    #[educe(Default = defaults::sitemap::filename())]
    pub filename: String,

    /// Also write a gzip-compressed copy.
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub gzip: bool,

    /// Indent the XML with two spaces.
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub pretty: bool,
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;

    #[test]
    fn test_sitemap_section_defaults() {
        let config: SiteConfig = toml::from_str("").unwrap();

        assert!(config.sitemap.enable);
        assert_eq!(config.sitemap.filename, "sitemap.xml");
        assert!(config.sitemap.gzip);
        assert!(config.sitemap.pretty);
    }

    #[test]
    fn test_sitemap_section_custom() {
        let config = r#"
            [sitemap]
            enable = false
            filename = "pages.xml"
            gzip = false
            pretty = false
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert!(!config.sitemap.enable);
        assert_eq!(config.sitemap.filename, "pages.xml");
        assert!(!config.sitemap.gzip);
        assert!(!config.sitemap.pretty);
    }

    #[test]
    fn test_sitemap_section_unknown_field_rejection() {
        let result: Result<SiteConfig, _> = toml::from_str("[sitemap]\nchangefreq = \"daily\"");
        assert!(result.is_err());
    }
}
