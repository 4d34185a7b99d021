//! One sitemap run driven from the command line.
//!
//! ```text
//! run(cli)
//!     │
//!     ├── SiteConfig::load()      sitemap.toml + CLI overrides
//!     ├── load_manifest()         pages in build order
//!     └── BuildSession            record each page, then finish
//! ```

use crate::{
    cli::Cli,
    config::SiteConfig,
    log,
    page::load_manifest,
    session::{BuildSession, SitemapSummary},
};
use anyhow::Result;

/// Load config and manifest, then write the sitemap.
///
/// Returns `Ok(None)` when `[sitemap] enable = false` or no site URL is set.
/// The manifest path is taken as given (relative to the working directory);
/// `source` paths inside it resolve against the project root.
pub fn run(cli: &Cli) -> Result<Option<SitemapSummary>> {
    let config = SiteConfig::load(cli)?;

    if !config.sitemap.enable {
        log!("sitemap"; "disabled in {}", config.config_path.display());
        return Ok(None);
    }

    let pages = load_manifest(&cli.manifest, &config.root)?;

    let mut session = BuildSession::new(config.sitemap_options());
    for page in pages {
        session.record(page);
    }
    session.finish()
}
