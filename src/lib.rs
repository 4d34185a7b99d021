//! Post-build sitemap hook for statically generated sites.
//!
//! Pages are recorded into a [`BuildSession`] as the build pipeline renders
//! them. Once the site is on disk, [`BuildSession::finish`] resolves each
//! page's canonical URL and last modification date and writes `sitemap.xml`
//! and `sitemap.xml.gz` into the site directory.
//!
//! ```no_run
//! use sitemap_hook::{BuildSession, PageRecord, SitemapOptions};
//!
//! let options = SitemapOptions::new(Some("https://example.com".into()), "site");
//! let mut session = BuildSession::new(options);
//! session.record(PageRecord::new("").with_source("docs/index.md"));
//! session.record(PageRecord::new("posts/hello/").with_source("docs/posts/hello.md"));
//! session.finish()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod build;
pub mod cli;
pub mod config;
pub mod generator;
pub mod page;
pub mod session;
pub mod utils;

pub use generator::{
    entry::{EntryResolver, LastmodSource, UrlEntry},
    sitemap::Sitemap,
};
pub use page::{Page, PageRecord};
pub use session::{BuildSession, SitemapOptions, SitemapSummary};
