//! Per-build page collection and sitemap finalization.
//!
//! # Lifecycle
//!
//! ```text
//! BuildSession::new(options)          build starts
//!     │
//!     ├── record(page) / on_post_page(output, page)    once per rendered page
//!     │
//!     └── finish(self)                build finished, site written to disk
//!             │
//!             ├── EntryResolver::resolve()   per page, in record order
//!             └── Sitemap::write()           once
//! ```
//!
//! `finish` consumes the session, so pages recorded for one build can never
//! show up in the next.

use crate::{
    generator::{
        entry::{EntryResolver, LastmodSource, normalize_base_url},
        sitemap::Sitemap,
    },
    log,
    page::Page,
    utils::date::today_ymd,
};
use anyhow::Result;
use std::path::PathBuf;

/// Settings for one sitemap build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitemapOptions {
    /// Site base URL. Absent or empty disables sitemap output.
    pub site_url: Option<String>,
    /// Directory the sitemap files are written to.
    pub site_dir: PathBuf,
    /// Sitemap file name; the compressed copy appends `.gz`.
    pub filename: String,
    /// Write the compressed copy.
    pub gzip: bool,
    /// Indent the XML.
    pub pretty: bool,
}

impl SitemapOptions {
    /// Options with the standard `sitemap.xml` / `sitemap.xml.gz` outputs.
    pub fn new(site_url: Option<String>, site_dir: impl Into<PathBuf>) -> Self {
        Self {
            site_url,
            site_dir: site_dir.into(),
            filename: crate::config::defaults::sitemap::filename(),
            gzip: true,
            pretty: true,
        }
    }
}

/// Outcome of a finished session that wrote a sitemap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitemapSummary {
    /// Pages recorded during the build
    pub pages: usize,
    /// `<url>` entries written
    pub urls: usize,
    /// Pages dropped because their location was already listed
    pub duplicates: usize,
    /// How many pages took their lastmod from each rule, in rule order
    pub lastmod_sources: Vec<(LastmodSource, usize)>,
    /// Written sitemap path
    pub sitemap_path: PathBuf,
    /// Written gzip path, if enabled
    pub gzip_path: Option<PathBuf>,
}

/// Collects rendered pages for a single build.
#[derive(Debug)]
pub struct BuildSession<P> {
    options: SitemapOptions,
    pages: Vec<P>,
}

impl<P: Page> BuildSession<P> {
    /// Start a new build with an empty page list.
    pub fn new(options: SitemapOptions) -> Self {
        Self {
            options,
            pages: Vec::new(),
        }
    }

    /// Record a rendered page.
    pub fn record(&mut self, page: P) {
        self.pages.push(page);
    }

    /// Pipeline-filter form of [`record`](Self::record): records `page` and
    /// hands `output` back untouched.
    pub fn on_post_page<O>(&mut self, output: O, page: P) -> O {
        self.record(page);
        output
    }

    /// Pages recorded so far, in record order.
    pub fn pages(&self) -> &[P] {
        &self.pages
    }

    pub fn options(&self) -> &SitemapOptions {
        &self.options
    }

    /// Resolve every recorded page and write the sitemap files.
    ///
    /// Returns `Ok(None)` without touching the filesystem when no site URL is
    /// configured. Write failures are returned as errors.
    pub fn finish(self) -> Result<Option<SitemapSummary>> {
        let Some(base_url) = normalize_base_url(self.options.site_url.as_deref()) else {
            log!("sitemap"; "skipped, no site url configured");
            return Ok(None);
        };

        let resolver = EntryResolver::new(base_url, today_ymd());
        let mut counts = [0usize; LastmodSource::ORDER.len()];
        let entries: Vec<_> = self
            .pages
            .iter()
            .map(|page| {
                let (entry, source) = resolver.resolve(page);
                if let Some(i) = LastmodSource::ORDER.iter().position(|s| *s == source) {
                    counts[i] += 1;
                }
                entry
            })
            .collect();

        let sitemap = Sitemap::from_entries(entries);
        let written = sitemap.write(
            &self.options.site_dir,
            &self.options.filename,
            self.options.gzip,
            self.options.pretty,
        )?;

        let lastmod_sources: Vec<_> = LastmodSource::ORDER.into_iter().zip(counts).collect();
        let sources = lastmod_sources
            .iter()
            .map(|(source, n)| format!("{}={n}", source.label()))
            .collect::<Vec<_>>()
            .join(" ");
        log!(
            "sitemap";
            "{} urls from {} pages ({} duplicates, lastmod: {})",
            sitemap.urls().len(),
            self.pages.len(),
            sitemap.duplicates(),
            sources
        );

        Ok(Some(SitemapSummary {
            pages: self.pages.len(),
            urls: sitemap.urls().len(),
            duplicates: sitemap.duplicates(),
            lastmod_sources,
            sitemap_path: written.sitemap,
            gzip_path: written.gzip,
        }))
    }
}
