//! Sitemap serialization.
//!
//! Writes `sitemap.xml` plus a gzip copy listing every page for search engine
//! indexing.
//!
//! # Sitemap Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://example.com/</loc>
//!     <lastmod>2025-01-01</lastmod>
//!   </url>
//! </urlset>
//! ```

use super::entry::UrlEntry;
use crate::log;
use anyhow::{Context, Result};
use flate2::{Compression, write::GzEncoder};
use quick_xml::{
    Writer,
    events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event},
};
use std::{
    collections::HashSet,
    fs,
    io::{Cursor, Write},
    path::{Path, PathBuf},
};

// ============================================================================
// Constants
// ============================================================================

/// XML namespace for sitemap
pub const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Indentation width when pretty-printing
const INDENT_SIZE: usize = 2;

type XmlWriter = Writer<Cursor<Vec<u8>>>;

// ============================================================================
// Sitemap Implementation
// ============================================================================

/// Deduplicated, sorted sitemap entries.
#[derive(Debug, Default)]
pub struct Sitemap {
    urls: Vec<UrlEntry>,
    duplicates: usize,
}

/// Paths of the files written by [`Sitemap::write`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFiles {
    pub sitemap: PathBuf,
    pub gzip: Option<PathBuf>,
}

impl Sitemap {
    /// Build a sitemap from entries in page-processing order.
    ///
    /// The first entry seen for a location wins; later ones are dropped
    /// before sorting by location.
    pub fn from_entries(entries: impl IntoIterator<Item = UrlEntry>) -> Self {
        let mut seen = HashSet::new();
        let mut duplicates = 0;
        let mut urls: Vec<UrlEntry> = entries
            .into_iter()
            .filter(|entry| {
                let fresh = seen.insert(entry.loc.clone());
                duplicates += usize::from(!fresh);
                fresh
            })
            .collect();

        urls.sort_by(|a, b| a.loc.cmp(&b.loc));
        Self { urls, duplicates }
    }

    /// Entries in output order.
    pub fn urls(&self) -> &[UrlEntry] {
        &self.urls
    }

    /// Number of entries dropped as duplicates.
    pub const fn duplicates(&self) -> usize {
        self.duplicates
    }

    /// Serialize to UTF-8 XML bytes, including the XML declaration.
    pub fn to_xml(&self, pretty: bool) -> Result<Vec<u8>> {
        let cursor = Cursor::new(Vec::with_capacity(128 + self.urls.len() * 96));
        let mut writer = if pretty {
            Writer::new_with_indent(cursor, b' ', INDENT_SIZE)
        } else {
            Writer::new(cursor)
        };

        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

        let mut urlset = BytesStart::new("urlset");
        urlset.push_attribute(("xmlns", SITEMAP_NS));
        writer.write_event(Event::Start(urlset))?;

        for entry in &self.urls {
            writer.write_event(Event::Start(BytesStart::new("url")))?;
            write_text_element(&mut writer, "loc", &entry.loc)?;
            write_text_element(&mut writer, "lastmod", &entry.lastmod)?;
            writer.write_event(Event::End(BytesEnd::new("url")))?;
        }

        writer.write_event(Event::End(BytesEnd::new("urlset")))?;

        let mut xml = writer.into_inner().into_inner();
        if pretty {
            xml.push(b'\n');
        }
        Ok(xml)
    }

    /// Write `<dir>/<filename>` and, if `gzip` is set, `<dir>/<filename>.gz`.
    ///
    /// Existing files are overwritten.
    pub fn write(
        &self,
        dir: &Path,
        filename: &str,
        gzip: bool,
        pretty: bool,
    ) -> Result<WrittenFiles> {
        let xml = self.to_xml(pretty)?;

        let sitemap_path = dir.join(filename);
        fs::write(&sitemap_path, &xml)
            .with_context(|| format!("Failed to write sitemap to {}", sitemap_path.display()))?;
        log!("sitemap"; "{}", filename);

        let gzip_path = if gzip {
            let gzip_path = dir.join(format!("{filename}.gz"));
            write_gzip(&gzip_path, &xml).with_context(|| {
                format!("Failed to write compressed sitemap to {}", gzip_path.display())
            })?;
            log!("sitemap"; "{}.gz", filename);
            Some(gzip_path)
        } else {
            None
        };

        Ok(WrittenFiles {
            sitemap: sitemap_path,
            gzip: gzip_path,
        })
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Write a text element: `<tag>text</tag>`.
#[inline]
fn write_text_element(writer: &mut XmlWriter, tag: &str, text: &str) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new(tag)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}

/// Gzip `bytes` into a new file at `path`.
fn write_gzip(path: &Path, bytes: &[u8]) -> Result<()> {
    let file = fs::File::create(path)?;
    let mut encoder = GzEncoder::new(file, Compression::default());
    encoder.write_all(bytes)?;
    encoder.finish()?.flush()?;
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
