//! Rendered page records handed over by the build pipeline.
//!
//! The sitemap only needs four things from a page, captured by the [`Page`]
//! trait. A host pipeline can implement it for its own page type; the
//! [`PageRecord`] struct is a plain implementation that also deserializes
//! from the JSON page manifest read by the CLI driver.
//!
//! # Manifest Format
//!
//! ```json
//! [
//!   { "url": "", "source": "docs/index.md" },
//!   {
//!     "url": "posts/hello/",
//!     "canonical_url": "https://example.com/posts/hello/",
//!     "meta": { "git_revision_date_localized": "<span>2023-05-01</span>" },
//!     "source": "docs/posts/hello.md"
//!   }
//! ]
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::{
    fs,
    path::{Path, PathBuf},
    rc::Rc,
    sync::Arc,
};

/// Read-only view of a rendered page.
pub trait Page {
    /// URL relative to the site root (e.g. `posts/hello/`). Empty for the root page.
    fn url(&self) -> &str;

    /// Explicit canonical URL, if the page declares one.
    fn canonical_url(&self) -> Option<&str>;

    /// Page metadata value for `key`.
    fn meta(&self, key: &str) -> Option<&Value>;

    /// Absolute path of the page's source file, if known.
    fn source_path(&self) -> Option<&Path>;
}

impl<P: Page + ?Sized> Page for &P {
    fn url(&self) -> &str {
        (**self).url()
    }

    fn canonical_url(&self) -> Option<&str> {
        (**self).canonical_url()
    }

    fn meta(&self, key: &str) -> Option<&Value> {
        (**self).meta(key)
    }

    fn source_path(&self) -> Option<&Path> {
        (**self).source_path()
    }
}

impl<P: Page + ?Sized> Page for Rc<P> {
    fn url(&self) -> &str {
        (**self).url()
    }

    fn canonical_url(&self) -> Option<&str> {
        (**self).canonical_url()
    }

    fn meta(&self, key: &str) -> Option<&Value> {
        (**self).meta(key)
    }

    fn source_path(&self) -> Option<&Path> {
        (**self).source_path()
    }
}

impl<P: Page + ?Sized> Page for Arc<P> {
    fn url(&self) -> &str {
        (**self).url()
    }

    fn canonical_url(&self) -> Option<&str> {
        (**self).canonical_url()
    }

    fn meta(&self, key: &str) -> Option<&Value> {
        (**self).meta(key)
    }

    fn source_path(&self) -> Option<&Path> {
        (**self).source_path()
    }
}

/// A rendered page as listed in a page manifest.
///
/// Fields other than the four below are ignored, so richer page records
/// emitted by a host pipeline can be passed through as-is.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PageRecord {
    /// URL relative to the site root.
    #[serde(default)]
    pub url: String,

    /// Explicit canonical URL.
    #[serde(default)]
    pub canonical_url: Option<String>,

    /// Arbitrary page metadata (front matter, plugin output).
    #[serde(default)]
    pub meta: Map<String, Value>,

    /// Source file path.
    #[serde(default)]
    pub source: Option<PathBuf>,
}

impl PageRecord {
    /// Create a record with only a relative URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    pub fn with_canonical_url(mut self, canonical_url: impl Into<String>) -> Self {
        self.canonical_url = Some(canonical_url.into());
        self
    }

    pub fn with_meta(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.meta.insert(key.into(), value.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<PathBuf>) -> Self {
        self.source = Some(source.into());
        self
    }
}

impl Page for PageRecord {
    fn url(&self) -> &str {
        &self.url
    }

    fn canonical_url(&self) -> Option<&str> {
        self.canonical_url.as_deref()
    }

    fn meta(&self, key: &str) -> Option<&Value> {
        self.meta.get(key)
    }

    fn source_path(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}

/// Parse a JSON page manifest.
///
/// Relative `source` paths are anchored to `root`.
pub fn parse_manifest(content: &str, root: &Path) -> Result<Vec<PageRecord>> {
    let mut pages: Vec<PageRecord> =
        serde_json::from_str(content).context("Invalid page manifest")?;

    for page in &mut pages {
        if let Some(source) = page.source.as_mut()
            && source.is_relative()
        {
            *source = root.join(&*source);
        }
    }

    Ok(pages)
}

/// Load a JSON page manifest from disk.
pub fn load_manifest(path: &Path, root: &Path) -> Result<Vec<PageRecord>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read page manifest {}", path.display()))?;
    parse_manifest(&content, root)
        .with_context(|| format!("Failed to parse page manifest {}", path.display()))
}
