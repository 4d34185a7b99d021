//! URL entry resolution: canonical location and `lastmod` date per page.
//!
//! # Location Rules
//!
//! | Order | Source                       | Result                          |
//! |-------|------------------------------|---------------------------------|
//! | 1     | explicit canonical URL       | used verbatim                   |
//! | 2     | non-empty relative URL       | `{base}/{url}`                  |
//! | 3     | (root page)                  | `{base}/`                       |
//!
//! A location that does not start with the base URL is re-anchored to
//! `{base}/{location without leading slashes}`.
//!
//! # Lastmod Rules
//!
//! See [`LastmodSource::ORDER`]. The first rule producing a date wins.

use crate::{
    page::Page,
    utils::date::{extract_ymd, file_modified_ymd},
};

/// Page metadata key holding the last git revision date.
pub const REVISION_DATE_KEY: &str = "git_revision_date_localized";

/// Page metadata key holding the git creation date.
pub const CREATION_DATE_KEY: &str = "git_creation_date_localized";

/// Single URL entry in the sitemap
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlEntry {
    /// Absolute URL location
    pub loc: String,
    /// Last modification date (YYYY-MM-DD)
    pub lastmod: String,
}

/// Where a `lastmod` value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LastmodSource {
    /// `git_revision_date_localized` page metadata
    RevisionDate,
    /// `git_creation_date_localized` page metadata
    CreationDate,
    /// Modification time of the page's source file
    SourceFile,
    /// Date the sitemap was generated
    BuildDate,
}

impl LastmodSource {
    /// Resolution priority, highest first.
    pub const ORDER: [Self; 4] = [
        Self::RevisionDate,
        Self::CreationDate,
        Self::SourceFile,
        Self::BuildDate,
    ];

    /// Short name used in log output.
    pub const fn label(self) -> &'static str {
        match self {
            Self::RevisionDate => "revision",
            Self::CreationDate => "creation",
            Self::SourceFile => "file",
            Self::BuildDate => "build",
        }
    }

    /// Apply this single rule to a page.
    fn lookup<P: Page + ?Sized>(self, page: &P, today: &str) -> Option<String> {
        match self {
            Self::RevisionDate => page.meta(REVISION_DATE_KEY).and_then(extract_ymd),
            Self::CreationDate => page.meta(CREATION_DATE_KEY).and_then(extract_ymd),
            Self::SourceFile => page.source_path().and_then(file_modified_ymd),
            Self::BuildDate => Some(today.to_owned()),
        }
    }
}

/// Strip trailing slashes from a configured site URL.
///
/// Returns `None` when nothing is left, which disables sitemap output.
pub fn normalize_base_url(site_url: Option<&str>) -> Option<&str> {
    site_url
        .map(|url| url.trim_end_matches('/'))
        .filter(|url| !url.is_empty())
}

/// Resolves pages into URL entries against one base URL and build date.
#[derive(Debug, Clone)]
pub struct EntryResolver<'a> {
    base_url: &'a str,
    today: String,
}

impl<'a> EntryResolver<'a> {
    /// `base_url` must already be normalized (see [`normalize_base_url`]).
    pub fn new(base_url: &'a str, today: impl Into<String>) -> Self {
        Self {
            base_url,
            today: today.into(),
        }
    }

    /// Resolve a page into its URL entry, reporting which lastmod rule matched.
    pub fn resolve<P: Page + ?Sized>(&self, page: &P) -> (UrlEntry, LastmodSource) {
        let loc = self.loc(page);
        let (lastmod, source) = self.lastmod(page);
        (UrlEntry { loc, lastmod }, source)
    }

    /// Canonical absolute URL of a page.
    pub fn loc<P: Page + ?Sized>(&self, page: &P) -> String {
        let base = self.base_url;
        let loc = match page.canonical_url().filter(|url| !url.is_empty()) {
            Some(canonical) => canonical.to_owned(),
            None if !page.url().is_empty() => {
                format!("{base}/{}", page.url().trim_start_matches('/'))
            }
            None => format!("{base}/"),
        };

        if loc.starts_with(base) {
            loc
        } else {
            format!("{base}/{}", loc.trim_start_matches('/'))
        }
    }

    /// Best-effort last modification date of a page.
    pub fn lastmod<P: Page + ?Sized>(&self, page: &P) -> (String, LastmodSource) {
        LastmodSource::ORDER
            .into_iter()
            .find_map(|source| source.lookup(page, &self.today).map(|date| (date, source)))
            .unwrap_or_else(|| (self.today.clone(), LastmodSource::BuildDate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::PageRecord;
    use std::{
        fs,
        time::{Duration, UNIX_EPOCH},
    };

    const BASE: &str = "https://example.com";
    const TODAY: &str = "2026-10-19";

    fn resolver() -> EntryResolver<'static> {
        EntryResolver::new(BASE, TODAY)
    }

    #[test]
    fn test_normalize_base_url() {
        assert_eq!(
            normalize_base_url(Some("https://example.com/")),
            Some("https://example.com")
        );
        assert_eq!(
            normalize_base_url(Some("https://example.com/docs//")),
            Some("https://example.com/docs")
        );
        assert_eq!(normalize_base_url(Some("")), None);
        assert_eq!(normalize_base_url(Some("/")), None);
        assert_eq!(normalize_base_url(None), None);
    }

    #[test]
    fn test_loc_relative_url() {
        let page = PageRecord::new("posts/a/");
        assert_eq!(resolver().loc(&page), "https://example.com/posts/a/");
    }

    #[test]
    fn test_loc_relative_url_with_leading_slash() {
        let page = PageRecord::new("/posts/a/");
        assert_eq!(resolver().loc(&page), "https://example.com/posts/a/");
    }

    #[test]
    fn test_loc_root_page() {
        let page = PageRecord::new("");
        assert_eq!(resolver().loc(&page), "https://example.com/");
    }

    #[test]
    fn test_loc_absolute_canonical_unchanged() {
        let page = PageRecord::new("ignored/").with_canonical_url("https://example.com/posts/b/");
        assert_eq!(resolver().loc(&page), "https://example.com/posts/b/");
    }

    #[test]
    fn test_loc_canonical_path_is_reanchored() {
        let page = PageRecord::new("ignored/").with_canonical_url("/posts/c/");
        assert_eq!(resolver().loc(&page), "https://example.com/posts/c/");

        let page = PageRecord::new("").with_canonical_url("//posts/d/");
        assert_eq!(resolver().loc(&page), "https://example.com/posts/d/");
    }

    #[test]
    fn test_loc_foreign_canonical_is_reanchored() {
        let page = PageRecord::new("").with_canonical_url("https://mirror.org/x/");
        assert_eq!(
            resolver().loc(&page),
            "https://example.com/https://mirror.org/x/"
        );
    }

    #[test]
    fn test_loc_empty_canonical_falls_back_to_url() {
        let page = PageRecord::new("about/").with_canonical_url("");
        assert_eq!(resolver().loc(&page), "https://example.com/about/");
    }

    #[test]
    fn test_loc_base_with_path() {
        let resolver = EntryResolver::new("https://example.com/docs", TODAY);
        let page = PageRecord::new("guide/");
        assert_eq!(resolver.loc(&page), "https://example.com/docs/guide/");
    }

    #[test]
    fn test_lastmod_revision_date_from_markup() {
        let page = PageRecord::new("a/").with_meta(REVISION_DATE_KEY, "<span>2023-05-01</span>");
        assert_eq!(
            resolver().lastmod(&page),
            ("2023-05-01".to_string(), LastmodSource::RevisionDate)
        );
    }

    #[test]
    fn test_lastmod_revision_beats_creation() {
        let page = PageRecord::new("a/")
            .with_meta(CREATION_DATE_KEY, "2020-01-01")
            .with_meta(REVISION_DATE_KEY, "2023-05-01");
        assert_eq!(resolver().lastmod(&page).0, "2023-05-01");
    }

    #[test]
    fn test_lastmod_unparsable_revision_falls_to_creation() {
        let page = PageRecord::new("a/")
            .with_meta(REVISION_DATE_KEY, "<span>yesterday</span>")
            .with_meta(CREATION_DATE_KEY, "<span>2020-01-01</span>");
        assert_eq!(
            resolver().lastmod(&page),
            ("2020-01-01".to_string(), LastmodSource::CreationDate)
        );
    }

    #[test]
    fn test_lastmod_from_source_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("a.md");
        let file = fs::File::create(&source).unwrap();
        // 2025-01-01T23:00:00Z
        file.set_modified(UNIX_EPOCH + Duration::from_secs(20089 * 86400 + 23 * 3600))
            .unwrap();

        let page = PageRecord::new("a/").with_source(&source);
        assert_eq!(
            resolver().lastmod(&page),
            ("2025-01-01".to_string(), LastmodSource::SourceFile)
        );
    }

    #[test]
    fn test_lastmod_metadata_beats_source_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("a.md");
        fs::write(&source, "# A").unwrap();

        let page = PageRecord::new("a/")
            .with_source(&source)
            .with_meta(CREATION_DATE_KEY, "2019-09-09");
        assert_eq!(resolver().lastmod(&page).1, LastmodSource::CreationDate);
    }

    #[test]
    fn test_lastmod_missing_source_falls_to_build_date() {
        let dir = tempfile::tempdir().unwrap();
        let page = PageRecord::new("a/").with_source(dir.path().join("gone.md"));
        assert_eq!(
            resolver().lastmod(&page),
            (TODAY.to_string(), LastmodSource::BuildDate)
        );
    }

    #[test]
    fn test_lastmod_nothing_known() {
        let page = PageRecord::new("a/");
        assert_eq!(resolver().lastmod(&page).0, TODAY);
    }

    #[test]
    fn test_resolve_pairs_loc_and_lastmod() {
        let page = PageRecord::new("posts/a/").with_meta(REVISION_DATE_KEY, "2023-05-01");
        let (entry, source) = resolver().resolve(&page);

        assert_eq!(
            entry,
            UrlEntry {
                loc: "https://example.com/posts/a/".into(),
                lastmod: "2023-05-01".into(),
            }
        );
        assert_eq!(source, LastmodSource::RevisionDate);
    }

    #[test]
    fn test_lastmod_source_order() {
        assert_eq!(
            LastmodSource::ORDER,
            [
                LastmodSource::RevisionDate,
                LastmodSource::CreationDate,
                LastmodSource::SourceFile,
                LastmodSource::BuildDate,
            ]
        );
        assert_eq!(LastmodSource::SourceFile.label(), "file");
    }
}
