//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

pub fn r#true() -> bool {
    true
}

// ============================================================================
// [site] Section Defaults
// ============================================================================

pub mod site {
    use std::path::PathBuf;

    pub fn url() -> Option<String> {
        None
    }

    pub fn dir() -> PathBuf {
        "site".into()
    }
}

// ============================================================================
// [sitemap] Section Defaults
// ============================================================================

pub mod sitemap {
    pub fn filename() -> String {
        "sitemap.xml".into()
    }
}
