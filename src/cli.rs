//! Command-line interface definitions.

use clap::Parser;
use std::path::PathBuf;

/// Write sitemap.xml and sitemap.xml.gz for a built site
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// JSON manifest of rendered pages in build order (path relative to the working directory)
    pub manifest: PathBuf,

    /// Project root; relative paths in the config and manifest resolve against it
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Config file name (default: sitemap.toml)
    #[arg(short = 'C', long, default_value = "sitemap.toml")]
    pub config: PathBuf,

    /// Override `[site].url`.
    ///
    /// Useful for CI/CD deployments where the production URL differs from local development.
    ///
    /// Example: sitemap-hook --site-url "https://example.github.io/docs" pages.json
    #[arg(long = "site-url")]
    pub site_url: Option<String>,

    /// Override `[site].dir`, the built site directory (relative to project root)
    #[arg(long = "site-dir")]
    pub site_dir: Option<PathBuf>,

    /// write sitemap.xml.gz next to sitemap.xml
    #[arg(long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub gzip: Option<bool>,

    /// indent the sitemap with two spaces
    #[arg(long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub pretty: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_minimal() {
        let cli = Cli::try_parse_from(["sitemap-hook", "pages.json"]).unwrap();

        assert_eq!(cli.manifest, PathBuf::from("pages.json"));
        assert_eq!(cli.config, PathBuf::from("sitemap.toml"));
        assert!(cli.root.is_none());
        assert!(cli.site_url.is_none());
        assert!(cli.gzip.is_none());
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::try_parse_from([
            "sitemap-hook",
            "pages.json",
            "--root",
            "blog",
            "--site-url",
            "https://example.com",
            "--site-dir",
            "public",
            "--gzip",
            "false",
            "--pretty",
        ])
        .unwrap();

        assert_eq!(cli.root, Some(PathBuf::from("blog")));
        assert_eq!(cli.site_url.as_deref(), Some("https://example.com"));
        assert_eq!(cli.site_dir, Some(PathBuf::from("public")));
        assert_eq!(cli.gzip, Some(false));
        assert_eq!(cli.pretty, Some(true));
    }

    #[test]
    fn test_cli_requires_manifest() {
        assert!(Cli::try_parse_from(["sitemap-hook"]).is_err());
    }
}
