//! Hook configuration loaded from `sitemap.toml`.
//!
//! # Sections
//!
//! | Section     | Purpose                                   |
//! |-------------|-------------------------------------------|
//! | `[site]`    | Base URL and built site directory         |
//! | `[sitemap]` | Output file name, gzip copy, indentation  |
//!
//! # Example
//!
//! ```toml
//! [site]
//! url = "https://example.com"
//! dir = "site"
//!
//! [sitemap]
//! gzip = true
//! ```

pub mod defaults;
mod error;
mod site;
mod sitemap;

pub use error::ConfigError;
pub use site::SiteSection;
pub use sitemap::SitemapSection;

use crate::{cli::Cli, generator::entry::normalize_base_url, session::SitemapOptions};
use anyhow::{Result, bail};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Root configuration structure representing sitemap.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Absolute project root (set after loading)
    #[serde(skip)]
    pub root: PathBuf,

    /// Absolute path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Site location
    #[serde(default)]
    pub site: SiteSection,

    /// Sitemap output settings
    #[serde(default)]
    pub sitemap: SitemapSection,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content).map_err(ConfigError::from)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Load the config named by the CLI, falling back to defaults when the file is absent.
    pub fn load(cli: &Cli) -> Result<Self> {
        let root = cli.root.as_deref().unwrap_or(Path::new("./"));
        let config_path = root.join(&cli.config);

        let mut config = if config_path.exists() {
            Self::from_path(&config_path)?
        } else {
            Self::default()
        };
        config.update_with_cli(cli);
        config.validate()?;

        Ok(config)
    }

    /// Update configuration with CLI arguments and anchor paths to the project root
    pub fn update_with_cli(&mut self, cli: &Cli) {
        let root = Self::normalize_path(cli.root.as_deref().unwrap_or(Path::new("./")));

        if let Some(url) = &cli.site_url {
            self.site.url = Some(url.clone());
        }
        Self::update_option(&mut self.site.dir, cli.site_dir.as_ref());
        Self::update_option(&mut self.sitemap.gzip, cli.gzip.as_ref());
        Self::update_option(&mut self.sitemap.pretty, cli.pretty.as_ref());

        self.config_path = Self::normalize_path(&root.join(&cli.config));
        self.site.dir = Self::normalize_path(&root.join(&self.site.dir));
        self.root = root;
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Normalize a path to absolute, using canonicalize if the path exists
    fn normalize_path(path: &Path) -> PathBuf {
        path.canonicalize().unwrap_or_else(|_| {
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                std::env::current_dir()
                    .map(|cwd| cwd.join(path))
                    .unwrap_or_else(|_| path.to_path_buf())
            }
        })
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if let Some(url) = normalize_base_url(self.site.url.as_deref())
            && !url.starts_with("http://")
            && !url.starts_with("https://")
        {
            bail!(ConfigError::Validation(
                "[site.url] must start with http:// or https://".into()
            ));
        }

        let filename = &self.sitemap.filename;
        if filename.is_empty() {
            bail!(ConfigError::Validation(
                "[sitemap.filename] must not be empty".into()
            ));
        }
        if filename.contains(['/', '\\']) {
            bail!(ConfigError::Validation(
                "[sitemap.filename] must be a plain file name".into()
            ));
        }

        Ok(())
    }

    /// Options for a sitemap build session.
    pub fn sitemap_options(&self) -> SitemapOptions {
        SitemapOptions {
            site_url: self.site.url.clone(),
            site_dir: self.site.dir.clone(),
            filename: self.sitemap.filename.clone(),
            gzip: self.sitemap.gzip,
            pretty: self.sitemap.pretty,
        }
    }
}
