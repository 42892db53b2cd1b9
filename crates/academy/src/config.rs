//! Site-wide settings, read from an optional YAML file and the environment.
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::debug;
use maudit::BuildOptions;
use serde::Deserialize;

use crate::base_url::{BaseUrl, is_absolute_url};
use crate::errors::ConfigError;

/// Environment variable overriding [`SiteConfig::url`].
pub const BASE_URL_ENV: &str = "ACADEMY_BASE_URL";
/// Environment variable overriding [`SiteConfig::base_path`].
pub const BASE_PATH_ENV: &str = "ACADEMY_BASE_PATH";

/// Settings for the academy website.
///
/// Every field is optional in the YAML file, missing fields use the values from [`SiteConfig::default()`].
///
/// ## Example
/// ```yaml
/// title: AI Engineering Academy
/// tagline: Learn to build with generative AI
/// url: https://aiengineering.academy
/// base-path: /
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct SiteConfig {
    pub title: String,
    pub tagline: String,
    /// Used for the description meta tag of pages that don't provide their own.
    pub description: String,
    /// Scheme and host the site is deployed to. Canonical URLs and social tags are only emitted when set.
    pub url: Option<String>,
    /// Path the site is served under, `/` unless the site lives in a subdirectory.
    pub base_path: String,
    pub output_dir: PathBuf,
    pub static_dir: PathBuf,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "AI Engineering Academy".to_string(),
            tagline: "Learn to build with generative AI, one course at a time.".to_string(),
            description: "Courses, guides and tools for engineers getting started with generative AI and large language models.".to_string(),
            url: None,
            base_path: "/".to_string(),
            output_dir: "dist".into(),
            static_dir: "static".into(),
        }
    }
}

/// The parts of the configuration that pages display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteMetadata {
    pub title: String,
    pub tagline: String,
    pub description: String,
}

impl SiteConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        Self::parse(yaml, "inline YAML")
    }

    /// Load the configuration from `path`. A missing file is not an error, the defaults are used instead.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        match fs::read_to_string(path) {
            Ok(yaml) => Self::parse(&yaml, &path.display().to_string()),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(target: "config", "No config file at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(source) => Err(ConfigError::ReadFailed {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    fn parse(yaml: &str, origin: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig =
            serde_yaml::from_str(yaml).map_err(|source| ConfigError::ParseFailed {
                origin: origin.to_string(),
                source,
            })?;
        config.check()
    }

    /// Apply [`BASE_URL_ENV`] and [`BASE_PATH_ENV`] from the process environment.
    pub fn with_env_overrides(self) -> Result<Self, ConfigError> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides looked up by environment variable name. Empty values are ignored.
    pub fn with_overrides(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(url) = get(BASE_URL_ENV) {
            debug!(target: "config", "Using {} from {}", url, BASE_URL_ENV);
            self.url = Some(url);
        }
        if let Some(base_path) = get(BASE_PATH_ENV) {
            debug!(target: "config", "Using {} from {}", base_path, BASE_PATH_ENV);
            self.base_path = base_path;
        }

        self.check()
    }

    fn check(self) -> Result<Self, ConfigError> {
        if let Some(url) = &self.url {
            let is_http = url.starts_with("http://") || url.starts_with("https://");
            if !is_http || !is_absolute_url(url) {
                return Err(ConfigError::InvalidUrl(url.clone()));
            }
        }

        Ok(self)
    }

    pub fn base_url(&self) -> BaseUrl {
        let base_url = BaseUrl::new(&self.base_path);
        match &self.url {
            Some(origin) => base_url.with_origin(origin),
            None => base_url,
        }
    }

    pub fn metadata(&self) -> SiteMetadata {
        SiteMetadata {
            title: self.title.clone(),
            tagline: self.tagline.clone(),
            description: self.description.clone(),
        }
    }

    /// Options for [`maudit::coronate`].
    pub fn build_options(&self) -> BuildOptions {
        BuildOptions {
            base_url: self.base_url().site_url(),
            output_dir: self.output_dir.clone(),
            static_dir: self.static_dir.clone(),
            ..Default::default()
        }
    }
}
