//! Server configuration parsed from environment variables.
//!
//! Content-provider credentials are optional; without them the site renders
//! its built-in copy. They come as a pair, so one without the other is an
//! error rather than a silent fallback.

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_CONTENTFUL_BASE_URL: &str = "https://cdn.contentful.com";
pub const DEFAULT_CONTENTFUL_ENVIRONMENT: &str = "master";
pub const DEFAULT_CONTENT_TIMEOUT_SECS: u64 = 10;

/// Errors produced while reading configuration.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A value is present but does not parse.
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },

    /// Only half of the content-provider credential pair is set.
    #[error("{present} is set but {missing} is not")]
    PartialCredentials { present: &'static str, missing: &'static str },
}

/// Headless CMS space the content is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentfulConfig {
    pub space_id: String,
    pub access_token: String,
    pub environment: String,
    pub base_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub port: u16,
    pub content_path: Option<PathBuf>,
    pub contentful: Option<ContentfulConfig>,
    pub content_timeout_secs: u64,
    pub assets_dir: PathBuf,
}

impl SiteConfig {
    /// Build typed config from the process environment.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `SITE_CONTENT_PATH`: YAML file with a full or partial site document
    /// - `CONTENTFUL_SPACE_ID` + `CONTENTFUL_ACCESS_TOKEN`: CMS credentials
    /// - `CONTENTFUL_ENVIRONMENT`: default `master`
    /// - `CONTENTFUL_BASE_URL`: default `https://cdn.contentful.com`
    /// - `CONTENT_TIMEOUT_SECS`: default 10
    /// - `ASSETS_DIR`: default `../assets` relative to this crate
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let port = parse_or("PORT", get("PORT"), DEFAULT_PORT)?;
        let content_timeout_secs =
            parse_or("CONTENT_TIMEOUT_SECS", get("CONTENT_TIMEOUT_SECS"), DEFAULT_CONTENT_TIMEOUT_SECS)?;
        if content_timeout_secs == 0 {
            return Err(ConfigError::Invalid { var: "CONTENT_TIMEOUT_SECS", value: "0".into() });
        }

        let contentful = match (get("CONTENTFUL_SPACE_ID"), get("CONTENTFUL_ACCESS_TOKEN")) {
            (Some(space_id), Some(access_token)) => Some(ContentfulConfig {
                space_id,
                access_token,
                environment: get("CONTENTFUL_ENVIRONMENT").unwrap_or_else(|| DEFAULT_CONTENTFUL_ENVIRONMENT.to_owned()),
                base_url: get("CONTENTFUL_BASE_URL")
                    .unwrap_or_else(|| DEFAULT_CONTENTFUL_BASE_URL.to_owned())
                    .trim_end_matches('/')
                    .to_owned(),
            }),
            (Some(_), None) => {
                return Err(ConfigError::PartialCredentials {
                    present: "CONTENTFUL_SPACE_ID",
                    missing: "CONTENTFUL_ACCESS_TOKEN",
                });
            }
            (None, Some(_)) => {
                return Err(ConfigError::PartialCredentials {
                    present: "CONTENTFUL_ACCESS_TOKEN",
                    missing: "CONTENTFUL_SPACE_ID",
                });
            }
            (None, None) => None,
        };

        Ok(Self {
            port,
            content_path: get("SITE_CONTENT_PATH").map(PathBuf::from),
            contentful,
            content_timeout_secs,
            assets_dir: get("ASSETS_DIR").map_or_else(default_assets_dir, PathBuf::from),
        })
    }
}

fn default_assets_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../assets")
}

fn parse_or<T: std::str::FromStr>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value.parse().map_err(|_| ConfigError::Invalid { var, value }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
