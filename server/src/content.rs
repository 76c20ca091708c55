//! Site content source, queried once at startup.
//!
//! DESIGN
//! ======
//! The page copy is an opaque `SiteContent` document. It comes from, in
//! order of preference, a YAML file, the headless CMS, or the copy compiled
//! into the client crate. Provider failures are logged and fall back to the
//! built-in copy so a CMS outage never keeps the site down.

use std::path::{Path, PathBuf};
use std::time::Duration;

use client::content::SiteContent;
use serde::Deserialize;

use crate::config::{ContentfulConfig, SiteConfig};

/// CMS content type holding the site document.
pub const CONTENT_TYPE_ID: &str = "siteContent";

/// Errors produced while loading content from a provider.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("read {path}: {source}")]
    Read { path: PathBuf, source: std::io::Error },

    #[error("parse {path}: {source}")]
    Yaml { path: PathBuf, source: serde_yaml::Error },

    /// The HTTP client could not be built or the request did not complete.
    #[error("content request failed: {0}")]
    Request(String),

    #[error("content provider returned status {status}")]
    Status { status: u16 },

    #[error("content response parse failed: {0}")]
    Parse(String),

    #[error("content provider returned no siteContent entry")]
    Empty,
}

/// Where the served content came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentOrigin {
    File(PathBuf),
    Contentful,
    Builtin,
}

/// Load the site document and stamp the footer year.
pub async fn load_site_content(config: &SiteConfig) -> SiteContent {
    let (mut content, origin) = match fetch(config).await {
        Ok(loaded) => loaded,
        Err(e) => {
            tracing::warn!(error = %e, "content provider failed, serving built-in content");
            (SiteContent::default(), ContentOrigin::Builtin)
        }
    };
    content.copyright_year = Some(time::OffsetDateTime::now_utc().year());
    tracing::info!(?origin, programs = content.programs.len(), "site content loaded");
    content
}

async fn fetch(config: &SiteConfig) -> Result<(SiteContent, ContentOrigin), ContentError> {
    if let Some(path) = &config.content_path {
        return Ok((load_file(path).await?, ContentOrigin::File(path.clone())));
    }
    if let Some(contentful) = &config.contentful {
        let timeout = Duration::from_secs(config.content_timeout_secs);
        return Ok((fetch_contentful(contentful, timeout).await?, ContentOrigin::Contentful));
    }
    Ok((SiteContent::default(), ContentOrigin::Builtin))
}

/// Read a YAML site document from disk.
pub async fn load_file(path: &Path) -> Result<SiteContent, ContentError> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| ContentError::Read { path: path.to_path_buf(), source })?;
    serde_yaml::from_str(&raw).map_err(|source| ContentError::Yaml { path: path.to_path_buf(), source })
}

/// Entries endpoint for the site document in the configured space.
pub fn entries_url(config: &ContentfulConfig) -> String {
    format!(
        "{}/spaces/{}/environments/{}/entries?content_type={CONTENT_TYPE_ID}&limit=1",
        config.base_url, config.space_id, config.environment
    )
}

pub async fn fetch_contentful(config: &ContentfulConfig, timeout: Duration) -> Result<SiteContent, ContentError> {
    let http = reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| ContentError::Request(e.to_string()))?;

    let response = http
        .get(entries_url(config))
        .bearer_auth(&config.access_token)
        .send()
        .await
        .map_err(|e| ContentError::Request(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(ContentError::Status { status: status.as_u16() });
    }

    let body = response.text().await.map_err(|e| ContentError::Request(e.to_string()))?;
    parse_entries(&body)
}

#[derive(Deserialize)]
struct EntriesResponse {
    #[serde(default)]
    items: Vec<Entry>,
}

#[derive(Deserialize)]
struct Entry {
    fields: SiteContent,
}

/// Take the first entry's fields from an entries response body.
pub fn parse_entries(body: &str) -> Result<SiteContent, ContentError> {
    let response: EntriesResponse = serde_json::from_str(body).map_err(|e| ContentError::Parse(e.to_string()))?;
    response.items.into_iter().next().map(|entry| entry.fields).ok_or(ContentError::Empty)
}

#[cfg(test)]
#[path = "content_test.rs"]
mod tests;
